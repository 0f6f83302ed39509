//! Session types and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};

use careergpt_common::{HistoryEntry, HistoryId, Message};

/// Answer shown whenever generation fails, whatever the cause.
pub const FALLBACK_ANSWER: &str = "Sorry - Something went wrong. Please try again!";

/// Why a submission was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("question is empty")]
    EmptyQuestion,
    #[error("a request is already in progress")]
    Busy,
}

/// Point-in-time copy of the session, for rendering.
#[derive(Debug, Clone, Default)]
pub struct SessionSnapshot {
    pub transcript: Vec<Message>,
    pub history: Vec<HistoryEntry>,
    pub draft: String,
    pub selected: Option<HistoryId>,
    pub last_answer: Option<String>,
    pub generating: bool,
}

/// Guard that clears the `busy` flag on drop, ensuring it is always released
/// even if the future is cancelled or an early return occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy lock. Returns `Err` if already busy.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, SubmitError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(SubmitError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
