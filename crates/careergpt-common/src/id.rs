use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Last id handed out by [`HistoryId::next`], in Unix milliseconds.
static LAST_HISTORY_ID: AtomicI64 = AtomicI64::new(0);

/// Short random id used to tie log lines of one outbound request together.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Identifier of a history entry, derived from its creation time.
///
/// The value is the creation time in Unix milliseconds. Ids are strictly
/// increasing within a process: an id requested in the same millisecond as
/// the previous one is bumped past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HistoryId(i64);

impl HistoryId {
    pub fn next() -> Self {
        Self::next_after_millis(chrono::Utc::now().timestamp_millis())
    }

    fn next_after_millis(now_ms: i64) -> Self {
        let mut last = LAST_HISTORY_ID.load(Ordering::Relaxed);
        loop {
            let candidate = now_ms.max(last + 1);
            match LAST_HISTORY_ID.compare_exchange_weak(
                last,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Self(candidate),
                Err(actual) => last = actual,
            }
        }
    }
}

impl fmt::Display for HistoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
