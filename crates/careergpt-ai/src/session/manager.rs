//! ChatSession struct, state accessors and history selection.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use careergpt_common::{HistoryEntry, HistoryId, Message};
use tracing::debug;

use super::types::SessionSnapshot;

#[derive(Debug, Default)]
pub(super) struct SessionState {
    /// Exchanged messages, in arrival order.
    pub(super) transcript: Vec<Message>,
    /// One entry per question message, same order.
    pub(super) history: Vec<HistoryEntry>,
    /// Input buffer, cleared when a submission is accepted.
    pub(super) draft: String,
    pub(super) selected: Option<HistoryId>,
    /// Text of the most recent answer, fallback included.
    pub(super) last_answer: Option<String>,
}

/// A chat session: transcript, question history and the request flag.
///
/// Shareable through an `Arc`: the state sits behind a mutex that is never
/// held across an await, and the request flag is an atomic.
#[derive(Debug, Default)]
pub struct ChatSession {
    pub(super) state: Mutex<SessionState>,
    /// Whether a request is outstanding.
    pub(super) busy: AtomicBool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a request is currently outstanding.
    pub fn is_generating(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.lock().draft = text.into();
    }

    pub fn draft(&self) -> String {
        self.lock().draft.clone()
    }

    /// Get the full transcript.
    pub fn transcript(&self) -> Vec<Message> {
        self.lock().transcript.clone()
    }

    /// Get the question history, oldest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.lock().history.clone()
    }

    pub fn last_answer(&self) -> Option<String> {
        self.lock().last_answer.clone()
    }

    pub fn selected_history_entry(&self) -> Option<HistoryId> {
        self.lock().selected
    }

    /// Mark a history entry as selected.
    ///
    /// Returns `false` and leaves the selection untouched if no entry has
    /// this id. Selecting does not change the transcript.
    pub fn select_history_entry(&self, id: HistoryId) -> bool {
        let mut state = self.lock();
        if !state.history.iter().any(|entry| entry.id == id) {
            debug!(%id, "ignoring selection of unknown history entry");
            return false;
        }
        state.selected = Some(id);
        debug!(%id, "history entry selected");
        true
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock();
        SessionSnapshot {
            transcript: state.transcript.clone(),
            history: state.history.clone(),
            draft: state.draft.clone(),
            selected: state.selected,
            last_answer: state.last_answer.clone(),
            generating: self.is_generating(),
        }
    }
}
