//! Chat session state.
//!
//! A `ChatSession` holds the transcript, the question history, the input
//! draft and the request flag. At most one request is in flight: a second
//! submission while one is outstanding is rejected before anything is
//! appended.

mod chat;
mod manager;
mod types;


pub use manager::ChatSession;
pub use types::{SessionSnapshot, SubmitError, FALLBACK_ANSWER};
