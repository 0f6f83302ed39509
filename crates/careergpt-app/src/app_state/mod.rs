//! Terminal chat front end.
//!
//! `ChatApp` reads lines from an async reader, turns them into commands and
//! drives a shared `ChatSession`. Requests run in a spawned task so the loop
//! keeps reading input while an answer is being generated.

mod core;
mod input;
mod render;


pub use self::core::ChatApp;
