//! Answer generation for CareerGPT.
//!
//! Provides:
//! - the `AnswerClient` trait, the seam between the chat session and the
//!   text-generation backend
//! - a Gemini client for the Generative Language API
//! - the advisor prompt template
//! - `ChatSession`, which owns the transcript, the question history and the
//!   single-slot request guard

pub mod gemini;
pub mod prompt;
pub mod session;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use prompt::build_prompt;
pub use session::{ChatSession, SessionSnapshot, SubmitError, FALLBACK_ANSWER};

/// A backend that turns a prompt into answer text.
#[async_trait]
pub trait AnswerClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
