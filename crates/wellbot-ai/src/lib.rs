//! Conversation engine for wellbot.
//!
//! Provides:
//! - An append-only conversation `Session` with bounded context slices
//! - Response post-processing (bullet normalization, word truncation)
//! - A typing-reveal sequencer for simulated streaming display
//! - Prompt templates and the fixed quick-topic list
//! - A Gemini implementation of the `CompletionClient` capability

pub mod gemini;
pub mod postprocess;
pub mod prompt;
pub mod reveal;
pub mod session;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use postprocess::{bulletize, truncate, PostProcess, BULLET};
pub use prompt::{quick_topic, QUICK_TOPICS};
pub use reveal::{reveal, Reveal};
pub use session::{Role, Session, Turn};

/// A hosted text-generation model reached over the network.
///
/// The session only ever sees this trait, so tests substitute a
/// deterministic stub for the real client.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Authentication failed: {0}")]
    AuthError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout after {}s", .0.as_secs())]
    Timeout(std::time::Duration),
}
