//! Conversation configuration: greeting, context window, post-processing.

use serde::{Deserialize, Serialize};

/// Default assistant greeting shown at session start.
pub const DEFAULT_GREETING: &str =
    "Hello! I'm your Health & Wellness Assistant. How can I help you today? 😊";

/// How model replies are reshaped before display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ResponseMode {
    #[default]
    None,
    Bulletize,
    Truncate,
}

/// Conversation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub greeting: String,
    /// Number of recent turns sent as context (0-100).
    pub context_turns: u32,
    pub mode: ResponseMode,
    /// Word limit for `mode = "truncate"` (1-10000).
    pub max_words: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.into(),
            context_turns: 6,
            mode: ResponseMode::None,
            max_words: 150,
        }
    }
}
