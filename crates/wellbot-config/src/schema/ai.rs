//! Completion model configuration.

use serde::{Deserialize, Serialize};

/// Hosted model settings.
///
/// The API key itself never lives in the config file; `api_key_env` names
/// the environment variable it is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub model: String,
    pub api_key_env: String,
    /// Valid range: 1-65536.
    pub max_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Upper bound on a single completion call, in seconds (1-600).
    pub timeout_secs: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            api_key_env: "GOOGLE_API_KEY".into(),
            max_tokens: 4096,
            temperature: 0.7,
            timeout_secs: 60,
        }
    }
}
