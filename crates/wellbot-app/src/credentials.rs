//! API key resolution: named environment variable, then a hidden prompt.

use std::io::IsTerminal;

use dialoguer::Password;
use tracing::{debug, warn};
use wellbot_common::ConfigError;

/// Read the model API key from `env_var`, prompting on a terminal when it
/// is unset. A missing key is fatal.
pub fn resolve_api_key(env_var: &str) -> Result<String, ConfigError> {
    resolve_with(env_var, std::env::var(env_var).ok(), || {
        if !std::io::stdin().is_terminal() {
            return None;
        }
        Password::new()
            .with_prompt(format!("{env_var} is not set. Enter your Gemini API key"))
            .allow_empty_password(true)
            .interact()
            .map_err(|e| warn!("API key prompt failed: {e}"))
            .ok()
    })
}

fn resolve_with(
    env_var: &str,
    from_env: Option<String>,
    prompt: impl FnOnce() -> Option<String>,
) -> Result<String, ConfigError> {
    if let Some(key) = from_env.filter(|k| !k.trim().is_empty()) {
        debug!("API key loaded from {env_var}");
        return Ok(key.trim().to_string());
    }

    match prompt() {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(ConfigError::MissingApiKey(env_var.to_string())),
    }
}
