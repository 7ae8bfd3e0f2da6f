//! Full configuration validation.
//!
//! Validates all numeric ranges and required strings. Each domain has its
//! own submodule; this orchestrator calls them all and collects errors into
//! a single `ConfigError`.

mod ai;
mod chat;
mod helpers;


use crate::schema::WellbotConfig;
use wellbot_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WellbotConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    ai::validate_ai(&mut errors, config);
    chat::validate_chat(&mut errors, config);
    chat::validate_display(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
