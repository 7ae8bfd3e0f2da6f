//! wellbot configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wellbot_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("context turns: {}", config.chat.context_turns);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    AiConfig, ChatConfig, DisplayConfig, LogLevel, LoggingConfig, ResponseMode, WellbotConfig,
    DEFAULT_GREETING,
};

use std::path::Path;
use wellbot_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// An explicit path must exist. The default path is created with a
/// commented template on first run. Either way the result is validated.
pub fn load_config(path: Option<&Path>) -> Result<WellbotConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
