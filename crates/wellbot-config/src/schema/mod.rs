//! Configuration schema types for wellbot.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the assistant ships with.

mod ai;
mod chat;
mod display;
mod system;

pub use ai::*;
pub use chat::*;
pub use display::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for wellbot.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WellbotConfig {
    pub ai: AiConfig,
    pub chat: ChatConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}
