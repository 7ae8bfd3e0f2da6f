//! Terminal display configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Delay between typing-reveal steps in milliseconds (0-1000, 0 disables).
    pub reveal_delay_ms: u32,
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 30,
            color: true,
        }
    }
}
