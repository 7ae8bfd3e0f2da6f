use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use wellbot_config::{ResponseMode, WellbotConfig};

/// wellbot: a terminal health and wellness assistant powered by Gemini.
#[derive(Parser, Debug)]
#[command(name = "wellbot", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, wellbot_ai=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of recent turns sent with each question.
    #[arg(long)]
    pub context_turns: Option<u32>,

    /// How replies are reshaped before display.
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Word limit used by `--mode truncate`.
    #[arg(long)]
    pub max_words: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    None,
    Bulletize,
    Truncate,
}

impl From<Mode> for ResponseMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::None => ResponseMode::None,
            Mode::Bulletize => ResponseMode::Bulletize,
            Mode::Truncate => ResponseMode::Truncate,
        }
    }
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut WellbotConfig) {
        if let Some(n) = self.context_turns {
            config.chat.context_turns = n;
        }
        if let Some(mode) = self.mode {
            config.chat.mode = mode.into();
        }
        if let Some(n) = self.max_words {
            config.chat.max_words = n;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
