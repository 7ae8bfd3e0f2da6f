pub mod errors;

pub use errors::{ConfigError, WellbotError};

pub type Result<T> = std::result::Result<T, WellbotError>;
