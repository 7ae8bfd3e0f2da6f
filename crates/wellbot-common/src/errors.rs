use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("missing API key: set {0} or enter it when prompted")]
    MissingApiKey(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WellbotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("chat.max_words = 0 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: chat.max_words = 0 is out of range"
        );

        let err = ConfigError::MissingApiKey("GOOGLE_API_KEY".into());
        assert_eq!(
            err.to_string(),
            "missing API key: set GOOGLE_API_KEY or enter it when prompted"
        );
    }

    #[test]
    fn wellbot_error_from_config() {
        let config_err = ConfigError::MissingApiKey("GOOGLE_API_KEY".into());
        let err: WellbotError = config_err.into();
        assert!(matches!(err, WellbotError::Config(_)));
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }

    #[test]
    fn wellbot_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed");
        let err: WellbotError = io_err.into();
        assert!(matches!(err, WellbotError::Io(_)));
        assert!(err.to_string().contains("stdin closed"));
    }

    #[test]
    fn wellbot_error_ai_display() {
        let err = WellbotError::Ai("failed to build HTTP client".into());
        assert_eq!(err.to_string(), "ai error: failed to build HTTP client");
    }
}
