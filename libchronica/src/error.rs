//! Error types for Chronica

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChronicaError>;

#[derive(Error, Debug)]
pub enum ChronicaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Invalid input: {0}")]
    Invalid(String),
}

impl ChronicaError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ChronicaError::Invalid(_) => 3,
            ChronicaError::Feed(_) => 2,
            ChronicaError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Failures while loading the event feed.
///
/// This is the only error kind surfaced to the user as a message; everything
/// downstream of a successful load degrades instead of erroring.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Malformed feed payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read feed file: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = ChronicaError::Invalid("unknown format".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_feed_error() {
        let error = ChronicaError::Feed(FeedError::Timeout(30));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_config_error() {
        let error = ChronicaError::Config(ConfigError::MissingField("feed.url".to_string()));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_feed_error_message_formatting() {
        let error = ChronicaError::Feed(FeedError::Timeout(30));
        assert_eq!(
            format!("{}", error),
            "Feed error: Feed request timed out after 30 seconds"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let error: ChronicaError = FeedError::from(parse_err).into();

        match error {
            ChronicaError::Feed(FeedError::Parse(_)) => {}
            other => panic!("Expected FeedError::Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_config_error_message_includes_field() {
        let error = ConfigError::MissingField("feed.url".to_string());
        let message = format!("{}", error);
        assert!(message.contains("Missing required field"));
        assert!(message.contains("feed.url"));
    }
}
