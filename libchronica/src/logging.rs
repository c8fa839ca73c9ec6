//! Logging setup shared by the Chronica binaries
//!
//! All output goes to stderr so the exporter's stdout stays pipeable.
//! Controlled by `CHRONICA_LOG_FORMAT` (text or json) and
//! `CHRONICA_LOG_LEVEL`; `RUST_LOG` wins when set.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json",
                s
            )),
        }
    }
}

/// Initialize the tracing subscriber.
///
/// # Panics
///
/// Panics if a subscriber has already been installed.
pub fn init(format: LogFormat, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .init();
        }
    }
}

/// Initialize logging from `CHRONICA_LOG_FORMAT` / `CHRONICA_LOG_LEVEL`,
/// falling back to text at info level.
pub fn init_from_env() {
    let format = std::env::var("CHRONICA_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();

    let level = std::env::var("CHRONICA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    init(format, &level);
}
