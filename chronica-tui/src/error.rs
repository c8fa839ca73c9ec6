//! Error types for chronica-tui

use thiserror::Error;

/// TUI-specific errors wrapping core and terminal failures
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Core error: {0}")]
    Core(#[from] libchronica::ChronicaError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
