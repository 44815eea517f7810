use std::io;
use thiserror::Error;

/// Custom error type for mac-maint
#[derive(Error, Debug)]
pub enum MaintError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command failed: {0}")]
    Command(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for mac-maint
pub type Result<T> = std::result::Result<T, MaintError>;

impl MaintError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MaintError::Config(msg.into())
    }

    /// Create a command error
    pub fn command<S: Into<String>>(msg: S) -> Self {
        MaintError::Command(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MaintError::Other(msg.into())
    }
}
