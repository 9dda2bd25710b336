//! Custom error types for stepform
//!
//! Errors of the application shell (paths, settings, state file, terminal).
//! Form validation failures are not part of this hierarchy: they are handled
//! inside the wizard and surfaced through its notifier.

use thiserror::Error;

/// The main error type for stepform operations
#[derive(Error, Debug)]
pub enum StepformError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Key-value store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl StepformError {
    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for StepformError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StepformError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for stepform operations
pub type StepformResult<T> = Result<T, StepformError>;
