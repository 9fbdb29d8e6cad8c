//! Error handling module for the dessert clicker
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Share failures have their own type in [`ShareError`] because they are
//! recovered locally and never abort the caller.

use thiserror::Error;

/// Main error type for the dessert clicker
#[derive(Error, Debug)]
pub enum ClickerError {
    /// Catalog lookup with an index outside `[0, len)`
    #[error("Dessert index {index} is out of range (catalog has {len} desserts)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A catalog needs at least one dessert to start a session
    #[error("Catalog must contain at least one dessert")]
    EmptyCatalog,

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for dessert clicker operations
pub type Result<T> = std::result::Result<T, ClickerError>;

impl ClickerError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

/// Failure reported by a share collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// No share mechanism could take the summary
    #[error("Sharing not available: {0}")]
    Unavailable(String),
}

impl ShareError {
    /// Create an unavailable error
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }
}
