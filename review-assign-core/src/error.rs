//! Error types for review-assign

use thiserror::Error;

/// Result type alias for review-assign operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for review-assign operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error (webhook payloads)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Repository or bot configuration is missing or unreadable.
    /// Fatal for the pull request handler.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A call through the review gateway failed
    #[error("Gateway error: {0}")]
    Gateway(String),
}

impl Error {
    /// Whether this is a configuration failure
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}
