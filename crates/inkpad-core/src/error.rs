//! Error types for inkpad-core

use thiserror::Error;

/// Result type alias using inkpad-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in inkpad-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP failure (also covers response body decoding)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote responded with a non-success status; the message carries
    /// the response body text, or an operation-specific fallback when empty
    #[error("{0}")]
    Api(String),

    /// JSON (de)serialization error
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Secure storage error
    #[error("Secure storage error: {0}")]
    SecureStorage(String),
}
