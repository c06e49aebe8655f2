//! Error types for the rating subsystem
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum ScorebookError {
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Malformed rating record {path}: {reason}")]
    MalformedRecord { path: String, reason: String },

    #[error("Invalid score input: {input}")]
    InvalidScore { input: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}
