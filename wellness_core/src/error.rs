//! Error types for the wellness_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for wellness_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The backing key-value storage refused the operation
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Entry rejected at the input boundary
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Unrecognised user-supplied option value
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
