//! Error types for the Orthos library.
//!
//! All failures are represented by the [`OrthosError`] enum, which uses the
//! `thiserror` crate for automatic `Error` trait implementation and provides
//! convenient constructor methods for the string-carrying variants.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Orthos operations.
#[derive(Error, Debug)]
pub enum OrthosError {
    /// I/O errors (word-list loading, terminal interaction)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary-related errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with OrthosError.
pub type Result<T> = std::result::Result<T, OrthosError>;

impl OrthosError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        OrthosError::Dictionary(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        OrthosError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        OrthosError::Other(msg.into())
    }
}
