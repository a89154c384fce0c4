//! Storage error types.

use thiserror::Error;

/// Errors that can occur during secret storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No secret is provisioned for the fingerprint.
    #[error("no secret provisioned for fingerprint '{fingerprint}'")]
    NotFound {
        /// The fingerprint that was looked up.
        fingerprint: String,
    },

    /// Backend failure (connection, serialization, ...).
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a not found error for a fingerprint.
    #[must_use]
    pub fn not_found(fingerprint: impl Into<String>) -> Self {
        Self::NotFound {
            fingerprint: fingerprint.into(),
        }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
