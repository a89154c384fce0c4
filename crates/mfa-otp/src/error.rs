//! OTP engine error types.
//!
//! Per-request failures (`SecretNotFound`, `InvalidTokenFormat`,
//! `InvalidToken`) are ordinary validation outcomes: callers convert
//! them to a non-match response. Display texts stay generic so the
//! distinction cannot leak to clients.

use mfa_store::StoreError;
use thiserror::Error;

/// Errors produced by the OTP engine.
#[derive(Debug, Error)]
pub enum MfaError {
    /// No secret is provisioned for the fingerprint.
    #[error("validation failed")]
    SecretNotFound,

    /// Token is not a string of exactly the configured digit count.
    #[error("validation failed")]
    InvalidTokenFormat,

    /// Token matched no candidate code in the tolerance window.
    #[error("validation failed")]
    InvalidToken,

    /// Storage backend failure.
    #[error("storage error: {0}")]
    Store(StoreError),

    /// Internal error (e.g. system clock before the Unix epoch).
    #[error("internal error: {0}")]
    Internal(String),
}

impl MfaError {
    /// Returns whether this error is an ordinary validation rejection,
    /// as opposed to a server-side failure.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::SecretNotFound | Self::InvalidTokenFormat | Self::InvalidToken
        )
    }
}

impl From<StoreError> for MfaError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::SecretNotFound,
            other => Self::Store(other),
        }
    }
}

/// Result type for OTP engine operations.
pub type MfaResult<T> = Result<T, MfaError>;
