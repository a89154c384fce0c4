//! HMAC algorithm definitions for one-time passwords.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for algorithm operations.
#[derive(Debug, Error)]
pub enum AlgorithmError {
    /// Unknown algorithm name.
    #[error("unknown OTP algorithm: {0}")]
    Unknown(String),
}

/// HMAC hash algorithms supported for one-time passwords.
///
/// RFC 6238 permits SHA-1, SHA-256, and SHA-512. SHA-1 is the default
/// in deployed authenticator apps and is used here for HMAC only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OtpAlgorithm {
    /// HMAC-SHA1 (RFC 4226 default, widely supported).
    #[serde(rename = "SHA1")]
    Sha1,

    /// HMAC-SHA256.
    #[serde(rename = "SHA256")]
    Sha256,

    /// HMAC-SHA512.
    #[serde(rename = "SHA512")]
    Sha512,
}

impl OtpAlgorithm {
    /// Returns the algorithm name for display and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
        }
    }

    /// Returns the HMAC digest length in bytes.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Returns the shared-secret length in bytes for this algorithm.
    ///
    /// These are the RFC 6238 seed sizes: the secret is as long as the
    /// underlying hash output.
    #[must_use]
    pub const fn seed_len(self) -> usize {
        self.digest_len()
    }
}

impl fmt::Display for OtpAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OtpAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("SHA1") {
            Ok(Self::Sha1)
        } else if s.eq_ignore_ascii_case("SHA256") {
            Ok(Self::Sha256)
        } else if s.eq_ignore_ascii_case("SHA512") {
            Ok(Self::Sha512)
        } else {
            Err(AlgorithmError::Unknown(s.to_string()))
        }
    }
}
