//! OTP policy configuration.

use mfa_crypto::OtpAlgorithm;
use thiserror::Error;

/// Errors for invalid OTP configuration.
///
/// Configuration errors are fatal at setup time; they are never
/// surfaced as per-request conditions.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Digit count outside the RFC 4226 range.
    #[error("invalid digit count {0}: RFC 4226 allows 6 to 8 digits")]
    InvalidDigitCount(u8),

    /// Time step of zero seconds.
    #[error("time step must be at least 1 second")]
    InvalidStep,
}

/// OTP generation and validation policy.
///
/// Applied uniformly to all fingerprints at provisioning time; each
/// secret record carries the values it was provisioned under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpConfig {
    /// Number of decimal digits in generated codes.
    pub digits: u8,

    /// Time step in seconds.
    pub step: u64,

    /// Number of steps accepted before/after the current one.
    pub skew: u32,

    /// HMAC algorithm.
    pub algorithm: OtpAlgorithm,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            digits: 6,
            step: 30,
            skew: 1,
            algorithm: OtpAlgorithm::Sha1,
        }
    }
}

impl OtpConfig {
    /// Creates a new configuration with RFC 6238 defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of digits.
    #[must_use]
    pub const fn digits(mut self, digits: u8) -> Self {
        self.digits = digits;
        self
    }

    /// Sets the time step in seconds.
    #[must_use]
    pub const fn step(mut self, step: u64) -> Self {
        self.step = step;
        self
    }

    /// Sets the drift tolerance window in steps.
    #[must_use]
    pub const fn skew(mut self, skew: u32) -> Self {
        self.skew = skew;
        self
    }

    /// Sets the HMAC algorithm.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: OtpAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the digit count is outside 6..=8 or
    /// the step is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.digits < 6 || self.digits > 8 {
            return Err(ConfigError::InvalidDigitCount(self.digits));
        }
        if self.step == 0 {
            return Err(ConfigError::InvalidStep);
        }
        Ok(())
    }
}
