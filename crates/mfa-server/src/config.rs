//! Server configuration.
//!
//! Configuration is loaded from environment variables with sensible
//! defaults. Invalid values are fatal at startup; no OTP policy error
//! ever surfaces per request.

use std::fmt::Display;
use std::str::FromStr;

use mfa_otp::{OtpAlgorithm, OtpConfig};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host to bind to.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// OTP generation and validation policy.
    pub otp: OtpConfig,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Recognized variables: `MFA_HOST`, `MFA_PORT`, `MFA_OTP_DIGITS`,
    /// `MFA_OTP_STEP`, `MFA_OTP_SKEW`, `MFA_OTP_ALGORITHM`.
    ///
    /// # Errors
    ///
    /// Fails when a variable is set to an unparseable value or the
    /// resulting OTP policy is invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let host = std::env::var("MFA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env_or("MFA_PORT", 7000)?;

        let otp = OtpConfig::new()
            .digits(env_or("MFA_OTP_DIGITS", 6)?)
            .step(env_or("MFA_OTP_STEP", 30)?)
            .skew(env_or("MFA_OTP_SKEW", 1)?)
            .algorithm(env_or("MFA_OTP_ALGORITHM", OtpAlgorithm::Sha1)?);
        otp.validate()?;

        Ok(Self { host, port, otp })
    }

    /// Creates a configuration for integration tests: loopback host,
    /// ephemeral port, default OTP policy.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            otp: OtpConfig::default(),
        }
    }
}

fn env_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {name} '{value}': {e}")),
        Err(_) => Ok(default),
    }
}
