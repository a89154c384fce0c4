//! OTP engine: secret lifecycle and token validation.

use std::time::{SystemTime, UNIX_EPOCH};

use mfa_store::{SecretRecord, SecretStore};

use crate::codec;
use crate::config::{ConfigError, OtpConfig};
use crate::error::{MfaError, MfaResult};

/// The one-time-password engine.
///
/// Owns the secret store and the validation policy. Stateless beyond
/// the store: validation never mutates a record, so a matched code
/// stays accepted for its whole tolerance window (standard RFC 6238
/// behavior, no anti-replay).
#[derive(Debug, Clone)]
pub struct MfaEngine<S> {
    store: S,
    config: OtpConfig,
}

impl<S: SecretStore> MfaEngine<S> {
    /// Creates a new engine over a secret store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the policy is invalid; configuration
    /// problems abort setup rather than surfacing per request.
    pub fn new(store: S, config: OtpConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// Returns the engine's validation policy.
    #[must_use]
    pub const fn config(&self) -> &OtpConfig {
        &self.config
    }

    /// Provisions a fresh shared secret for a fingerprint.
    ///
    /// Draws a new random seed of the configured algorithm's length,
    /// replaces any existing record for the fingerprint, and returns
    /// the seed hex-encoded for out-of-band provisioning. Regeneration
    /// revokes the previous secret immediately.
    pub async fn generate_seed(&self, fingerprint: &str) -> MfaResult<String> {
        let seed = mfa_crypto::random_bytes(self.config.algorithm.seed_len());
        let record = SecretRecord::new(
            fingerprint,
            seed.clone(),
            self.config.digits,
            self.config.algorithm,
        );

        self.store.upsert(record).await?;
        tracing::debug!(fingerprint, "provisioned new OTP secret");

        Ok(hex::encode(seed))
    }

    /// Validates a token against the fingerprint's provisioned secret.
    ///
    /// Accepts the code for the current time step and for `skew` steps
    /// on either side of it.
    ///
    /// # Errors
    ///
    /// - `SecretNotFound` when the fingerprint has no secret
    /// - `InvalidTokenFormat` when the token is not exactly the
    ///   record's digit count of ASCII digits
    /// - `InvalidToken` when no candidate code matches
    pub async fn validate_token(&self, fingerprint: &str, token: &str) -> MfaResult<()> {
        self.validate_token_at(fingerprint, token, unix_now()?)
            .await
    }

    /// Validates a token at a specific Unix time (useful for testing).
    pub async fn validate_token_at(
        &self,
        fingerprint: &str,
        token: &str,
        unix_secs: u64,
    ) -> MfaResult<()> {
        let record = self.store.lookup(fingerprint).await?;

        if token.len() != usize::from(record.digits)
            || !token.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(MfaError::InvalidTokenFormat);
        }

        let current = codec::counter_at(unix_secs, self.config.step);

        for offset in 0..=u64::from(self.config.skew) {
            if self.matches(&record, current.saturating_add(offset), token) {
                return Ok(());
            }

            if offset > 0 && self.matches(&record, current.saturating_sub(offset), token) {
                return Ok(());
            }
        }

        Err(MfaError::InvalidToken)
    }

    fn matches(&self, record: &SecretRecord, counter: u64, token: &str) -> bool {
        let expected =
            codec::generate_code(&record.seed, counter, record.digits, record.algorithm);
        codec::constant_time_eq(token.as_bytes(), expected.as_bytes())
    }
}

fn unix_now() -> MfaResult<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| MfaError::Internal(e.to_string()))
}
