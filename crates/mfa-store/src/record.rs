//! Secret record model.
//!
//! A secret record binds one fingerprint to the shared secret its
//! authenticator was provisioned with, together with the code
//! parameters the secret was issued under. Validation always follows
//! the parameters stored on the record, not the current configuration,
//! so a configuration change never silently breaks issued secrets.

use chrono::{DateTime, Utc};
use mfa_crypto::OtpAlgorithm;
use serde::{Deserialize, Serialize};

/// The shared secret provisioned for one fingerprint.
///
/// ## Security Note
///
/// The `seed` field is the raw shared secret. It must never be logged,
/// and persistent backends should encrypt it at rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretRecord {
    /// Opaque client identity, unique key.
    pub fingerprint: String,

    /// Raw secret bytes.
    pub seed: Vec<u8>,

    /// Number of decimal digits in generated codes.
    pub digits: u8,

    /// HMAC algorithm the secret was provisioned for.
    pub algorithm: OtpAlgorithm,

    /// When the secret was provisioned. Informational only.
    pub created_at: DateTime<Utc>,
}

impl SecretRecord {
    /// Creates a new secret record stamped with the current time.
    #[must_use]
    pub fn new(
        fingerprint: impl Into<String>,
        seed: Vec<u8>,
        digits: u8,
        algorithm: OtpAlgorithm,
    ) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            seed,
            digits,
            algorithm,
            created_at: Utc::now(),
        }
    }
}
