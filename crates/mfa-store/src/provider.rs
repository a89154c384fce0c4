//! Secret store provider trait.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::record::SecretRecord;

/// Provider for secret storage operations.
///
/// Implementations must be thread-safe and support concurrent access:
/// upserts and lookups for different fingerprints proceed
/// independently, and a lookup never observes a partially written
/// record.
///
/// ## Security Note
///
/// Stored seeds are raw secret material. Implementations must ensure
/// they are never logged and should encrypt them at rest.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Stores a secret record, replacing any existing record for the
    /// same fingerprint.
    ///
    /// The replacement is atomic per fingerprint: once this returns,
    /// the previous secret is no longer visible to lookups.
    async fn upsert(&self, record: SecretRecord) -> StoreResult<()>;

    /// Gets the secret record for a fingerprint.
    ///
    /// ## Errors
    ///
    /// Returns `StoreError::NotFound` if no secret is provisioned for
    /// the fingerprint.
    async fn lookup(&self, fingerprint: &str) -> StoreResult<SecretRecord>;
}
