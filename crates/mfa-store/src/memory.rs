//! In-memory secret store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::provider::SecretStore;
use crate::record::SecretRecord;

/// Concurrent in-memory secret store.
///
/// The reference backend: a process-lifetime map from fingerprint to
/// secret record. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemorySecretStore {
    records: Arc<RwLock<HashMap<String, SecretRecord>>>,
}

impl MemorySecretStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of provisioned fingerprints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl SecretStore for MemorySecretStore {
    async fn upsert(&self, record: SecretRecord) -> StoreResult<()> {
        self.records
            .write()
            .insert(record.fingerprint.clone(), record);
        Ok(())
    }

    async fn lookup(&self, fingerprint: &str) -> StoreResult<SecretRecord> {
        self.records
            .read()
            .get(fingerprint)
            .cloned()
            .ok_or_else(|| StoreError::not_found(fingerprint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfa_crypto::OtpAlgorithm;

    fn record(fingerprint: &str, seed: Vec<u8>) -> SecretRecord {
        SecretRecord::new(fingerprint, seed, 6, OtpAlgorithm::Sha1)
    }

    #[tokio::test]
    async fn upsert_then_lookup() {
        let store = MemorySecretStore::new();
        store.upsert(record("fp-1", vec![1; 20])).await.unwrap();

        let found = store.lookup("fp-1").await.unwrap();
        assert_eq!(found.seed, vec![1; 20]);
    }

    #[tokio::test]
    async fn lookup_of_unknown_fingerprint_fails() {
        let store = MemorySecretStore::new();

        let err = store.lookup("never-seeded").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn upsert_replaces_existing_record() {
        let store = MemorySecretStore::new();
        store.upsert(record("fp-1", vec![1; 20])).await.unwrap();
        store.upsert(record("fp-1", vec![2; 20])).await.unwrap();

        let found = store.lookup("fp-1").await.unwrap();
        assert_eq!(found.seed, vec![2; 20]);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemorySecretStore::new();
        let clone = store.clone();
        store.upsert(record("fp-1", vec![1; 20])).await.unwrap();

        assert!(clone.lookup("fp-1").await.is_ok());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_upserts_do_not_interfere() {
        let store = MemorySecretStore::new();

        let mut handles = Vec::new();
        for i in 0..32u8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let fingerprint = format!("fp-{i}");
                store.upsert(record(&fingerprint, vec![i; 20])).await.unwrap();
                store.lookup(&fingerprint).await.unwrap()
            }));
        }

        for (i, handle) in handles.into_iter().enumerate() {
            let found = handle.await.unwrap();
            assert_eq!(found.seed, vec![i as u8; 20]);
        }
        assert_eq!(store.len(), 32);
    }
}
