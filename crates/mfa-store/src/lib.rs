//! # mfa-store
//!
//! Secret storage abstraction for the MFA service.
//!
//! This crate defines the [`SecretStore`] capability that the OTP
//! engine is generic over, together with the [`SecretRecord`] model and
//! a concurrent in-memory implementation. Alternate backends (SQL,
//! Redis) implement the same trait.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod memory;
pub mod provider;
pub mod record;

pub use error::{StoreError, StoreResult};
pub use memory::MemorySecretStore;
pub use provider::SecretStore;
pub use record::SecretRecord;
