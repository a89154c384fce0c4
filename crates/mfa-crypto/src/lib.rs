//! # mfa-crypto
//!
//! Cryptographic operations for the MFA service using aws-lc-rs.
//!
//! Three concerns live here:
//! - Keyed HMAC (SHA-1, SHA-256, SHA-512) for one-time-password
//!   generation. SHA-1 is exposed for HMAC use only: RFC 4226/6238
//!   interoperability with deployed authenticator apps requires it.
//! - Cryptographically secure random generation for shared secrets.
//! - The [`OtpAlgorithm`] selector shared by the store and the engine.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod algorithm;
pub mod hmac;
pub mod random;

pub use algorithm::{AlgorithmError, OtpAlgorithm};
pub use hmac::{hmac_sha1, hmac_sha256, hmac_sha512};
pub use random::{random_bytes, seeded_random};
