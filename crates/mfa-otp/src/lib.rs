//! # mfa-otp
//!
//! One-time-password engine for the MFA service.
//!
//! This crate implements TOTP (RFC 6238) on top of the HOTP
//! construction (RFC 4226):
//!
//! - Pure code generation with dynamic truncation ([`codec`])
//! - Secret lifecycle against a pluggable store ([`engine`])
//! - Clock-drift tolerance policy ([`config`])
//!
//! ## Example
//!
//! ```ignore
//! use mfa_otp::{MfaEngine, OtpConfig};
//! use mfa_store::MemorySecretStore;
//!
//! let engine = MfaEngine::new(MemorySecretStore::new(), OtpConfig::default())?;
//! let secret_hex = engine.generate_seed("device-fingerprint").await?;
//! engine.validate_token("device-fingerprint", "123456").await?;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod codec;
pub mod config;
pub mod engine;
pub mod error;

pub use config::{ConfigError, OtpConfig};
pub use engine::MfaEngine;
pub use error::{MfaError, MfaResult};

pub use mfa_crypto::OtpAlgorithm;
