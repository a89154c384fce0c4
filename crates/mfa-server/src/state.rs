//! Application state management.
//!
//! This module defines the shared state that is passed to all request
//! handlers.

use std::sync::Arc;

use mfa_otp::MfaEngine;
use mfa_store::MemorySecretStore;

use crate::config::ServerConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,

    /// The OTP engine.
    pub engine: Arc<MfaEngine<MemorySecretStore>>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: ServerConfig, engine: Arc<MfaEngine<MemorySecretStore>>) -> Self {
        Self { config, engine }
    }

    /// Returns a reference to the OTP engine.
    #[must_use]
    pub fn engine(&self) -> &MfaEngine<MemorySecretStore> {
        &self.engine
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }
}
