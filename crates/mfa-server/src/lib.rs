//! # mfa-server
//!
//! HTTP server for the MFA service.
//!
//! The server wires the components together explicitly: a secret store
//! is built at startup, handed to the OTP engine, and the engine is
//! handed to the HTTP layer through [`AppState`]. No global state.
//!
//! ## Usage
//!
//! ```ignore
//! use mfa_server::{Server, ServerConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let server = Server::new(config)?;
//! server.run().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use router::create_router;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use mfa_otp::MfaEngine;
use mfa_store::MemorySecretStore;
use tokio::net::TcpListener;

/// The MFA HTTP server.
pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    /// Creates a new server instance.
    ///
    /// Builds the store and the engine; an invalid OTP policy fails
    /// here, before anything is served.
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let store = MemorySecretStore::new();
        let engine = MfaEngine::new(store, config.otp)?;
        let state = AppState::new(config.clone(), Arc::new(engine));

        Ok(Self { config, state })
    }

    /// Runs the server.
    ///
    /// Starts the HTTP server and blocks until it receives a shutdown
    /// signal.
    pub async fn run(self) -> anyhow::Result<()> {
        let app = create_router(self.state);

        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("MFA server listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Creates a test router without starting the server.
    ///
    /// This is useful for integration testing.
    #[must_use]
    pub fn test_router(&self) -> Router {
        create_router(self.state.clone())
    }
}

/// Waits for a shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
