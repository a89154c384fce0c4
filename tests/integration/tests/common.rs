//! Common test utilities and fixtures.

use std::net::TcpListener;
use std::time::Duration;

use reqwest::Client;
use tokio::time::sleep;

use mfa_server::{Server, ServerConfig};

/// Test environment that manages a running server.
pub struct TestEnv {
    /// Base URL of the running server.
    pub base_url: String,
    /// HTTP client for testing.
    pub client: Client,
}

impl TestEnv {
    /// Creates a new test environment with a server on an ephemeral port.
    pub async fn new() -> anyhow::Result<Self> {
        // Initialize tracing for tests
        let _ = tracing_subscriber::fmt()
            .with_env_filter("mfa_server=debug")
            .try_init();

        // Find available port for server
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let server_port = listener.local_addr()?.port();
        drop(listener);

        let mut config = ServerConfig::for_testing();
        config.port = server_port;

        let base_url = format!("http://127.0.0.1:{server_port}");

        let server = Server::new(config)?;
        tokio::spawn(async move {
            if let Err(e) = server.run().await {
                tracing::error!("Server error: {}", e);
            }
        });

        // Wait for server
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        wait_for_server(&client, &base_url).await?;

        Ok(Self { base_url, client })
    }

    /// Builds a full URL for a path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Provisions a secret for a fingerprint, returning the hex seed.
    pub async fn generate_seed(&self, fingerprint: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .post(self.url("/seed/generate"))
            .json(&serde_json::json!({ "fingerprint": fingerprint }))
            .send()
            .await?;

        anyhow::ensure!(
            response.status().is_success(),
            "seed generation failed: {}",
            response.status()
        );
        Ok(response.text().await?)
    }

    /// Posts a token for validation and returns the reported outcome.
    pub async fn validate_token(&self, fingerprint: &str, token: &str) -> anyhow::Result<bool> {
        let response = self
            .client
            .post(self.url("/token/validate"))
            .json(&serde_json::json!({ "fingerprint": fingerprint, "token": token }))
            .send()
            .await?;

        anyhow::ensure!(
            response.status().is_success(),
            "validation request failed: {}",
            response.status()
        );

        let body: serde_json::Value = response.json().await?;
        body["valid"]
            .as_bool()
            .ok_or_else(|| anyhow::anyhow!("response missing 'valid' field: {body}"))
    }
}

async fn wait_for_server(client: &Client, base_url: &str) -> anyhow::Result<()> {
    for _ in 0..50 {
        if let Ok(response) = client.get(format!("{base_url}/token/health")).send().await {
            if response.status().is_success() {
                return Ok(());
            }
        }
        sleep(Duration::from_millis(100)).await;
    }

    anyhow::bail!("server did not become ready")
}
