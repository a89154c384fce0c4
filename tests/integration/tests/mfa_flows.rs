//! MFA provisioning and validation flow tests.

use std::time::{SystemTime, UNIX_EPOCH};

use mfa_otp::{codec, OtpAlgorithm};

use crate::common::TestEnv;

/// Computes the code an authenticator app would show right now for a
/// provisioned hex seed (default policy: 6 digits, 30 s step, SHA-1).
fn current_code(secret_hex: &str) -> anyhow::Result<String> {
    let seed = hex::decode(secret_hex)?;
    let unix_secs = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

    Ok(codec::generate_code(
        &seed,
        codec::counter_at(unix_secs, 30),
        6,
        OtpAlgorithm::Sha1,
    ))
}

#[tokio::test]
async fn health_endpoint_reports_healthy() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let response = env.client.get(env.url("/token/health")).send().await?;
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["status"], "healthy");

    Ok(())
}

#[tokio::test]
async fn seed_then_validate_round_trip() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let secret_hex = env.generate_seed("device-1").await?;
    assert_eq!(secret_hex.len(), 40, "20-byte SHA-1 seed, hex-encoded");

    let code = current_code(&secret_hex)?;
    assert!(env.validate_token("device-1", &code).await?);

    Ok(())
}

#[tokio::test]
async fn wrong_code_is_rejected() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let secret_hex = env.generate_seed("device-1").await?;
    let code = current_code(&secret_hex)?;

    // Flip the last digit of the genuine code.
    let flipped = {
        let mut bytes = code.into_bytes();
        let last = bytes.len() - 1;
        bytes[last] = if bytes[last] == b'0' { b'1' } else { b'0' };
        String::from_utf8(bytes)?
    };

    assert!(!env.validate_token("device-1", &flipped).await?);

    Ok(())
}

#[tokio::test]
async fn unknown_fingerprint_is_rejected_without_error() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    assert!(!env.validate_token("never-seeded", "123456").await?);

    Ok(())
}

#[tokio::test]
async fn malformed_tokens_are_rejected() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    env.generate_seed("device-1").await?;

    assert!(!env.validate_token("device-1", "12345").await?);
    assert!(!env.validate_token("device-1", "abcdef").await?);
    assert!(!env.validate_token("device-1", "1234567").await?);

    Ok(())
}

#[tokio::test]
async fn regeneration_revokes_the_previous_secret() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let first = env.generate_seed("device-1").await?;
    let second = env.generate_seed("device-1").await?;
    assert_ne!(first, second, "each call yields a fresh secret");

    let stale_code = current_code(&first)?;
    assert!(!env.validate_token("device-1", &stale_code).await?);

    let fresh_code = current_code(&second)?;
    assert!(env.validate_token("device-1", &fresh_code).await?);

    Ok(())
}

#[tokio::test]
async fn malformed_request_body_is_a_client_error() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let response = env
        .client
        .post(env.url("/token/validate"))
        .header("content-type", "application/json")
        .body("{\"fingerprint\":")
        .send()
        .await?;

    assert!(response.status().is_client_error());

    Ok(())
}
