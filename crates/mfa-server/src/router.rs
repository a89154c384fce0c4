//! Router configuration and request handlers.
//!
//! Three routes, matching the service's original surface:
//! `POST /seed/generate`, `POST /token/validate`, `GET /token/health`.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/seed/generate", post(generate_seed))
        .route("/token/validate", post(validate_token))
        .route("/token/health", get(health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Request body for seed generation.
#[derive(Debug, Deserialize)]
pub struct GenerateSeedRequest {
    /// Opaque client identity to provision a secret for.
    pub fingerprint: String,
}

/// Request body for token validation.
#[derive(Debug, Deserialize)]
pub struct ValidateTokenRequest {
    /// Opaque client identity the token claims to belong to.
    pub fingerprint: String,
    /// The one-time code to check.
    pub token: String,
}

/// Response body for token validation.
///
/// Deliberately carries only the outcome: an unprovisioned fingerprint
/// and a wrong code produce identical responses, so the endpoint
/// cannot be used to enumerate fingerprints.
#[derive(Debug, Serialize)]
pub struct ValidateTokenResponse {
    /// Whether the token matched.
    pub valid: bool,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

/// Provisions a new secret for a fingerprint.
///
/// The response body is the hex-encoded secret, to be delivered to the
/// client's authenticator out of band.
async fn generate_seed(
    State(state): State<AppState>,
    Json(request): Json<GenerateSeedRequest>,
) -> Result<String, StatusCode> {
    match state.engine.generate_seed(&request.fingerprint).await {
        Ok(secret_hex) => Ok(secret_hex),
        Err(err) => {
            tracing::error!(error = %err, "seed generation failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Validates a one-time code for a fingerprint.
async fn validate_token(
    State(state): State<AppState>,
    Json(request): Json<ValidateTokenRequest>,
) -> Result<Json<ValidateTokenResponse>, StatusCode> {
    match state
        .engine
        .validate_token(&request.fingerprint, &request.token)
        .await
    {
        Ok(()) => Ok(Json(ValidateTokenResponse { valid: true })),
        Err(err) if err.is_rejection() => Ok(Json(ValidateTokenResponse { valid: false })),
        Err(err) => {
            tracing::error!(error = %err, "token validation failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Liveness probe. No engine involvement.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    })
}
