//! # Network Status & Digest Demo
//!
//! Operational endpoints around the core pipeline: node status for
//! dashboards, and a demonstration digest endpoint that exposes the text
//! entry point of the fingerprint engine.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use certanchor_core::Fingerprint;

use crate::error::AppError;
use crate::state::AppState;

/// Response from the network status endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NetworkResponse {
    /// Network name the service anchors to.
    pub network: String,
    /// Node endpoint in use.
    pub url: String,
    /// Whether the node answered its health probe.
    pub healthy: bool,
    /// Node software version, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Query parameters for the digest demo endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DigestParams {
    /// Text to hash. A fixed sample is used when omitted.
    pub text: Option<String>,
}

/// Response from the digest demo endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DigestResponse {
    /// The input text.
    pub text: String,
    /// SHA-256 digest of the UTF-8 bytes, 64 hex chars.
    pub fingerprint: String,
    /// Digest algorithm name.
    pub algorithm: String,
}

/// Build the network router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/network", get(network))
        .route("/v1/digest", get(digest))
}

/// GET /v1/network — Node and network status.
#[utoipa::path(
    get,
    path = "/v1/network",
    responses(
        (status = 200, description = "Network status", body = NetworkResponse),
        (status = 503, description = "Ledger unavailable", body = crate::error::ErrorBody),
    ),
    tag = "network"
)]
async fn network(State(state): State<AppState>) -> Result<Json<NetworkResponse>, AppError> {
    let info = state.service.network_info().await?;
    Ok(Json(NetworkResponse {
        network: info.network,
        url: info.url,
        healthy: info.healthy,
        version: info.version,
    }))
}

/// GET /v1/digest — Demonstration SHA-256 digest over text.
#[utoipa::path(
    get,
    path = "/v1/digest",
    params(("text" = Option<String>, Query, description = "Text to hash")),
    responses(
        (status = 200, description = "Digest of the text", body = DigestResponse),
    ),
    tag = "network"
)]
async fn digest(Query(params): Query<DigestParams>) -> Json<DigestResponse> {
    let text = params
        .text
        .unwrap_or_else(|| "Texto de exemplo para gerar hash".to_string());
    let fingerprint = Fingerprint::of_text(&text);

    Json(DigestResponse {
        text,
        fingerprint: fingerprint.to_hex(),
        algorithm: "sha256".to_string(),
    })
}
