//! # certanchor-api — Axum API for Certificate Anchoring
//!
//! HTTP surface over the certificate service. Two operations matter:
//! registering (anchoring) a certificate and verifying one. Everything
//! else is operational surface around them.
//!
//! ## API Surface
//!
//! | Route                              | Module                   | Purpose            |
//! |------------------------------------|--------------------------|--------------------|
//! | `POST /v1/certificates`            | [`routes::certificates`] | Anchor certificate |
//! | `POST /v1/certificates/verify/:txid` | [`routes::certificates`] | Verify certificate |
//! | `GET /v1/network`                  | [`routes::network`]      | Node status        |
//! | `GET /v1/digest`                   | [`routes::network`]      | Digest demo        |
//! | `GET /openapi.json`                | [`openapi`]              | OpenAPI document   |
//! | `GET /health/*`                    | here                     | Probes             |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → ApiKeyMiddleware → Handler
//! ```
//!
//! Health probes are mounted outside the auth middleware so they remain
//! accessible without credentials.

pub mod auth;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::ApiKeyConfig;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState, auth_config: ApiKeyConfig) -> Router {
    let api = Router::new()
        .merge(routes::certificates::router())
        .merge(routes::network::router())
        .merge(openapi::router())
        .layer(from_fn(auth::api_key_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(auth_config))
        .with_state(state);

    // Unauthenticated health probes.
    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::auth::SecretKey;
    use crate::state::testing::state_with_signer;

    fn keyed_app() -> Router {
        app(
            state_with_signer(),
            ApiKeyConfig {
                key: Some(SecretKey::new("test-api-key")),
            },
        )
    }

    #[tokio::test]
    async fn health_is_open_without_key() {
        let app = keyed_app();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/health/liveness")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_requires_key_when_configured() {
        let app = keyed_app();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/v1/network")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn api_accepts_correct_key() {
        let app = keyed_app();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/v1/network")
                    .header("x-api-key", "test-api-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_rejects_wrong_key() {
        let app = keyed_app();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/v1/network")
                    .header("x-api-key", "wrong-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn api_is_open_when_no_key_configured() {
        let app = app(state_with_signer(), ApiKeyConfig::default());
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/v1/network")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn openapi_is_public() {
        let app = keyed_app();
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
