//! # API-Key Middleware
//!
//! Header-based authentication: requests must carry `x-api-key` matching
//! the key configured at startup. When no key is configured the API runs
//! open (development mode) — the middleware logs that once per process
//! via startup, not per request.
//!
//! Health probes and the OpenAPI document are always public.
//!
//! The comparison is constant-time and the configured key is redacted
//! from `Debug` output.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::AppError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// A configured API key. `Debug` never prints the value, and the backing
/// buffer is zeroized on drop.
#[derive(Clone)]
pub struct SecretKey(Zeroizing<String>);

impl SecretKey {
    /// Wrap a key value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// Auth configuration injected into request extensions.
#[derive(Debug, Clone, Default)]
pub struct ApiKeyConfig {
    /// The expected key; `None` means the API is open.
    pub key: Option<SecretKey>,
}

/// Paths reachable without a key.
fn is_public(path: &str) -> bool {
    path.starts_with("/health/") || path == "/openapi.json"
}

/// Constant-time string comparison.
fn keys_match(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Axum middleware enforcing the API key.
pub async fn api_key_middleware(req: Request, next: Next) -> Response {
    if is_public(req.uri().path()) {
        return next.run(req).await;
    }

    let config = req
        .extensions()
        .get::<ApiKeyConfig>()
        .cloned()
        .unwrap_or_default();

    // No key configured: open mode.
    let Some(expected) = config.key else {
        return next.run(req).await;
    };

    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if keys_match(key, expected.expose()) => next.run(req).await,
        _ => AppError::Unauthorized("invalid API key".to_string()).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_and_openapi_are_public() {
        assert!(is_public("/health/liveness"));
        assert!(is_public("/health/readiness"));
        assert!(is_public("/openapi.json"));
        assert!(!is_public("/v1/certificates"));
        assert!(!is_public("/"));
    }

    #[test]
    fn keys_match_is_exact() {
        assert!(keys_match("secret", "secret"));
        assert!(!keys_match("secret", "secret2"));
        assert!(!keys_match("", "secret"));
    }

    #[test]
    fn secret_key_debug_is_redacted() {
        let key = SecretKey::new("super-secret-value");
        assert_eq!(format!("{key:?}"), "SecretKey([REDACTED])");
    }
}
