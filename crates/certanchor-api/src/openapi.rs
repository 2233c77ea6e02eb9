//! # OpenAPI Document
//!
//! Auto-generated OpenAPI spec via utoipa derive macros, served at
//! `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::error::{ErrorBody, ErrorDetail};
use crate::routes::certificates::{
    CertificateDto, RegisterRequest, RegisterResponse, VerifyRequest, VerifyResponse,
};
use crate::routes::network::{DigestResponse, NetworkResponse};
use crate::state::AppState;

/// The OpenAPI document for the certanchor API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "certanchor API",
        description = "Participation certificates anchored to a distributed ledger via memo transactions.",
    ),
    paths(
        crate::routes::certificates::register,
        crate::routes::certificates::verify,
        crate::routes::network::network,
        crate::routes::network::digest,
    ),
    components(schemas(
        RegisterRequest,
        RegisterResponse,
        CertificateDto,
        VerifyRequest,
        VerifyResponse,
        NetworkResponse,
        DigestResponse,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "certificates", description = "Issuance and verification"),
        (name = "network", description = "Node status and digest demo"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_doc))
}

async fn serve_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_includes_all_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/v1/certificates"));
        assert!(paths
            .iter()
            .any(|p| p.as_str() == "/v1/certificates/verify/{txid}"));
        assert!(paths.iter().any(|p| p.as_str() == "/v1/network"));
        assert!(paths.iter().any(|p| p.as_str() == "/v1/digest"));
    }
}
