//! # Certificate Registration and Verification
//!
//! The two operations the surrounding world needs: anchor a new
//! certificate, and check a claimed certificate against its anchor.
//!
//! ## Endpoints
//!
//! - `POST /v1/certificates` — canonicalize, fingerprint, anchor.
//! - `POST /v1/certificates/verify/:txid` — fetch, decode, compare.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use certanchor_core::record::string_or_integer;
use certanchor_core::{CertificateRecord, IssuedAt};

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// Request body for certificate registration. The server generates the
/// certificate UUID and issuance timestamp.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Event or course name.
    pub event: String,
    /// Participant full name.
    pub name: String,
    /// Participant email.
    pub email: String,
    /// Issuer-assigned certificate code (string or integer).
    #[serde(deserialize_with = "string_or_integer")]
    #[schema(value_type = String)]
    pub certificate_code: String,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("event", &self.event),
            ("name", &self.name),
            ("email", &self.email),
            ("certificate_code", &self.certificate_code),
        ] {
            if value.trim().is_empty() {
                return Err(format!("field `{field}` must not be empty"));
            }
        }
        Ok(())
    }
}

/// The issued certificate as echoed back to the caller. These are the
/// exact values the holder must present again at verification.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CertificateDto {
    /// Event or course name.
    pub event: String,
    /// Server-generated certificate UUID.
    #[schema(value_type = String)]
    pub uuid: Uuid,
    /// Participant full name.
    pub name: String,
    /// Participant email.
    pub email: String,
    /// Issuer-assigned certificate code.
    pub certificate_code: String,
    /// Issuance timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub issued_at: String,
}

/// Response from the registration endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    /// The issued certificate data.
    pub certificate: CertificateDto,
    /// SHA-256 fingerprint of the canonical form (64 hex chars).
    pub fingerprint: String,
    /// Transaction id of the anchoring memo transaction.
    pub transaction_id: String,
    /// The canonical JSON string that was hashed.
    pub canonical_form: String,
    /// Network the certificate was anchored on.
    pub network: String,
    /// Block explorer link, when an explorer is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
}

/// Request body for verification: the full claimed record.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyRequest {
    /// Event or course name.
    pub event: String,
    /// Certificate UUID from issuance.
    #[schema(value_type = String)]
    pub uuid: Uuid,
    /// Participant full name.
    pub name: String,
    /// Participant email.
    pub email: String,
    /// Issuer-assigned certificate code (string or integer).
    #[serde(deserialize_with = "string_or_integer")]
    #[schema(value_type = String)]
    pub certificate_code: String,
    /// Issuance timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub issued_at: String,
}

impl Validate for VerifyRequest {
    fn validate(&self) -> Result<(), String> {
        if self.issued_at.trim().is_empty() {
            return Err("field `issued_at` must not be empty".to_string());
        }
        Ok(())
    }
}

impl VerifyRequest {
    /// Convert to the core record, rejecting timestamps outside the
    /// canonical contract.
    fn into_record(self) -> Result<CertificateRecord, AppError> {
        let issued_at = IssuedAt::parse(&self.issued_at)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(CertificateRecord {
            event: self.event,
            uuid: self.uuid,
            name: self.name,
            email: self.email,
            certificate_code: self.certificate_code,
            issued_at,
        })
    }
}

/// Response from the verification endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyResponse {
    /// The transaction id that was checked.
    pub transaction_id: String,
    /// Whether the ledger knows the transaction.
    pub found: bool,
    /// Whether the on-chain fingerprint exactly equals the recomputed one.
    pub authentic: bool,
    /// Fingerprint extracted from the on-chain memo, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint_on_chain: Option<String>,
    /// Fingerprint recomputed from the supplied record.
    pub fingerprint_recomputed: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the certificates router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/certificates", post(register))
        .route("/v1/certificates/verify/:txid", post(verify))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /v1/certificates — Register and anchor a certificate.
///
/// Generates the UUID and issuance timestamp, canonicalizes the record,
/// computes its fingerprint, and anchors the masked memo in one ledger
/// transaction. Returns the full record so the holder can verify later.
///
/// If the caller disconnects while the anchor is in flight, the
/// submission still completes server-side — a broadcast transaction
/// cannot be recalled, so it is never silently dropped.
#[utoipa::path(
    post,
    path = "/v1/certificates",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Certificate anchored", body = RegisterResponse),
        (status = 422, description = "Invalid record", body = crate::error::ErrorBody),
        (status = 502, description = "Anchor submission failed", body = crate::error::ErrorBody),
        (status = 503, description = "Credentials or ledger unavailable", body = crate::error::ErrorBody),
    ),
    tag = "certificates"
)]
async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let req = extract_validated_json(body)?;

    let record = CertificateRecord {
        event: req.event,
        uuid: Uuid::new_v4(),
        name: req.name,
        email: req.email,
        certificate_code: req.certificate_code,
        issued_at: IssuedAt::now(),
    };

    let receipt = state.service.issue(&record).await?;

    let response = RegisterResponse {
        certificate: CertificateDto {
            event: record.event.clone(),
            uuid: record.uuid,
            name: record.name.clone(),
            email: record.email.clone(),
            certificate_code: record.certificate_code.clone(),
            issued_at: record.issued_at.to_canonical_string(),
        },
        fingerprint: receipt.fingerprint.to_hex(),
        explorer_url: state.ledger.explorer_tx_url(&receipt.transaction_id),
        transaction_id: receipt.transaction_id,
        canonical_form: receipt.canonical_form,
        network: receipt.network,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /v1/certificates/verify/:txid — Verify a claimed certificate.
///
/// Recomputes the fingerprint from the supplied record (identical
/// canonicalization rules as issuance) and compares it with the
/// fingerprint embedded in the anchored transaction. A transaction the
/// ledger does not know yields `found: false` with status 200 — only an
/// unreachable ledger is an error.
#[utoipa::path(
    post,
    path = "/v1/certificates/verify/{txid}",
    params(("txid" = String, Path, description = "Anchoring transaction id")),
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Verification result", body = VerifyResponse),
        (status = 422, description = "Invalid record", body = crate::error::ErrorBody),
        (status = 503, description = "Ledger unavailable", body = crate::error::ErrorBody),
    ),
    tag = "certificates"
)]
async fn verify(
    State(state): State<AppState>,
    Path(txid): Path<String>,
    body: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, AppError> {
    let record = extract_validated_json(body)?.into_record()?;

    let result = state.service.verify(&txid, &record).await?;

    Ok(Json(VerifyResponse {
        transaction_id: txid,
        found: result.found,
        authentic: result.authentic,
        fingerprint_on_chain: result.fingerprint_on_chain.map(|fp| fp.to_hex()),
        fingerprint_recomputed: result.fingerprint_recomputed.to_hex(),
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::state::testing::{state_with_signer, state_without_signer};

    fn test_app(state: AppState) -> Router<()> {
        router().with_state(state)
    }

    async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn register_body() -> String {
        serde_json::json!({
            "event": "PythonFloripa 25/10/2025",
            "name": "David Richard Miranda da Silva",
            "email": "davidrichard.ms@gmail.com",
            "certificate_code": "18927398127398127319"
        })
        .to_string()
    }

    async fn register_on(app: &Router<()>) -> RegisterResponse {
        let req = Request::builder()
            .method("POST")
            .uri("/v1/certificates")
            .header("content-type", "application/json")
            .body(Body::from(register_body()))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        body_json(resp).await
    }

    #[tokio::test]
    async fn register_returns_receipt_fields() {
        let app = test_app(state_with_signer());
        let registered = register_on(&app).await;

        assert_eq!(registered.fingerprint.len(), 64);
        assert!(!registered.transaction_id.is_empty());
        assert!(registered.canonical_form.starts_with('{'));
        assert_eq!(registered.network, "localnet");
        // Echoed record keeps the caller's original casing.
        assert_eq!(registered.certificate.name, "David Richard Miranda da Silva");
        // The canonical form is lower-cased.
        assert!(registered
            .canonical_form
            .contains("david richard miranda da silva"));
    }

    #[tokio::test]
    async fn register_then_verify_round_trip_is_authentic() {
        let app = test_app(state_with_signer());
        let registered = register_on(&app).await;

        let claim = serde_json::json!({
            "event": registered.certificate.event,
            "uuid": registered.certificate.uuid,
            "name": registered.certificate.name,
            "email": registered.certificate.email,
            "certificate_code": registered.certificate.certificate_code,
            "issued_at": registered.certificate.issued_at,
        });

        let req = Request::builder()
            .method("POST")
            .uri(format!(
                "/v1/certificates/verify/{}",
                registered.transaction_id
            ))
            .header("content-type", "application/json")
            .body(Body::from(claim.to_string()))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let verified: VerifyResponse = body_json(resp).await;
        assert!(verified.found);
        assert!(verified.authentic);
        assert_eq!(
            verified.fingerprint_on_chain.as_deref(),
            Some(registered.fingerprint.as_str())
        );
    }

    #[tokio::test]
    async fn verify_with_tampered_name_is_not_authentic() {
        let app = test_app(state_with_signer());
        let registered = register_on(&app).await;

        let claim = serde_json::json!({
            "event": registered.certificate.event,
            "uuid": registered.certificate.uuid,
            "name": "Maria",
            "email": registered.certificate.email,
            "certificate_code": registered.certificate.certificate_code,
            "issued_at": registered.certificate.issued_at,
        });

        let req = Request::builder()
            .method("POST")
            .uri(format!(
                "/v1/certificates/verify/{}",
                registered.transaction_id
            ))
            .header("content-type", "application/json")
            .body(Body::from(claim.to_string()))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let verified: VerifyResponse = body_json(resp).await;
        assert!(verified.found);
        assert!(!verified.authentic);
    }

    #[tokio::test]
    async fn verify_unknown_transaction_is_found_false() {
        let app = test_app(state_with_signer());

        let claim = serde_json::json!({
            "event": "Evento Teste",
            "uuid": "12345678-1234-4678-9234-567812345678",
            "name": "Nome Teste",
            "email": "email@teste.com",
            "certificate_code": 111111,
            "issued_at": "2023-01-01 00:00:00",
        });

        let req = Request::builder()
            .method("POST")
            .uri(format!("/v1/certificates/verify/{}", "FAKE".repeat(22)))
            .header("content-type", "application/json")
            .body(Body::from(claim.to_string()))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let verified: VerifyResponse = body_json(resp).await;
        assert!(!verified.found);
        assert!(!verified.authentic);
        assert!(verified.fingerprint_on_chain.is_none());
    }

    #[tokio::test]
    async fn register_with_empty_name_is_422() {
        let app = test_app(state_with_signer());
        let req = Request::builder()
            .method("POST")
            .uri("/v1/certificates")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"event":"E","name":"  ","email":"a@b.c","certificate_code":"1"}"#,
            ))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn register_with_missing_fields_is_400() {
        let app = test_app(state_with_signer());
        let req = Request::builder()
            .method("POST")
            .uri("/v1/certificates")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"event":"E","name":"N"}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_without_signer_is_503() {
        let app = test_app(state_without_signer());
        let req = Request::builder()
            .method("POST")
            .uri("/v1/certificates")
            .header("content-type", "application/json")
            .body(Body::from(register_body()))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: crate::error::ErrorBody = body_json(resp).await;
        assert_eq!(body.error.code, "CREDENTIALS_UNAVAILABLE");
    }

    #[tokio::test]
    async fn verify_with_non_canonical_timestamp_is_422() {
        let app = test_app(state_with_signer());
        let claim = serde_json::json!({
            "event": "Evento",
            "uuid": "12345678-1234-4678-9234-567812345678",
            "name": "Nome",
            "email": "a@b.c",
            "certificate_code": "1",
            "issued_at": "2025-10-28T18:28:59.886954",
        });
        let req = Request::builder()
            .method("POST")
            .uri("/v1/certificates/verify/sometx")
            .header("content-type", "application/json")
            .body(Body::from(claim.to_string()))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn router_builds_successfully() {
        let _router = router();
    }
}
