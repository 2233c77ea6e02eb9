//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps service errors to HTTP status codes and JSON error bodies with a
//! machine-readable code. Internal error details are never exposed in
//! responses; operationally distinct conditions (missing credentials,
//! unreachable ledger, failed submission) get distinct codes so a caller
//! can tell them apart from "certificate doesn't exist".

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use certanchor_service::ServiceError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// The error detail.
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g. `VALIDATION_ERROR`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Request validation failed (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Authentication failure — missing or wrong API key (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// No signing credential configured; issuance disabled (503).
    #[error("signing credentials unavailable")]
    CredentialsUnavailable,

    /// The ledger node could not be reached (503).
    #[error("ledger unavailable: {0}")]
    LedgerUnavailable(String),

    /// The memo submission failed at the node (502).
    #[error("anchor submission failed: {0}")]
    AnchorFailed(String),

    /// Internal server error (500). Message is logged but not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status and machine-readable code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            Self::CredentialsUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "CREDENTIALS_UNAVAILABLE")
            }
            Self::LedgerUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "LEDGER_UNAVAILABLE"),
            Self::AnchorFailed(_) => (StatusCode::BAD_GATEWAY, "ANCHOR_SUBMISSION_FAILED"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidRecord(e) => Self::Validation(e.to_string()),
            ServiceError::CredentialsUnavailable => Self::CredentialsUnavailable,
            ServiceError::AnchorSubmissionFailed { cause } => Self::AnchorFailed(cause.to_string()),
            ServiceError::LedgerUnavailable(e) => Self::LedgerUnavailable(e.to_string()),
            ServiceError::MemoEncoding(e) => Self::Internal(e.to_string()),
        }
    }
}
