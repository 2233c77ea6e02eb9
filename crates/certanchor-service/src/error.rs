//! # Service Error Taxonomy
//!
//! One enum covering both operations, so the API layer maps to HTTP
//! statuses from a single place. The variants preserve the distinctions
//! that matter operationally: user-correctable input, missing
//! configuration, a failed write, and an unreachable node are four
//! different situations.

use thiserror::Error;

use certanchor_core::RecordError;
use certanchor_ledger::LedgerError;
use certanchor_memo::payload::MemoError;

/// Error from the issuance or verification pipeline.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The supplied record is malformed (user-correctable).
    #[error(transparent)]
    InvalidRecord(#[from] RecordError),

    /// No signing credential is configured; anchoring is impossible.
    /// Operational condition, surfaced distinctly from transient errors.
    #[error("signing credentials unavailable; anchoring is disabled")]
    CredentialsUnavailable,

    /// The memo submission failed. The single attempt is not retried.
    #[error("anchor submission failed: {cause}")]
    AnchorSubmissionFailed {
        /// The underlying ledger error.
        #[source]
        cause: LedgerError,
    },

    /// The ledger could not be reached while reading.
    #[error("ledger unavailable: {0}")]
    LedgerUnavailable(#[source] LedgerError),

    /// The memo payload could not be serialized.
    #[error(transparent)]
    MemoEncoding(#[from] MemoError),
}
