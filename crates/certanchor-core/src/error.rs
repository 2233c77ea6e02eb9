//! # Error Types
//!
//! Record validation errors for the canonicalization pipeline. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Canonicalization failures are always local and immediate: a malformed
//! record is rejected before any ledger interaction happens.

use thiserror::Error;

/// Error raised when a certificate record fails validation or cannot be
/// canonicalized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required string field is empty (or whitespace only). Defaulting is
    /// an upstream concern; the canonicalizer never substitutes values.
    #[error("invalid record: field `{field}` must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The issued-at timestamp does not match the `YYYY-MM-DD HH:MM:SS`
    /// contract.
    #[error("invalid record: issued_at `{value}` is not in YYYY-MM-DD HH:MM:SS form")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
    },

    /// Serialization of the canonical map failed.
    #[error("canonical serialization failed: {0}")]
    Serialization(String),
}
