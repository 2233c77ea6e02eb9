//! # Ledger Error Types
//!
//! Transport failures, node-reported RPC errors, and credential problems
//! are distinct conditions with distinct recovery stories, so they get
//! distinct types. "Transaction not found" is NOT an error anywhere in this
//! crate — it is the `Ok(None)` arm of [`crate::LedgerClient::get_transaction`].

use thiserror::Error;

/// Error talking to the ledger node.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The node could not be reached: connect failure or timeout. Surfaced
    /// distinctly so callers can tell "certificate doesn't exist" from
    /// "ledger unreachable".
    #[error("ledger unavailable during {endpoint}: {source}")]
    Unavailable {
        /// RPC method that failed.
        endpoint: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The node answered with a non-success HTTP status.
    #[error("ledger returned HTTP {status} during {endpoint}: {body}")]
    Http {
        /// RPC method that failed.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, for operator diagnostics.
        body: String,
    },

    /// The node answered with a JSON-RPC error object.
    #[error("ledger rpc error during {endpoint}: code {code}: {message}")]
    Rpc {
        /// RPC method that failed.
        endpoint: String,
        /// JSON-RPC error code.
        code: i64,
        /// JSON-RPC error message.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("unreadable ledger response during {endpoint}: {source}")]
    Deserialization {
        /// RPC method that failed.
        endpoint: String,
        /// Underlying decode error.
        #[source]
        source: reqwest::Error,
    },

    /// The response parsed but was semantically invalid (e.g. a success
    /// envelope with neither result nor error).
    #[error("invalid ledger response during {endpoint}: {detail}")]
    InvalidResponse {
        /// RPC method that failed.
        endpoint: String,
        /// What was wrong with the response.
        detail: String,
    },
}

/// Error loading or validating the signing credential.
#[derive(Error, Debug)]
pub enum CredentialsError {
    /// The keypair file could not be read.
    #[error("cannot read keypair file {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The keypair file content is not a 64-byte JSON array.
    #[error("malformed keypair file: {0}")]
    Malformed(String),

    /// The public half of the keypair file does not match the key derived
    /// from the secret half.
    #[error("keypair file public key does not match the derived verifying key")]
    KeypairMismatch,
}
