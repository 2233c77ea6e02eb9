#![deny(missing_docs)]

//! # certanchor-service — Issuance & Verification
//!
//! The orchestration layer between the pure canonicalize/fingerprint/memo
//! pipeline and the ledger collaborators.
//!
//! ## Architecture
//!
//! [`CertificateService`] is the only type the HTTP and CLI layers talk to.
//! It is explicitly constructed at startup with its ledger client and
//! optional signing credential and is read-only thereafter — no ambient
//! globals, no per-request capability probing. Each `issue` or `verify`
//! call is independent; the only suspension points are the ledger calls,
//! which are timeout-bounded inside the client.
//!
//! ## Failure semantics
//!
//! A missing signer fails issuance with
//! [`ServiceError::CredentialsUnavailable`] before anything is submitted.
//! A failed submission is [`ServiceError::AnchorSubmissionFailed`] — one
//! attempt, no alternate encodings, and never a fabricated transaction id
//! in place of a genuine failure. On the read side,
//! [`ServiceError::LedgerUnavailable`] (transport) is distinct from the
//! ordinary `found = false` verification outcome.

pub mod anchor;
pub mod error;
pub mod service;
pub mod verify;

pub use anchor::{AnchorReceipt, AnchorService};
pub use error::ServiceError;
pub use service::{CertificateService, IssueReceipt};
pub use verify::{VerificationResult, Verifier};
