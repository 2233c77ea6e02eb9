#![deny(missing_docs)]

//! # certanchor-core — Foundational Types for the Certificate Anchoring Stack
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `serde_json`,
//! `thiserror`, `chrono`, `uuid`, `sha2`, and `hex` from the external
//! ecosystem.
//!
//! ## Design Principles
//!
//! 1. **[`CanonicalBytes`] is the sole path from a record to a digest.**
//!    Every certificate fingerprint in the stack flows through
//!    `CanonicalBytes::from_record()`, which applies value lower-casing,
//!    lexicographic key ordering, and compact UTF-8 serialization. There is
//!    no second serialization path that can diverge.
//!
//! 2. **The record is immutable once fingerprinted.** [`CertificateRecord`]
//!    exposes no mutators; any change to a field means a new record with a
//!    new fingerprint.
//!
//! 3. **One timestamp contract.** [`IssuedAt`] serializes exactly as
//!    `YYYY-MM-DD HH:MM:SS`, second precision, no timezone suffix. The
//!    string participates verbatim in the hash, so the format is part of the
//!    wire contract, not a presentation choice.
//!
//! 4. **Structured errors with `thiserror`.** No `Box<dyn Error>`, no
//!    `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod record;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::Fingerprint;
pub use error::RecordError;
pub use record::CertificateRecord;
pub use temporal::IssuedAt;
