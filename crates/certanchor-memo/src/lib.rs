#![deny(missing_docs)]

//! # certanchor-memo — Memo Codec
//!
//! Packages a certificate fingerprint plus masked metadata into a
//! size-bounded payload suitable for ledger anchoring, and recovers that
//! payload from ledger transaction logs at verification time.
//!
//! ## Responsibilities
//!
//! - **Masking** ([`mask`]): irreversible partial redaction of the
//!   participant's name and email before anything becomes publicly readable
//!   on chain.
//! - **Encoding** ([`payload`]): the full payload form, the 1232-byte size
//!   bound, and the compact fallback form substituted when the full form
//!   would not fit in a single memo.
//! - **Decoding** ([`payload`]): locating and parsing the quoted JSON
//!   substring a ledger node embeds in its `Program log: Memo ...` lines.
//!   Absence of a payload is an expected outcome (`None`), never an error.

pub mod mask;
pub mod payload;

pub use mask::{mask_email, mask_name};
pub use payload::{
    decode_log_line, decode_logs, MemoFields, MemoPayload, MEMO_MAX_BYTES, MEMO_VERSION,
};
