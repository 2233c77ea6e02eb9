//! # Memo Payload Encoding & Decoding
//!
//! The memo payload is the unit that actually lands on the ledger: a JSON
//! object embedded in a single memo transaction, carrying the certificate
//! fingerprint plus masked metadata. The encoded form must fit the node's
//! transaction size limit, so encoding enforces a byte bound and falls back
//! to a compact subset when the full form would not fit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use certanchor_core::Fingerprint;

/// Maximum encoded payload size accepted by the node for a single memo
/// transaction.
pub const MEMO_MAX_BYTES: usize = 1232;

/// Payload schema version carried in the full form.
pub const MEMO_VERSION: &str = "1.0";

/// Type tag for the full payload form.
const TYPE_FULL: &str = "participation_certificate";

/// Type tag for the compact fallback form.
const TYPE_COMPACT: &str = "cert";

/// Maximum characters of the masked name kept in the compact form.
const COMPACT_NAME_CHARS: usize = 50;

/// Maximum characters of the event name kept in the compact form.
const COMPACT_EVENT_CHARS: usize = 30;

/// Error raised when a memo payload cannot be serialized.
#[derive(Error, Debug)]
pub enum MemoError {
    /// JSON serialization failed.
    #[error("memo serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Inputs to memo encoding. Name and email arrive already masked — raw
/// personal fields never reach this module.
#[derive(Debug, Clone)]
pub struct MemoFields<'a> {
    /// Fingerprint of the canonicalized certificate record.
    pub fingerprint: Fingerprint,
    /// Issuer-assigned certificate code.
    pub certificate_code: &'a str,
    /// Masked participant name (see [`crate::mask::mask_name`]).
    pub masked_name: &'a str,
    /// Masked participant email (see [`crate::mask::mask_email`]).
    pub masked_email: &'a str,
    /// Event or course name.
    pub event: &'a str,
    /// Anchoring time, unix seconds.
    pub timestamp: i64,
    /// Ledger network name (e.g. `devnet`).
    pub network: &'a str,
    /// Issuer tag.
    pub issuer: &'a str,
}

/// A memo payload as embedded in (or recovered from) a ledger transaction.
///
/// Optional fields are absent in the compact fallback form; decode is
/// tolerant of either shape. `type`, `timestamp`, and `doc_hash` are
/// required — a JSON object without them is not a certificate memo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoPayload {
    /// Schema version. Absent in the compact form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Payload type tag: `participation_certificate` or `cert`.
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Certificate code. Never present in the compact form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_code: Option<String>,
    /// Masked participant name (full form).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masked_name: Option<String>,
    /// Masked participant email. Never present in the compact form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masked_email: Option<String>,
    /// Truncated masked name (compact form).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Event name; truncated in the compact form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Anchoring time, unix seconds.
    pub timestamp: i64,
    /// Fingerprint of the canonicalized certificate record.
    pub doc_hash: Fingerprint,
    /// Ledger network name. Absent in the compact form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Issuer tag. Absent in the compact form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

impl MemoPayload {
    /// Build the full payload form.
    pub fn full(fields: &MemoFields<'_>) -> Self {
        Self {
            version: Some(MEMO_VERSION.to_string()),
            type_tag: TYPE_FULL.to_string(),
            certificate_code: Some(fields.certificate_code.to_string()),
            masked_name: Some(fields.masked_name.to_string()),
            masked_email: Some(fields.masked_email.to_string()),
            name: None,
            event: Some(fields.event.to_string()),
            timestamp: fields.timestamp,
            doc_hash: fields.fingerprint,
            network: Some(fields.network.to_string()),
            issuer: Some(fields.issuer.to_string()),
        }
    }

    /// Build the compact fallback form: type tag `cert`, masked name
    /// truncated to 50 characters, event truncated to 30, fingerprint and
    /// timestamp. No certificate code, no masked email.
    pub fn compact(fields: &MemoFields<'_>) -> Self {
        Self {
            version: None,
            type_tag: TYPE_COMPACT.to_string(),
            certificate_code: None,
            masked_name: None,
            masked_email: None,
            name: Some(truncate_chars(fields.masked_name, COMPACT_NAME_CHARS)),
            event: Some(truncate_chars(fields.event, COMPACT_EVENT_CHARS)),
            timestamp: fields.timestamp,
            doc_hash: fields.fingerprint,
            network: None,
            issuer: None,
        }
    }

    /// Whether this payload is the compact fallback form.
    pub fn is_compact(&self) -> bool {
        self.type_tag == TYPE_COMPACT
    }

    /// Encode, applying the size policy: serialize the full form, and if
    /// its UTF-8 byte length exceeds [`MEMO_MAX_BYTES`], substitute the
    /// compact form.
    pub fn encode(fields: &MemoFields<'_>) -> Result<Vec<u8>, MemoError> {
        let full = serde_json::to_vec(&Self::full(fields))?;
        if full.len() <= MEMO_MAX_BYTES {
            return Ok(full);
        }
        Ok(serde_json::to_vec(&Self::compact(fields))?)
    }

    /// Serialize this payload (no size policy applied).
    pub fn to_bytes(&self) -> Result<Vec<u8>, MemoError> {
        Ok(serde_json::to_vec(self)?)
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Decode a memo payload from a single ledger log line.
///
/// Node logs embed the memo content as an escaped, quoted string:
///
/// ```text
/// Program log: Memo (len 164): "{\"version\":\"1.0\",...,\"doc_hash\":\"...\"}"
/// ```
///
/// The payload is located by the outermost `"{` ... `}"` pattern, the
/// quotes stripped, `\"` and `\\` unescaped, and the result parsed as
/// JSON. Returns `None` when no such pattern is present or the content is
/// not a certificate memo — an expected outcome for transactions that
/// carry no memo, not a failure.
pub fn decode_log_line(line: &str) -> Option<MemoPayload> {
    let start = line.find("\"{")?;
    let end = line.rfind("}\"")?;
    if end < start {
        return None;
    }

    let escaped = &line[start + 1..=end];
    let unescaped = escaped.replace("\\\"", "\"").replace("\\\\", "\\");
    serde_json::from_str(&unescaped).ok()
}

/// Decode the first certificate memo found in a transaction's log lines.
pub fn decode_logs(logs: &[String]) -> Option<MemoPayload> {
    logs.iter().find_map(|line| decode_log_line(line))
}
