//! # Certificate Fingerprints
//!
//! Defines [`Fingerprint`], the SHA-256 digest that anchors a certificate's
//! content on the ledger. The fingerprint is the sole authenticity anchor:
//! verification is exact equality of two hex digests, nothing weaker.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// A 32-byte SHA-256 fingerprint.
///
/// Rendered as a 64-character lowercase hex string everywhere it crosses a
/// boundary (memo payloads, API responses, log lines). Comparison is exact:
/// no case folding, no truncated prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Hash arbitrary bytes.
    pub fn of_bytes(data: &[u8]) -> Self {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&Sha256::digest(data));
        Self(bytes)
    }

    /// Hash a text string (UTF-8 encode, then hash). Agrees with
    /// [`Fingerprint::of_bytes`] whenever the text's UTF-8 bytes equal the
    /// raw input.
    pub fn of_text(text: &str) -> Self {
        Self::of_bytes(text.as_bytes())
    }

    /// Hash a canonicalized certificate record. This is the issuance and
    /// verification pipeline entry point.
    pub fn of_canonical(canonical: &CanonicalBytes) -> Self {
        Self::of_bytes(canonical.as_bytes())
    }

    /// Parse a 64-character hex digest.
    pub fn parse_hex(s: &str) -> Option<Self> {
        if s.len() != 64 {
            return None;
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).ok()?;
        Some(Self(bytes))
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The raw 32-byte digest value.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s)
            .ok_or_else(|| D::Error::custom(format!("`{s}` is not a 64-char hex digest")))
    }
}
