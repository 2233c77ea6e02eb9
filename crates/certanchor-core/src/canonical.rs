//! # Canonical Record Serialization
//!
//! This module defines [`CanonicalBytes`], the sole construction path for
//! bytes used in fingerprint computation across the stack.
//!
//! ## Security Invariant
//!
//! The inner `Vec<u8>` is private. The only way to construct
//! `CanonicalBytes` from a record is [`CanonicalBytes::from_record()`],
//! which applies the full transformation pipeline before serialization.
//! A second serialization path that orders keys differently or skips the
//! lower-casing step would silently produce fingerprints that never match
//! at verification time; making the inner bytes unconstructible elsewhere
//! rules that class of defect out.
//!
//! ## Transformation Rules
//!
//! 1. Validate the record (no empty string fields).
//! 2. Lower-case every string field *value* — keys are untouched. The UUID
//!    is lower-cased along with the rest so issuance and verification agree
//!    regardless of how the caller cased the hex digits.
//! 3. Build a lexicographically key-sorted map.
//! 4. Serialize compact: `,` and `:` separators, no whitespace, UTF-8 with
//!    non-ASCII characters unescaped.

use std::collections::BTreeMap;

use crate::error::RecordError;
use crate::record::CertificateRecord;

/// Bytes produced exclusively by canonical record serialization.
///
/// The inner `Vec<u8>` is private — downstream code cannot construct
/// `CanonicalBytes` except through [`CanonicalBytes::from_record()`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Canonicalize a certificate record.
    ///
    /// Pure and total for valid records: the same record (including the
    /// exact issued-at string) always yields byte-identical output.
    pub fn from_record(record: &CertificateRecord) -> Result<Self, RecordError> {
        record.validate()?;

        let mut map = BTreeMap::new();
        map.insert("certificate_code", record.certificate_code.to_lowercase());
        map.insert("email", record.email.to_lowercase());
        map.insert("event", record.event.to_lowercase());
        map.insert("issued_at", record.issued_at.to_canonical_string());
        map.insert("name", record.name.to_lowercase());
        map.insert("uuid", record.uuid.to_string().to_lowercase());

        Self::serialize_map(&map)
    }

    fn serialize_map(map: &BTreeMap<&str, String>) -> Result<Self, RecordError> {
        // serde_json emits compact separators by default and leaves
        // non-ASCII characters unescaped; BTreeMap iteration gives the
        // lexicographic key order.
        serde_json::to_vec(map)
            .map(Self)
            .map_err(|e| RecordError::Serialization(e.to_string()))
    }

    /// Access the canonical bytes for fingerprint computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The canonical form as a string. Always valid UTF-8 by construction.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Consume and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::IssuedAt;
    use uuid::Uuid;

    fn sample() -> CertificateRecord {
        CertificateRecord {
            event: "Workshop".to_string(),
            uuid: Uuid::parse_str("3f2a8b1e-0c4d-4b6a-9e2f-1d5c7a9b3e61").unwrap(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            certificate_code: "C-1".to_string(),
            issued_at: IssuedAt::parse("2025-01-01 10:00:00").unwrap(),
        }
    }

    #[test]
    fn canonical_form_matches_contract() {
        let canonical = CanonicalBytes::from_record(&sample()).unwrap();
        assert_eq!(
            canonical.as_str(),
            r#"{"certificate_code":"c-1","email":"jane@example.com","event":"workshop","issued_at":"2025-01-01 10:00:00","name":"jane doe","uuid":"3f2a8b1e-0c4d-4b6a-9e2f-1d5c7a9b3e61"}"#
        );
    }

    #[test]
    fn canonicalization_is_deterministic() {
        let record = sample();
        let first = CanonicalBytes::from_record(&record).unwrap();
        let second = CanonicalBytes::from_record(&record).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn case_only_changes_canonicalize_identically() {
        let mut shouting = sample();
        shouting.name = "JANE DOE".to_string();
        shouting.event = "WORKSHOP".to_string();
        let a = CanonicalBytes::from_record(&sample()).unwrap();
        let b = CanonicalBytes::from_record(&shouting).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn non_ascii_values_stay_unescaped() {
        let mut record = sample();
        record.name = "João Silva".to_string();
        record.event = "Conferência".to_string();
        let canonical = CanonicalBytes::from_record(&record).unwrap();
        assert!(canonical.as_str().contains("joão silva"));
        assert!(canonical.as_str().contains("conferência"));
        assert!(!canonical.as_str().contains("\\u"));
    }

    #[test]
    fn no_insignificant_whitespace() {
        let canonical = CanonicalBytes::from_record(&sample()).unwrap();
        let s = canonical.as_str();
        assert!(!s.contains(": "));
        assert!(!s.contains(", "));
    }

    #[test]
    fn empty_field_is_rejected_before_serialization() {
        let mut record = sample();
        record.email = String::new();
        assert!(CanonicalBytes::from_record(&record).is_err());
    }
}
