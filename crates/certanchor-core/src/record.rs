//! # Certificate Record
//!
//! The participation certificate data that gets canonicalized, hashed, and
//! anchored. A record is logically immutable once a fingerprint has been
//! computed from it: mutating any field produces a different canonical form
//! and therefore a different fingerprint, so this type exposes no mutators.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::RecordError;
use crate::temporal::IssuedAt;

/// A participation certificate record.
///
/// The six fields below are the complete schema. Historical payload
/// variants carried extra fields (`document`, `duration_hours`); those are
/// intentionally not representable here — one schema, applied uniformly at
/// issuance and verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    /// Event or course name.
    pub event: String,
    /// Unique certificate identifier (v4).
    pub uuid: Uuid,
    /// Participant full name.
    pub name: String,
    /// Participant email.
    pub email: String,
    /// Issuer-assigned certificate code. Accepted as a JSON string or a
    /// JSON integer (older clients sent both); always held as a string.
    #[serde(deserialize_with = "string_or_integer")]
    pub certificate_code: String,
    /// Issuance timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub issued_at: IssuedAt,
}

impl CertificateRecord {
    /// Validate that every string field is non-empty.
    ///
    /// Empty strings are rejected here, not silently defaulted: a missing
    /// event name is an input error for the caller to fix, never something
    /// the canonicalizer substitutes.
    pub fn validate(&self) -> Result<(), RecordError> {
        for (field, value) in [
            ("event", &self.event),
            ("name", &self.name),
            ("email", &self.email),
            ("certificate_code", &self.certificate_code),
        ] {
            if value.trim().is_empty() {
                return Err(RecordError::EmptyField { field });
            }
        }
        Ok(())
    }
}

/// Deserialize a value that may arrive as a JSON string or a JSON integer.
///
/// Public so request DTOs in outer layers can accept the same historical
/// payload shapes the record itself does.
pub fn string_or_integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        Str(String),
        Int(i64),
    }

    Ok(match StringOrInt::deserialize(deserializer)? {
        StringOrInt::Str(s) => s,
        StringOrInt::Int(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn valid_record_passes_validation() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn empty_event_is_rejected() {
        let mut record = sample();
        record.event = "  ".to_string();
        assert_eq!(
            record.validate(),
            Err(RecordError::EmptyField { field: "event" })
        );
    }

    #[test]
    fn certificate_code_accepts_integer_json() {
        let json = r#"{
            "event": "Evento Teste",
            "uuid": "12345678-1234-4678-9234-567812345678",
            "name": "Nome Teste",
            "email": "email@teste.com",
            "certificate_code": 111111,
            "issued_at": "2023-01-01 00:00:00"
        }"#;
        let record: CertificateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.certificate_code, "111111");
    }

    #[test]
    fn certificate_code_accepts_string_json() {
        let json = r#"{
            "event": "Evento Teste",
            "uuid": "12345678-1234-4678-9234-567812345678",
            "name": "Nome Teste",
            "email": "email@teste.com",
            "certificate_code": "18927398127398127319",
            "issued_at": "2023-01-01 00:00:00"
        }"#;
        let record: CertificateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.certificate_code, "18927398127398127319");
    }

    #[test]
    fn missing_field_fails_deserialization() {
        let json = r#"{"event": "Evento", "name": "Nome"}"#;
        assert!(serde_json::from_str::<CertificateRecord>(json).is_err());
    }
}
