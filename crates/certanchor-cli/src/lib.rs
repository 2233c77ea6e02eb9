//! # certanchor-cli — CLI Tool for Certificate Anchoring
//!
//! Provides the `certanchor` command-line interface.
//!
//! ## Subcommands
//!
//! - `certanchor digest` — Offline canonical form and fingerprint
//!   computation. No network.
//! - `certanchor issue` — Anchor a certificate via the configured node.
//! - `certanchor verify` — Verify a claimed certificate against its
//!   anchoring transaction. Exit code 0 only when authentic.
//!
//! Node URL, network, and wallet path come from the same environment
//! variables the API server uses (`LEDGER_RPC_URL`, `LEDGER_NETWORK`,
//! `LEDGER_WALLET_PATH`, ...).

pub mod digest;
pub mod issue;
pub mod verify;

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use uuid::Uuid;

use certanchor_core::record::string_or_integer;
use certanchor_core::{CertificateRecord, IssuedAt};

/// A certificate record as read from a JSON file. `uuid` and `issued_at`
/// are optional on issuance (generated when absent) but required for
/// verification.
#[derive(Debug, Deserialize)]
pub struct RecordFile {
    /// Event or course name.
    pub event: String,
    /// Certificate UUID, generated when absent.
    #[serde(default)]
    pub uuid: Option<Uuid>,
    /// Participant full name.
    pub name: String,
    /// Participant email.
    pub email: String,
    /// Issuer-assigned certificate code (string or integer).
    #[serde(deserialize_with = "string_or_integer")]
    pub certificate_code: String,
    /// Issuance timestamp, generated when absent.
    #[serde(default)]
    pub issued_at: Option<String>,
}

impl RecordFile {
    /// Read a record file from disk.
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read record file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("record file {} is not valid JSON", path.display()))
    }

    /// Convert to a core record, generating uuid and issued_at when the
    /// file omits them.
    pub fn into_record(self) -> anyhow::Result<CertificateRecord> {
        let issued_at = match self.issued_at {
            Some(s) => IssuedAt::parse(&s)?,
            None => IssuedAt::now(),
        };
        Ok(CertificateRecord {
            event: self.event,
            uuid: self.uuid.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            email: self.email,
            certificate_code: self.certificate_code,
            issued_at,
        })
    }

    /// Convert to a core record, requiring uuid and issued_at to be
    /// present (verification must use the exact issued values).
    pub fn into_complete_record(self) -> anyhow::Result<CertificateRecord> {
        anyhow::ensure!(
            self.uuid.is_some(),
            "record file must contain `uuid` for verification"
        );
        anyhow::ensure!(
            self.issued_at.is_some(),
            "record file must contain `issued_at` for verification"
        );
        self.into_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn reads_complete_record_file() {
        let file = write_file(
            r#"{
                "event": "Workshop",
                "uuid": "3f2a8b1e-0c4d-4b6a-9e2f-1d5c7a9b3e61",
                "name": "Jane Doe",
                "email": "jane@example.com",
                "certificate_code": "C-1",
                "issued_at": "2025-01-01 10:00:00"
            }"#,
        );
        let record = RecordFile::read(file.path())
            .unwrap()
            .into_complete_record()
            .unwrap();
        assert_eq!(record.event, "Workshop");
        assert_eq!(record.issued_at.to_canonical_string(), "2025-01-01 10:00:00");
    }

    #[test]
    fn generates_uuid_and_timestamp_for_issuance() {
        let file = write_file(
            r#"{"event":"E","name":"N","email":"a@b.c","certificate_code":7}"#,
        );
        let record = RecordFile::read(file.path()).unwrap().into_record().unwrap();
        assert_eq!(record.certificate_code, "7");
        assert!(!record.uuid.is_nil());
    }

    #[test]
    fn verification_requires_uuid() {
        let file = write_file(
            r#"{"event":"E","name":"N","email":"a@b.c","certificate_code":"7","issued_at":"2025-01-01 10:00:00"}"#,
        );
        let err = RecordFile::read(file.path())
            .unwrap()
            .into_complete_record()
            .unwrap_err();
        assert!(err.to_string().contains("uuid"));
    }

    #[test]
    fn rejects_malformed_json() {
        let file = write_file("not json");
        assert!(RecordFile::read(file.path()).is_err());
    }
}
