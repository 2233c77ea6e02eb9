//! # Canonicalization & Fingerprint Pipeline Tests
//!
//! Integration tests for the record → canonical bytes → fingerprint
//! pipeline: literal test vectors plus property tests for determinism
//! and single-field sensitivity.
//!
//! The literal digests below are the authoritative vectors for this wire
//! contract; any change to the canonical form (key order, separators,
//! lower-casing, timestamp format) breaks them, which is the point.

use certanchor_core::{CanonicalBytes, CertificateRecord, Fingerprint, IssuedAt};
use proptest::prelude::*;
use uuid::Uuid;

fn scenario_record() -> CertificateRecord {
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
fn scenario_canonical_form() {
    let canonical = CanonicalBytes::from_record(&scenario_record()).unwrap();
    assert_eq!(
        canonical.as_str(),
        r#"{"certificate_code":"c-1","email":"jane@example.com","event":"workshop","issued_at":"2025-01-01 10:00:00","name":"jane doe","uuid":"3f2a8b1e-0c4d-4b6a-9e2f-1d5c7a9b3e61"}"#
    );
}

#[test]
fn scenario_fingerprint_vector() {
    let canonical = CanonicalBytes::from_record(&scenario_record()).unwrap();
    let fp = Fingerprint::of_canonical(&canonical);
    assert_eq!(
        fp.to_hex(),
        "62a98a5747fdea9f7dd2e9d6a3c3e6845e6b044c742b989a35e91593c42f45d1"
    );
}

#[test]
fn non_ascii_fingerprint_vector() {
    let mut record = scenario_record();
    record.name = "João Silva".to_string();
    record.event = "Conferência".to_string();
    let canonical = CanonicalBytes::from_record(&record).unwrap();
    let fp = Fingerprint::of_canonical(&canonical);
    assert_eq!(
        fp.to_hex(),
        "81ffc5a28d7cbb2edd16ed57f522459b119b91031b4279b9693c1ce9edcc9655"
    );
}

#[test]
fn name_mutation_changes_fingerprint() {
    let mut mutated = scenario_record();
    mutated.name = "Jane Roe".to_string();
    let original = Fingerprint::of_canonical(&CanonicalBytes::from_record(&scenario_record()).unwrap());
    let changed = Fingerprint::of_canonical(&CanonicalBytes::from_record(&mutated).unwrap());
    assert_ne!(original, changed);
    assert_eq!(
        changed.to_hex(),
        "d0531660d12789e1ff5c4b72c3b4fafb5a761d4df2f9301f29e564cb39edc0be"
    );
}

#[test]
fn case_only_mutation_before_lowercasing_is_invisible() {
    // Case-only differences collapse in the canonical form, so the
    // fingerprints agree. Tamper detection operates on the lower-cased
    // content, not on presentation case.
    let mut cased = scenario_record();
    cased.name = "JANE DOE".to_string();
    let a = Fingerprint::of_canonical(&CanonicalBytes::from_record(&scenario_record()).unwrap());
    let b = Fingerprint::of_canonical(&CanonicalBytes::from_record(&cased).unwrap());
    assert_eq!(a, b);
}

// ── Property tests ──────────────────────────────────────────────────

/// Non-empty printable field values, including non-ASCII letters.
fn field_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Zà-üÀ-Ü0-9 .@-]{1,40}")
        .expect("valid regex")
        .prop_filter("non-blank", |s| !s.trim().is_empty())
}

fn arb_record() -> impl Strategy<Value = CertificateRecord> {
    (
        field_value(),
        any::<u128>(),
        field_value(),
        field_value(),
        field_value(),
    )
        .prop_map(|(event, uuid_bits, name, email, certificate_code)| CertificateRecord {
            event,
            uuid: Uuid::from_u128(uuid_bits),
            name,
            email,
            certificate_code,
            issued_at: IssuedAt::parse("2025-06-15 12:30:45").unwrap(),
        })
}

proptest! {
    #[test]
    fn canonicalization_is_deterministic(record in arb_record()) {
        let a = CanonicalBytes::from_record(&record).unwrap();
        let b = CanonicalBytes::from_record(&record).unwrap();
        prop_assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn fingerprint_is_deterministic(record in arb_record()) {
        let canonical = CanonicalBytes::from_record(&record).unwrap();
        prop_assert_eq!(
            Fingerprint::of_canonical(&canonical),
            Fingerprint::of_canonical(&canonical)
        );
    }

    #[test]
    fn event_mutation_is_detected(record in arb_record(), suffix in "[a-z]{1,8}") {
        let mut mutated = record.clone();
        mutated.event = format!("{}x{suffix}", mutated.event);
        let original = Fingerprint::of_canonical(&CanonicalBytes::from_record(&record).unwrap());
        let changed = Fingerprint::of_canonical(&CanonicalBytes::from_record(&mutated).unwrap());
        prop_assert_ne!(original, changed);
    }

    #[test]
    fn uuid_mutation_is_detected(record in arb_record()) {
        let mut mutated = record.clone();
        mutated.uuid = Uuid::from_u128(mutated.uuid.as_u128().wrapping_add(1));
        let original = Fingerprint::of_canonical(&CanonicalBytes::from_record(&record).unwrap());
        let changed = Fingerprint::of_canonical(&CanonicalBytes::from_record(&mutated).unwrap());
        prop_assert_ne!(original, changed);
    }
}
