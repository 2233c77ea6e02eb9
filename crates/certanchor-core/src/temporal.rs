//! # Issuance Timestamps
//!
//! Naive, second-precision timestamp type for certificate records.
//!
//! ## Design Decision
//!
//! The issuance timestamp participates verbatim in the canonical form and
//! therefore in the fingerprint. Historical payloads mixed ISO 8601 with
//! microseconds, with and without timezone suffixes; a certificate hashed
//! under one format can never verify under another. This type fixes the
//! contract to `YYYY-MM-DD HH:MM:SS` — naive local time, truncated to
//! seconds — and rejects everything else at parse.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::RecordError;

/// The canonical timestamp format string.
pub const ISSUED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A naive issuance timestamp with second-level precision.
///
/// Serializes to and from exactly `YYYY-MM-DD HH:MM:SS`. Subsecond
/// precision is truncated on construction so that two records issued within
/// the same second canonicalize identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IssuedAt(NaiveDateTime);

impl IssuedAt {
    /// Current local time, truncated to seconds.
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    /// Build from a `chrono::NaiveDateTime`, truncating to seconds.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Self(dt.with_nanosecond(0).unwrap_or(dt))
    }

    /// Parse the canonical `YYYY-MM-DD HH:MM:SS` form.
    pub fn parse(s: &str) -> Result<Self, RecordError> {
        NaiveDateTime::parse_from_str(s, ISSUED_AT_FORMAT)
            .map(Self)
            .map_err(|_| RecordError::InvalidTimestamp {
                value: s.to_string(),
            })
    }

    /// Render the canonical `YYYY-MM-DD HH:MM:SS` form. This exact string
    /// is what enters the hash.
    pub fn to_canonical_string(&self) -> String {
        self.0.format(ISSUED_AT_FORMAT).to_string()
    }

    /// Access the underlying `chrono::NaiveDateTime`.
    pub fn as_datetime(&self) -> &NaiveDateTime {
        &self.0
    }
}

impl std::fmt::Display for IssuedAt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl std::str::FromStr for IssuedAt {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for IssuedAt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical_string())
    }
}

impl<'de> Deserialize<'de> for IssuedAt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_render_round_trip() {
        let ts = IssuedAt::parse("2025-01-01 10:00:00").unwrap();
        assert_eq!(ts.to_canonical_string(), "2025-01-01 10:00:00");
    }

    #[test]
    fn rejects_iso_with_t_separator() {
        assert!(IssuedAt::parse("2025-10-28T18:28:59").is_err());
    }

    #[test]
    fn rejects_subsecond_precision() {
        assert!(IssuedAt::parse("2025-10-28 18:28:59.886954").is_err());
    }

    #[test]
    fn rejects_timezone_suffix() {
        assert!(IssuedAt::parse("2025-01-01 10:00:00Z").is_err());
    }

    #[test]
    fn now_truncates_to_seconds() {
        let ts = IssuedAt::now();
        assert_eq!(ts.as_datetime().nanosecond(), 0);
    }

    #[test]
    fn serde_uses_canonical_form() {
        let ts = IssuedAt::parse("2025-01-01 10:00:00").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, r#""2025-01-01 10:00:00""#);
        let back: IssuedAt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
