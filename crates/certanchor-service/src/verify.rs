//! # Verifier
//!
//! Re-derives a certificate's fingerprint from caller-supplied data and
//! compares it with the fingerprint embedded in a previously anchored
//! transaction.
//!
//! The comparison is exact string equality over the hex digest. A
//! transaction the node does not know is a normal negative outcome
//! (`found = false`), not an error; only a transport failure is an error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use certanchor_core::{CanonicalBytes, CertificateRecord, Fingerprint, RecordError};
use certanchor_ledger::{LedgerClient, LedgerError};
use certanchor_memo::decode_logs;

/// Outcome of a verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether the ledger knows the transaction id.
    pub found: bool,
    /// Fingerprint extracted from the on-chain memo, when the transaction
    /// exists and carries a decodable certificate memo.
    pub fingerprint_on_chain: Option<Fingerprint>,
    /// Fingerprint recomputed from the caller-supplied record.
    pub fingerprint_recomputed: Fingerprint,
    /// `found` and the two fingerprints are exactly equal.
    pub authentic: bool,
}

/// Error from a verification attempt.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    /// The claimed record is malformed.
    #[error(transparent)]
    InvalidRecord(#[from] RecordError),

    /// The ledger could not be reached — distinct from "transaction not
    /// found".
    #[error("ledger unavailable: {0}")]
    LedgerUnavailable(#[source] LedgerError),
}

/// Fetches anchored transactions and compares fingerprints.
pub struct Verifier {
    client: Arc<dyn LedgerClient>,
}

impl Verifier {
    /// Construct a verifier over a ledger client.
    pub fn new(client: Arc<dyn LedgerClient>) -> Self {
        Self { client }
    }

    /// Verify a claimed record against the transaction id it supposedly
    /// was anchored under.
    pub async fn verify(
        &self,
        transaction_id: &str,
        claimed: &CertificateRecord,
    ) -> Result<VerificationResult, VerifyError> {
        // Recompute first: canonicalization applies the identical
        // lower-casing and timestamp rules used at issuance, and a
        // malformed record should fail before any network traffic.
        let canonical = CanonicalBytes::from_record(claimed)?;
        let fingerprint_recomputed = Fingerprint::of_canonical(&canonical);

        let transaction = self
            .client
            .get_transaction(transaction_id)
            .await
            .map_err(VerifyError::LedgerUnavailable)?;

        let Some(transaction) = transaction else {
            tracing::debug!(%transaction_id, "transaction not found on ledger");
            return Ok(VerificationResult {
                found: false,
                fingerprint_on_chain: None,
                fingerprint_recomputed,
                authentic: false,
            });
        };

        // A transaction can exist without carrying a certificate memo;
        // that is found-but-not-authentic, not an error.
        let fingerprint_on_chain = decode_logs(&transaction.logs).map(|payload| payload.doc_hash);
        let authentic = fingerprint_on_chain == Some(fingerprint_recomputed);

        let on_chain_hex = fingerprint_on_chain
            .as_ref()
            .map(Fingerprint::to_hex)
            .unwrap_or_default();
        tracing::info!(
            %transaction_id,
            authentic,
            on_chain = %on_chain_hex,
            recomputed = %fingerprint_recomputed,
            "verification compared fingerprints"
        );

        Ok(VerificationResult {
            found: true,
            fingerprint_on_chain,
            fingerprint_recomputed,
            authentic,
        })
    }
}
