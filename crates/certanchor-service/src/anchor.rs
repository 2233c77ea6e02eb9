//! # Anchor Service
//!
//! Commits an encoded memo payload to the ledger: sign, fetch a block
//! reference, submit once, return the receipt.
//!
//! Exactly one ledger transaction is attempted per call. The call is not
//! idempotent — anchoring the same fingerprint twice produces two distinct
//! transactions, and the ledger itself is the source of truth for which
//! anchor is "the" anchor of a fingerprint.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use certanchor_ledger::{LedgerClient, LedgerError, WalletSigner};

/// Receipt for a successfully anchored memo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorReceipt {
    /// Opaque transaction id assigned by the ledger.
    pub transaction_id: String,
    /// Network the transaction landed on.
    pub network: String,
}

/// Error from an anchor attempt.
#[derive(Debug, thiserror::Error)]
pub enum AnchorError {
    /// No signing credential is configured. Anchoring fails fast rather
    /// than producing a look-alike transaction id the caller could not
    /// tell from a real one.
    #[error("signing credentials unavailable; refusing to anchor")]
    CredentialsUnavailable,

    /// The submission (or its block-reference prerequisite) failed.
    #[error("anchor submission failed: {cause}")]
    SubmissionFailed {
        /// The underlying ledger error.
        #[source]
        cause: LedgerError,
    },
}

/// Submits memo payloads to the ledger.
pub struct AnchorService {
    client: Arc<dyn LedgerClient>,
    signer: Option<Arc<WalletSigner>>,
    network: String,
}

impl AnchorService {
    /// Construct an anchor service from its collaborators. The signer is
    /// resolved once, here — a missing credential is a startup-visible
    /// condition, not a per-call discovery.
    pub fn new(
        client: Arc<dyn LedgerClient>,
        signer: Option<Arc<WalletSigner>>,
        network: impl Into<String>,
    ) -> Self {
        Self {
            client,
            signer,
            network: network.into(),
        }
    }

    /// Whether this service holds a signing credential.
    pub fn can_anchor(&self) -> bool {
        self.signer.is_some()
    }

    /// Anchor one memo payload. Signs the memo, fetches the latest block
    /// reference, and submits a single transaction.
    pub async fn anchor(&self, memo: &[u8]) -> Result<AnchorReceipt, AnchorError> {
        let signer = self
            .signer
            .as_ref()
            .ok_or(AnchorError::CredentialsUnavailable)?;

        let signature = signer.sign(memo);

        let recent_block = self
            .client
            .latest_block_reference()
            .await
            .map_err(|cause| {
                tracing::error!(error = %cause, "failed to fetch block reference");
                AnchorError::SubmissionFailed { cause }
            })?;

        let transaction_id = self
            .client
            .submit_memo(memo, &signature, &recent_block)
            .await
            .map_err(|cause| {
                tracing::error!(error = %cause, "memo submission failed");
                AnchorError::SubmissionFailed { cause }
            })?;

        tracing::info!(
            %transaction_id,
            network = %self.network,
            memo_bytes = memo.len(),
            "memo anchored"
        );

        Ok(AnchorReceipt {
            transaction_id,
            network: self.network.clone(),
        })
    }
}
