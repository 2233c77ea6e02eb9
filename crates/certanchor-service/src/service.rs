//! # Certificate Service
//!
//! The dependency-injected facade the HTTP and CLI layers call. Owns the
//! full issuance pipeline (canonicalize → fingerprint → mask → encode →
//! anchor) and delegates verification to the [`Verifier`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use certanchor_core::{CanonicalBytes, CertificateRecord, Fingerprint};
use certanchor_ledger::{LedgerClient, NetworkInfo, WalletSigner};
use certanchor_memo::{mask_email, mask_name, MemoFields, MemoPayload};

use crate::anchor::{AnchorError, AnchorService};
use crate::error::ServiceError;
use crate::verify::{VerificationResult, Verifier, VerifyError};

/// Everything the issuance flow hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueReceipt {
    /// Fingerprint of the canonicalized record.
    pub fingerprint: Fingerprint,
    /// Transaction id of the anchoring memo transaction.
    pub transaction_id: String,
    /// The exact canonical JSON string that was hashed. Returned so the
    /// holder can independently re-derive the fingerprint.
    pub canonical_form: String,
    /// Network the certificate was anchored on.
    pub network: String,
}

/// Issuance and verification, behind one explicitly constructed instance.
pub struct CertificateService {
    client: Arc<dyn LedgerClient>,
    anchor: AnchorService,
    verifier: Verifier,
    network: String,
    issuer: String,
}

impl CertificateService {
    /// Construct the service from its collaborators. Called once at
    /// process start; the instance is read-only afterwards and shared
    /// across requests.
    pub fn new(
        client: Arc<dyn LedgerClient>,
        signer: Option<Arc<WalletSigner>>,
        network: impl Into<String>,
        issuer: impl Into<String>,
    ) -> Self {
        let network = network.into();
        Self {
            anchor: AnchorService::new(Arc::clone(&client), signer, network.clone()),
            verifier: Verifier::new(Arc::clone(&client)),
            client,
            network,
            issuer: issuer.into(),
        }
    }

    /// Whether issuance is possible (a signing credential is configured).
    pub fn can_anchor(&self) -> bool {
        self.anchor.can_anchor()
    }

    /// Network name this service anchors to.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Issue a certificate: canonicalize, fingerprint, encode the masked
    /// memo, and anchor it in one ledger transaction.
    pub async fn issue(&self, record: &CertificateRecord) -> Result<IssueReceipt, ServiceError> {
        let canonical = CanonicalBytes::from_record(record)?;
        let fingerprint = Fingerprint::of_canonical(&canonical);

        let masked_name = mask_name(&record.name);
        let masked_email = mask_email(&record.email);
        let memo = MemoPayload::encode(&MemoFields {
            fingerprint,
            certificate_code: &record.certificate_code,
            masked_name: &masked_name,
            masked_email: &masked_email,
            event: &record.event,
            timestamp: chrono::Utc::now().timestamp(),
            network: &self.network,
            issuer: &self.issuer,
        })?;

        let receipt = self.anchor.anchor(&memo).await?;

        tracing::info!(
            %fingerprint,
            transaction_id = %receipt.transaction_id,
            uuid = %record.uuid,
            "certificate issued"
        );

        Ok(IssueReceipt {
            fingerprint,
            transaction_id: receipt.transaction_id,
            canonical_form: canonical.as_str().to_string(),
            network: receipt.network,
        })
    }

    /// Verify a claimed record against an anchored transaction.
    pub async fn verify(
        &self,
        transaction_id: &str,
        claimed: &CertificateRecord,
    ) -> Result<VerificationResult, ServiceError> {
        Ok(self.verifier.verify(transaction_id, claimed).await?)
    }

    /// Node/network status, for the health surface.
    pub async fn network_info(&self) -> Result<NetworkInfo, ServiceError> {
        self.client
            .network_info()
            .await
            .map_err(ServiceError::LedgerUnavailable)
    }
}

impl From<AnchorError> for ServiceError {
    fn from(err: AnchorError) -> Self {
        match err {
            AnchorError::CredentialsUnavailable => Self::CredentialsUnavailable,
            AnchorError::SubmissionFailed { cause } => Self::AnchorSubmissionFailed { cause },
        }
    }
}

impl From<VerifyError> for ServiceError {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::InvalidRecord(e) => Self::InvalidRecord(e),
            VerifyError::LedgerUnavailable(e) => Self::LedgerUnavailable(e),
        }
    }
}
