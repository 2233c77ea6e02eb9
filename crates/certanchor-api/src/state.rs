//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor.
//!
//! The state is a pair of read-only handles built once at startup: the
//! certificate service (which owns the ledger client and signing
//! credential) and the ledger configuration (network name, explorer base).
//! Nothing in it is mutated per request, so no locking is involved — the
//! ledger itself is the only system of record.

use std::sync::Arc;

use certanchor_ledger::LedgerConfig;
use certanchor_service::CertificateService;

/// Read-only application state shared across requests.
#[derive(Clone)]
pub struct AppState {
    /// The issuance/verification service.
    pub service: Arc<CertificateService>,
    /// Ledger configuration, for explorer links and network metadata.
    pub ledger: Arc<LedgerConfig>,
}

impl AppState {
    /// Build application state from its collaborators.
    pub fn new(service: Arc<CertificateService>, ledger: Arc<LedgerConfig>) -> Self {
        Self { service, ledger }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! State builders backed by the in-memory ledger, for route tests.

    use super::*;
    use certanchor_ledger::{InMemoryLedger, WalletSigner};

    /// State with a signing credential: both issuance and verification work.
    pub fn state_with_signer() -> AppState {
        let ledger = Arc::new(InMemoryLedger::new("localnet"));
        let service = CertificateService::new(
            ledger,
            Some(Arc::new(WalletSigner::generate())),
            "localnet",
            "certanchor",
        );
        let config = LedgerConfig::local(8899).expect("local config");
        AppState::new(Arc::new(service), Arc::new(config))
    }

    /// State without a signing credential: issuance must fail with 503.
    pub fn state_without_signer() -> AppState {
        let ledger = Arc::new(InMemoryLedger::new("localnet"));
        let service = CertificateService::new(ledger, None, "localnet", "certanchor");
        let config = LedgerConfig::local(8899).expect("local config");
        AppState::new(Arc::new(service), Arc::new(config))
    }
}
