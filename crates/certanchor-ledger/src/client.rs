//! # The LedgerClient Seam
//!
//! The trait every ledger implementation satisfies. The anchor service and
//! verifier depend only on this seam, so the HTTP node client and the
//! in-memory ledger are interchangeable at construction time — a capability
//! decision made once at startup, never a per-call conditional.

use async_trait::async_trait;

use crate::error::LedgerError;
use crate::signer::MemoSignature;

/// Log lines of a confirmed transaction, as returned by the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionLogs {
    /// The transaction id that was fetched.
    pub transaction_id: String,
    /// Program log lines, in execution order. The memo payload (if any)
    /// is embedded in one of these.
    pub logs: Vec<String>,
    /// Slot the transaction landed in, when the node reports it.
    pub slot: Option<u64>,
    /// Block time (unix seconds), when the node reports it.
    pub block_time: Option<i64>,
}

/// Basic node/network status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Network name the client was configured for.
    pub network: String,
    /// Node software version, when the node reports it.
    pub version: Option<String>,
    /// Whether the node answered its health probe.
    pub healthy: bool,
    /// Endpoint the client talks to.
    pub url: String,
}

/// Client interface to the ledger.
///
/// `get_transaction` returning `Ok(None)` means "the node does not know
/// this id" — the normal negative verification outcome. Transport and
/// protocol failures are `Err(LedgerError)`, so callers can always
/// distinguish "doesn't exist" from "couldn't ask".
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Submit one signed memo transaction; returns the opaque transaction
    /// id assigned by the ledger. Exactly one transaction is attempted per
    /// call — no retries, no alternate encodings.
    async fn submit_memo(
        &self,
        memo: &[u8],
        signature: &MemoSignature,
        recent_block: &str,
    ) -> Result<String, LedgerError>;

    /// Fetch a confirmed transaction's log lines by id.
    async fn get_transaction(&self, id: &str) -> Result<Option<TransactionLogs>, LedgerError>;

    /// Fetch the latest block reference required for submission.
    async fn latest_block_reference(&self) -> Result<String, LedgerError>;

    /// Probe node health and version.
    async fn network_info(&self) -> Result<NetworkInfo, LedgerError>;
}
