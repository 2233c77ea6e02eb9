//! # In-Memory Ledger
//!
//! A deterministic in-process [`LedgerClient`] for tests and local
//! development. Submitted memos are echoed back as log lines in the same
//! shape a real node produces, so the decode path is exercised end to end
//! without a network.
//!
//! This is always an explicit construction choice. The HTTP client never
//! falls back to it, and it is never used to paper over missing
//! credentials — an anchor attempt without a signer fails before any
//! ledger implementation is consulted.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};

use crate::client::{LedgerClient, NetworkInfo, TransactionLogs};
use crate::error::LedgerError;
use crate::signer::MemoSignature;

/// Program id echoed in the synthetic log lines, matching the memo
/// program's well-known address on the real network.
const MEMO_PROGRAM_ID: &str = "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr";

/// In-process ledger holding submitted transactions in a map.
#[derive(Debug)]
pub struct InMemoryLedger {
    network: String,
    transactions: Mutex<HashMap<String, TransactionLogs>>,
    counter: AtomicU64,
}

impl InMemoryLedger {
    /// Create an empty ledger for the given network name.
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            transactions: Mutex::new(HashMap::new()),
            counter: AtomicU64::new(0),
        }
    }

    /// Insert a raw transaction with arbitrary log lines. Lets tests model
    /// transactions that exist but carry no certificate memo.
    pub fn insert_transaction(&self, id: impl Into<String>, logs: Vec<String>) {
        let id = id.into();
        let record = TransactionLogs {
            transaction_id: id.clone(),
            logs,
            slot: None,
            block_time: None,
        };
        self.transactions.lock().insert(id, record);
    }

    /// Number of transactions stored.
    pub fn len(&self) -> usize {
        self.transactions.lock().len()
    }

    /// Whether the ledger holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render memo bytes the way the node echoes them into its logs:
    /// quoted, with `\` and `"` escaped.
    fn format_memo_log(memo: &[u8]) -> String {
        let text = String::from_utf8_lossy(memo);
        let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
        format!("Program log: Memo (len {}): \"{escaped}\"", memo.len())
    }
}

#[async_trait]
impl LedgerClient for InMemoryLedger {
    async fn submit_memo(
        &self,
        memo: &[u8],
        _signature: &MemoSignature,
        _recent_block: &str,
    ) -> Result<String, LedgerError> {
        let sequence = self.counter.fetch_add(1, Ordering::SeqCst);

        // Derive a stable id from the memo content and submission order,
        // so repeated submissions of the same memo get distinct ids.
        let mut hasher = Sha256::new();
        hasher.update(memo);
        hasher.update(sequence.to_be_bytes());
        let transaction_id = hex::encode(hasher.finalize());

        let record = TransactionLogs {
            transaction_id: transaction_id.clone(),
            logs: vec![
                format!("Program {MEMO_PROGRAM_ID} invoke [1]"),
                Self::format_memo_log(memo),
                format!("Program {MEMO_PROGRAM_ID} success"),
            ],
            slot: Some(sequence),
            block_time: None,
        };

        self.transactions
            .lock()
            .insert(transaction_id.clone(), record);

        Ok(transaction_id)
    }

    async fn get_transaction(&self, id: &str) -> Result<Option<TransactionLogs>, LedgerError> {
        Ok(self.transactions.lock().get(id).cloned())
    }

    async fn latest_block_reference(&self) -> Result<String, LedgerError> {
        Ok(format!(
            "local-block-{}",
            self.counter.load(Ordering::SeqCst)
        ))
    }

    async fn network_info(&self) -> Result<NetworkInfo, LedgerError> {
        Ok(NetworkInfo {
            network: self.network.clone(),
            version: None,
            healthy: true,
            url: "memory://".to_string(),
        })
    }
}
