//! # Ledger Configuration
//!
//! Node URL, network name, wallet path, and issuer tag, loaded once at
//! process start. The configuration is read-only after construction; no
//! per-request mutation anywhere.

use std::path::PathBuf;

use url::Url;

/// Configuration for connecting to the ledger node.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// JSON-RPC endpoint of the node.
    pub rpc_url: Url,
    /// Network name recorded in memos and receipts (e.g. `devnet`).
    pub network: String,
    /// Path to the 64-byte JSON-array keypair file. Absent means the
    /// process can verify but not anchor.
    pub wallet_path: Option<PathBuf>,
    /// Request timeout in seconds for all node calls.
    pub timeout_secs: u64,
    /// Issuer tag recorded in memo payloads.
    pub issuer: String,
    /// Block explorer base URL for human-facing transaction links.
    pub explorer_url: Option<Url>,
}

impl LedgerConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `LEDGER_RPC_URL` (default: `https://api.devnet.solana.com`)
    /// - `LEDGER_NETWORK` (default: `devnet`)
    /// - `LEDGER_WALLET_PATH` (optional)
    /// - `LEDGER_TIMEOUT_SECS` (default: 30)
    /// - `LEDGER_EXPLORER_URL` (default: `https://explorer.solana.com`)
    /// - `CERT_ISSUER` (default: `certanchor`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            rpc_url: env_url("LEDGER_RPC_URL", "https://api.devnet.solana.com")?,
            network: std::env::var("LEDGER_NETWORK").unwrap_or_else(|_| "devnet".to_string()),
            wallet_path: std::env::var("LEDGER_WALLET_PATH").ok().map(PathBuf::from),
            timeout_secs: std::env::var("LEDGER_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            issuer: std::env::var("CERT_ISSUER").unwrap_or_else(|_| "certanchor".to_string()),
            explorer_url: Some(env_url(
                "LEDGER_EXPLORER_URL",
                "https://explorer.solana.com",
            )?),
        })
    }

    /// Configuration pointing at a local node (for tests and development).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be
    /// parsed (should not occur for valid port numbers, but avoids
    /// `expect()`).
    pub fn local(port: u16) -> Result<Self, ConfigError> {
        let rpc_url = Url::parse(&format!("http://127.0.0.1:{port}"))
            .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))?;
        Ok(Self {
            rpc_url,
            network: "localnet".to_string(),
            wallet_path: None,
            timeout_secs: 5,
            issuer: "certanchor".to_string(),
            explorer_url: None,
        })
    }

    /// Human-facing explorer link for a transaction, when an explorer is
    /// configured.
    pub fn explorer_tx_url(&self, transaction_id: &str) -> Option<String> {
        self.explorer_url.as_ref().map(|base| {
            format!(
                "{}/tx/{transaction_id}?cluster={}",
                base.as_str().trim_end_matches('/'),
                self.network
            )
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A URL variable did not parse.
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
