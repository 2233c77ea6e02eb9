//! # JSON-RPC Node Client
//!
//! [`HttpLedgerClient`] talks JSON-RPC 2.0 to the configured node. Every
//! request carries the configured timeout, so external calls are bounded
//! suspension points: a dead node surfaces as
//! [`LedgerError::Unavailable`], never as a hung request.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::client::{LedgerClient, NetworkInfo, TransactionLogs};
use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::signer::MemoSignature;

/// JSON-RPC 2.0 client for the ledger node.
#[derive(Debug, Clone)]
pub struct HttpLedgerClient {
    http: reqwest::Client,
    rpc_url: Url,
    network: String,
}

/// JSON-RPC response envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>"))]
struct RpcEnvelope<R> {
    #[serde(default)]
    result: Option<R>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct BlockhashResult {
    value: BlockhashValue,
}

#[derive(Debug, Deserialize)]
struct BlockhashValue {
    blockhash: String,
}

#[derive(Debug, Deserialize)]
struct TransactionResult {
    #[serde(default)]
    slot: Option<u64>,
    #[serde(default, rename = "blockTime")]
    block_time: Option<i64>,
    #[serde(default)]
    meta: Option<TransactionMeta>,
}

#[derive(Debug, Deserialize)]
struct TransactionMeta {
    #[serde(default, rename = "logMessages")]
    log_messages: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct VersionResult {
    #[serde(rename = "solana-core", alias = "version")]
    version: String,
}

impl HttpLedgerClient {
    /// Build a client from configuration. The timeout applies to every
    /// request issued through this client.
    pub fn new(config: &LedgerConfig) -> Result<Self, LedgerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| LedgerError::Unavailable {
                endpoint: "client_init".to_string(),
                source,
            })?;

        Ok(Self {
            http,
            rpc_url: config.rpc_url.clone(),
            network: config.network.clone(),
        })
    }

    /// Issue one JSON-RPC call. Returns the raw `result` field, which may
    /// be absent (`null`) — each method decides whether that is meaningful
    /// or an error.
    async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<Option<R>, LedgerError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let resp = self
            .http
            .post(self.rpc_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|source| LedgerError::Unavailable {
                endpoint: method.to_string(),
                source,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(LedgerError::Http {
                endpoint: method.to_string(),
                status,
                body,
            });
        }

        let envelope: RpcEnvelope<R> =
            resp.json()
                .await
                .map_err(|source| LedgerError::Deserialization {
                    endpoint: method.to_string(),
                    source,
                })?;

        if let Some(err) = envelope.error {
            return Err(LedgerError::Rpc {
                endpoint: method.to_string(),
                code: err.code,
                message: err.message,
            });
        }

        Ok(envelope.result)
    }

    /// Like [`Self::call`], but a missing result is a protocol violation.
    async fn call_required<R: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<R, LedgerError> {
        self.call(method, params)
            .await?
            .ok_or_else(|| LedgerError::InvalidResponse {
                endpoint: method.to_string(),
                detail: "missing result".to_string(),
            })
    }
}

#[async_trait]
impl LedgerClient for HttpLedgerClient {
    async fn submit_memo(
        &self,
        memo: &[u8],
        signature: &MemoSignature,
        recent_block: &str,
    ) -> Result<String, LedgerError> {
        let params = json!([{
            "memo": hex::encode(memo),
            "signer": signature.public_key,
            "signature": signature.signature,
            "recentBlockhash": recent_block,
        }]);

        let transaction_id: String = self.call_required("sendMemoTransaction", params).await?;
        tracing::debug!(%transaction_id, "memo transaction accepted by node");
        Ok(transaction_id)
    }

    async fn get_transaction(&self, id: &str) -> Result<Option<TransactionLogs>, LedgerError> {
        let params = json!([id, {"encoding": "json"}]);
        let result: Option<TransactionResult> = self.call("getTransaction", params).await?;

        Ok(result.map(|tx| TransactionLogs {
            transaction_id: id.to_string(),
            logs: tx.meta.map(|m| m.log_messages).unwrap_or_default(),
            slot: tx.slot,
            block_time: tx.block_time,
        }))
    }

    async fn latest_block_reference(&self) -> Result<String, LedgerError> {
        let result: BlockhashResult = self
            .call_required("getLatestBlockhash", json!([]))
            .await?;
        Ok(result.value.blockhash)
    }

    async fn network_info(&self) -> Result<NetworkInfo, LedgerError> {
        let healthy = matches!(
            self.call::<String>("getHealth", json!([])).await,
            Ok(Some(ref s)) if s == "ok"
        );
        let version = self
            .call::<VersionResult>("getVersion", json!([]))
            .await
            .ok()
            .flatten()
            .map(|v| v.version);

        Ok(NetworkInfo {
            network: self.network.clone(),
            version,
            healthy,
            url: self.rpc_url.to_string(),
        })
    }
}
