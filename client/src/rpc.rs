//! JSON-RPC client for ledger transaction lookups.

use crate::{Error, Result};
use crashproof_types::LedgerRecord;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use url::Url;

/// Fetches transactions from a ledger RPC endpoint.
pub struct LedgerRpcClient {
    client: reqwest::Client,
    url: Url,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<RpcTransaction>,
    error: Option<RpcResponseError>,
}

#[derive(Deserialize)]
struct RpcResponseError {
    message: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcTransaction {
    slot: Option<u64>,
    block_time: Option<i64>,
    meta: Option<RpcMeta>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcMeta {
    err: Option<serde_json::Value>,
    log_messages: Option<Vec<String>>,
}

impl LedgerRpcClient {
    pub fn new(url: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            url: Url::parse(url.trim())?,
        })
    }

    /// Fetch one transaction by signature.
    ///
    /// Keeps only the fields the verifier consumes: slot, block time,
    /// error indicator, and log messages. A `null` result from the RPC
    /// is the "not found" condition.
    pub async fn get_transaction(&self, signature: &str) -> Result<LedgerRecord> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getTransaction",
            "params": [
                signature,
                { "maxSupportedTransactionVersion": 0, "commitment": "confirmed" },
            ],
        });

        let response = self
            .client
            .post(self.url.clone())
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Failed(status));
        }

        let payload: RpcResponse = response.json().await?;
        if let Some(error) = payload.error {
            return Err(Error::Rpc(
                error.message.unwrap_or_else(|| "unknown".to_string()),
            ));
        }
        let Some(result) = payload.result else {
            return Err(Error::NotFound("transaction"));
        };

        let meta = result.meta.unwrap_or_default();
        debug!(signature, slot = ?result.slot, "fetched ledger record");
        Ok(LedgerRecord {
            signature: signature.to_string(),
            slot: result.slot,
            block_time: result.block_time,
            err: meta.err,
            logs: meta.log_messages.unwrap_or_default(),
        })
    }
}
