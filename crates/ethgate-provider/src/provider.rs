//! The typed operation facade: one method per RPC call.

use std::sync::Arc;

use primitive_types::U256;
use serde_json::{json, Map, Value};

use ethgate_core::hex;
use ethgate_core::request::{JsonRpcRequest, JsonRpcResponse};
use ethgate_core::transport::RpcTransport;
use ethgate_http::{HttpClientConfig, HttpRpcClient};

use crate::decode;
use crate::error::ProviderError;
use crate::network::{endpoint_url, Credentials, Network};
use crate::types::{Block, LogEntry, Topic, TransactionStatus};

/// A JSON-RPC provider bound to one (network, credentials, account
/// address) triple.
///
/// Immutable after construction and safe to share across concurrent
/// calls; each operation issues exactly one outbound call and produces
/// exactly one terminal outcome.
pub struct Provider {
    network: Network,
    address: String,
    transport: Arc<dyn RpcTransport>,
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("network", &self.network)
            .field("address", &self.address)
            .field("url", &self.transport.url())
            .finish()
    }
}

impl Provider {
    /// Connect over HTTP using the network's endpoint and the project
    /// credentials.
    pub fn new(network: Network, credentials: &Credentials, address: &str) -> Self {
        let url = endpoint_url(network, &credentials.project_id);
        let transport = Arc::new(HttpRpcClient::new(
            url,
            HttpClientConfig {
                auth_secret: credentials.secret.clone(),
                ..HttpClientConfig::default()
            },
        ));
        Self::with_transport(network, address, transport)
    }

    /// Build on an existing transport. Used by tests and by callers that
    /// manage their own transport stack.
    pub fn with_transport(
        network: Network,
        address: &str,
        transport: Arc<dyn RpcTransport>,
    ) -> Self {
        Self {
            network,
            address: address.to_lowercase(),
            transport,
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// The bound account address, lowercased.
    pub fn address(&self) -> &str {
        &self.address
    }

    async fn send(&self, method: &str, params: Vec<Value>) -> Result<JsonRpcResponse, ProviderError> {
        tracing::debug!(method, url = %self.transport.url(), "rpc call");
        let req = JsonRpcRequest::new(method, params);
        Ok(self.transport.send(req).await?)
    }

    /// Height of the newest block the node knows about.
    pub async fn last_block_height(&self) -> Result<u64, ProviderError> {
        let resp = self.send("eth_blockNumber", vec![]).await?;
        decode::uint(&resp)
    }

    /// Pending-inclusive nonce for the bound account.
    pub async fn transaction_count(&self) -> Result<u64, ProviderError> {
        let resp = self
            .send(
                "eth_getTransactionCount",
                vec![json!(self.address), json!("pending")],
            )
            .await?;
        decode::uint(&resp)
    }

    /// Latest balance of the bound account.
    pub async fn balance(&self) -> Result<U256, ProviderError> {
        let resp = self
            .send("eth_getBalance", vec![json!(self.address), json!("latest")])
            .await?;
        decode::big_uint(&resp)
    }

    /// Broadcast a signed raw transaction.
    ///
    /// Not idempotent: the call is never retried here, a retry decision
    /// belongs to the caller.
    pub async fn send_raw_transaction(&self, signed: &[u8]) -> Result<(), ProviderError> {
        let resp = self
            .send(
                "eth_sendRawTransaction",
                vec![json!(hex::bytes_to_hex(signed))],
            )
            .await?;
        decode::ack(&resp)
    }

    /// Logs matching the address/topic filter. Absent block bounds mean
    /// `"latest"`; zero matches is a success, never a failure.
    pub async fn logs(
        &self,
        address: Option<&str>,
        from_block: Option<u64>,
        to_block: Option<u64>,
        topics: &[Topic],
    ) -> Result<Vec<LogEntry>, ProviderError> {
        let mut filter = Map::new();
        if let Some(address) = address {
            filter.insert("address".into(), json!(address.to_lowercase()));
        }
        filter.insert("fromBlock".into(), block_tag(from_block));
        filter.insert("toBlock".into(), block_tag(to_block));
        filter.insert(
            "topics".into(),
            Value::Array(topics.iter().map(Topic::encode).collect()),
        );

        let resp = self.send("eth_getLogs", vec![Value::Object(filter)]).await?;
        Ok(decode::logs(&resp))
    }

    /// Tri-state receipt status for a transaction hash.
    pub async fn transaction_receipt_status(
        &self,
        tx_hash: &[u8],
    ) -> Result<TransactionStatus, ProviderError> {
        let resp = self
            .send(
                "eth_getTransactionReceipt",
                vec![json!(hex::bytes_to_hex(tx_hash))],
            )
            .await?;
        Ok(decode::receipt_status(&resp))
    }

    /// Whether the node has any record for this transaction hash.
    pub async fn transaction_exists(&self, tx_hash: &[u8]) -> Result<bool, ProviderError> {
        let resp = self
            .send(
                "eth_getTransactionByHash",
                vec![json!(hex::bytes_to_hex(tx_hash))],
            )
            .await?;
        Ok(decode::exists(&resp))
    }

    /// Storage word of a contract at `position`.
    pub async fn storage_at(
        &self,
        contract_address: &str,
        position: &[u8],
        block_height: Option<u64>,
    ) -> Result<String, ProviderError> {
        let resp = self
            .send(
                "eth_getStorageAt",
                vec![
                    json!(contract_address.to_lowercase()),
                    json!(hex::bytes_to_hex(position)),
                    block_tag(block_height),
                ],
            )
            .await?;
        decode::hex_string(&resp)
    }

    /// Read-only contract call.
    pub async fn call(
        &self,
        contract_address: &str,
        data: &[u8],
        block_height: Option<u64>,
    ) -> Result<String, ProviderError> {
        let call = json!({
            "to": contract_address.to_lowercase(),
            "data": hex::bytes_to_hex(data),
        });
        let resp = self
            .send("eth_call", vec![call, block_tag(block_height)])
            .await?;
        decode::hex_string(&resp)
    }

    /// Gas estimate for a prospective transfer from the bound account.
    /// Returns the node's hex estimate string.
    pub async fn estimate_gas(
        &self,
        to: &str,
        amount: Option<U256>,
        gas_limit: Option<u64>,
        gas_price: Option<u64>,
    ) -> Result<String, ProviderError> {
        let mut call = Map::new();
        call.insert("to".into(), json!(to.to_lowercase()));
        call.insert("from".into(), json!(self.address));
        if let Some(amount) = amount {
            call.insert("value".into(), json!(hex::u256_to_hex(amount)));
        }
        // gas_price and gas_limit share the "gas" wire key; the later
        // insert wins.
        if let Some(gas_price) = gas_price {
            call.insert("gas".into(), json!(hex::u64_to_hex(gas_price)));
        }
        if let Some(gas_limit) = gas_limit {
            call.insert("gas".into(), json!(hex::u64_to_hex(gas_limit)));
        }

        let resp = self
            .send("eth_estimateGas", vec![Value::Object(call)])
            .await?;
        decode::gas_estimate(&resp)
    }

    /// Block header at `height`, or `None` when the node has no such
    /// block.
    pub async fn block_by_number(&self, height: u64) -> Result<Option<Block>, ProviderError> {
        let resp = self
            .send(
                "eth_getBlockByNumber",
                vec![json!(hex::u64_to_hex(height)), json!(false)],
            )
            .await?;
        decode::block(&resp)
    }
}

/// Block bound wire form: hex height, or the literal `"latest"` tag when
/// the bound is absent.
fn block_tag(height: Option<u64>) -> Value {
    match height {
        Some(h) => Value::String(hex::u64_to_hex(h)),
        None => Value::String("latest".into()),
    }
}
