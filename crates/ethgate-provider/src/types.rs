//! Typed domain values decoded from RPC results.

use serde::Deserialize;
use serde_json::Value;

use ethgate_core::hex;

/// One event record matched by an address/topic filter.
///
/// `address`, `topics` and `data` are required; list elements missing
/// any of them are dropped during decoding. The linkage fields are null
/// for pending logs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub address: String,
    pub topics: Vec<String>,
    pub data: String,
    #[serde(default)]
    pub block_number: Option<String>,
    #[serde(default)]
    pub block_hash: Option<String>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub transaction_index: Option<String>,
    #[serde(default)]
    pub log_index: Option<String>,
}

impl LogEntry {
    /// Block height, once the log is mined.
    pub fn block_height(&self) -> Option<u64> {
        self.block_number.as_deref().and_then(hex::hex_to_u64)
    }
}

/// A block header as returned by `eth_getBlockByNumber`.
///
/// Numeric fields keep their wire hex form; the accessors apply the
/// lenient numeric parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Null for the pending block.
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
    pub parent_hash: String,
    pub timestamp: String,
    #[serde(default)]
    pub gas_limit: Option<String>,
    #[serde(default)]
    pub gas_used: Option<String>,
    /// Transaction hashes (bodies are never requested).
    #[serde(default)]
    pub transactions: Vec<Value>,
}

impl Block {
    pub fn height(&self) -> Option<u64> {
        self.number.as_deref().and_then(hex::hex_to_u64)
    }

    /// Unix timestamp of the block.
    pub fn time(&self) -> Option<u64> {
        hex::hex_to_u64(&self.timestamp)
    }
}

/// Tri-state outcome of a submitted transaction. `NotFound` is a
/// legitimate domain value (pending or unknown hash), never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Success,
    Failed,
    NotFound,
}

/// One slot of a log topic filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topic {
    /// Match exactly this topic value.
    Exact(Vec<u8>),
    /// Match any of the listed values; `None` slots stay wildcards.
    OneOf(Vec<Option<Vec<u8>>>),
    /// Wildcard: matches every value in this position.
    Any,
}

impl Topic {
    /// Wire form: one hex string, an array of hex-string-or-null, or
    /// null.
    pub(crate) fn encode(&self) -> Value {
        match self {
            Self::Exact(bytes) => Value::String(hex::bytes_to_hex(bytes)),
            Self::OneOf(slots) => Value::Array(
                slots
                    .iter()
                    .map(|slot| match slot {
                        Some(bytes) => Value::String(hex::bytes_to_hex(bytes)),
                        None => Value::Null,
                    })
                    .collect(),
            ),
            Self::Any => Value::Null,
        }
    }
}
