//! JSON-RPC 2.0 wire types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request id used for every call. Calls are independent and never
/// correlated by id, so a constant is sufficient.
pub const REQUEST_ID: u64 = 1;

/// A JSON-RPC 2.0 request. Params are positional and order-significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<Value>,
    pub id: u64,
}

impl JsonRpcRequest {
    /// Build a fresh envelope for one call.
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            method: method.into(),
            params,
            id: REQUEST_ID,
        }
    }
}

/// A JSON-RPC 2.0 error object.
///
/// Both fields are tolerated as missing: gas estimation needs to tell an
/// error carrying a numeric code and a message from one carrying neither.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct JsonRpcError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl std::fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.message, self.code) {
            (Some(msg), Some(code)) => write!(f, "{msg} (code {code})"),
            (Some(msg), None) => write!(f, "{msg}"),
            (None, Some(code)) => write!(f, "code {code}"),
            (None, None) => write!(f, "unspecified error"),
        }
    }
}

/// A JSON-RPC 2.0 response envelope.
///
/// `result` is `None` only when the key is absent from the body; a
/// literal `"result": null` decodes to `Some(Value::Null)`. Void calls
/// depend on this distinction.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

fn present<'de, D>(de: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(de).map(Some)
}

impl JsonRpcResponse {
    /// Envelope carrying only a result.
    pub fn from_result(result: Value) -> Self {
        Self {
            jsonrpc: Some("2.0".into()),
            id: Some(Value::from(REQUEST_ID)),
            result: Some(result),
            error: None,
        }
    }

    /// Envelope carrying only an error object.
    pub fn from_error(error: JsonRpcError) -> Self {
        Self {
            jsonrpc: Some("2.0".into()),
            id: Some(Value::from(REQUEST_ID)),
            result: None,
            error: Some(error),
        }
    }
}
