//! Wire-boundary error types.

use thiserror::Error;

/// Errors raised while talking to the endpoint, before any result
/// decoding happens. Surfaced to callers untouched.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed (connection refused, timeout, non-2xx status).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body was not a JSON-RPC envelope.
    #[error("envelope deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// Errors raised while converting a present `result` value into the
/// shape an operation expects. Distinct from domain-absent outcomes,
/// which are success values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Hex byte string with an odd number of digits.
    #[error("odd-length hex string")]
    OddLength,

    /// Non-hex character in a byte string.
    #[error("invalid hex character")]
    InvalidHex,

    /// Result present but of the wrong shape for the operation.
    #[error("unexpected result shape: {0}")]
    Shape(String),
}
