//! Failure taxonomy for provider operations.

use thiserror::Error;

use ethgate_core::error::{DecodeError, TransportError};
use ethgate_core::request::JsonRpcError;

/// The three failure channels of one operation.
///
/// Domain-absent outcomes (missing receipt, zero log matches, unknown
/// block) are success values on the operation result types, never
/// variants here. Callers branch on the variant, not on message text.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Connectivity or envelope-level failure, surfaced untouched.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The node answered with a JSON-RPC error object.
    #[error("rpc error: {0}")]
    Rpc(JsonRpcError),

    /// The result was present but its shape did not match the operation.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
