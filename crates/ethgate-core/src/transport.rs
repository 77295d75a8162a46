//! The `RpcTransport` trait — the seam between typed operations and the
//! wire.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::request::{JsonRpcRequest, JsonRpcResponse};

/// The async trait every transport implements.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` for use across Tokio tasks.
///
/// # Object Safety
/// The trait is object-safe and can be stored as `Arc<dyn RpcTransport>`.
#[async_trait]
pub trait RpcTransport: Send + Sync + 'static {
    /// Issue exactly one outbound call and return the decoded envelope.
    ///
    /// Dropping the returned future aborts the underlying call and
    /// suppresses delivery of any late-arriving result.
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError>;

    /// The endpoint this transport talks to.
    fn url(&self) -> &str;
}
