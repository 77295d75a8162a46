//! ethgate-core — foundation types for the ethgate JSON-RPC client.
//!
//! # Overview
//!
//! ethgate translates a fixed set of blockchain-node queries into JSON-RPC
//! calls against an HTTP endpoint and decodes the loosely-typed responses
//! into domain values. The core crate defines:
//!
//! - [`JsonRpcRequest`] / [`JsonRpcResponse`] — wire envelope types
//! - [`hex`] — the `0x` hex convention codec shared by all operations
//! - [`RpcTransport`] — the async trait every transport implements
//! - [`TransportError`] / [`DecodeError`] — the failure taxonomy at the
//!   wire and decode boundaries

pub mod error;
pub mod hex;
pub mod request;
pub mod transport;

pub use error::{DecodeError, TransportError};
pub use request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use transport::RpcTransport;
