//! ethgate-http — HTTP JSON-RPC transport backed by `reqwest`.
//!
//! One POST per call, optional HTTP Basic auth, no retries. Retry and
//! failover policy belong to the caller; this transport only reports.

mod client;

pub use client::{HttpClientConfig, HttpRpcClient};
