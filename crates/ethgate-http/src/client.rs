//! HTTP JSON-RPC client.

use std::time::Duration;

use async_trait::async_trait;

use ethgate_core::error::TransportError;
use ethgate_core::request::{JsonRpcRequest, JsonRpcResponse};
use ethgate_core::transport::RpcTransport;

/// Configuration for [`HttpRpcClient`].
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Secret sent as the Basic-auth password; the username stays empty.
    /// No auth header is sent when this is `None`.
    pub auth_secret: Option<String>,
    pub request_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            auth_secret: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP JSON-RPC transport.
///
/// Issues exactly one POST per [`RpcTransport::send`]. Raw-transaction
/// submission is not idempotent, so no request is ever retried here.
pub struct HttpRpcClient {
    url: String,
    http: reqwest::Client,
    auth_secret: Option<String>,
}

impl HttpRpcClient {
    /// Create a new client for the given JSON-RPC endpoint URL.
    pub fn new(url: impl Into<String>, config: HttpClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("failed to build reqwest client");

        Self {
            url: url.into(),
            http,
            auth_secret: config.auth_secret,
        }
    }

    /// Create with default configuration and no credentials.
    pub fn default_for(url: impl Into<String>) -> Self {
        Self::new(url, HttpClientConfig::default())
    }
}

#[async_trait]
impl RpcTransport for HttpRpcClient {
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
        tracing::debug!(method = %req.method, url = %self.url, "sending rpc request");

        let mut builder = self.http.post(&self.url).json(&req);
        if let Some(secret) = &self.auth_secret {
            builder = builder.basic_auth("", Some(secret));
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, url = %self.url, "endpoint returned http failure");
            return Err(TransportError::Http(format!("HTTP {status}: {body}")));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;
        serde_json::from_str(&body).map_err(TransportError::Deserialization)
    }

    fn url(&self) -> &str {
        &self.url
    }
}
