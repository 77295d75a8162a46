//! Auth wiring tests against a local listener: the Basic-auth header is
//! sent with an empty username and the secret as password, and only
//! when a secret is configured.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use ethgate_core::request::JsonRpcRequest;
use ethgate_core::transport::RpcTransport;
use ethgate_http::{HttpClientConfig, HttpRpcClient};

/// Accepts one connection, answers with a canned envelope and returns
/// the raw request headers.
async fn spawn_server() -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        let headers_end = loop {
            let n = socket.read(&mut buf).await.unwrap();
            assert!(n > 0, "connection closed before headers were complete");
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos;
            }
        };
        let headers = String::from_utf8_lossy(&raw[..headers_end]).to_string();

        let body_len = content_length(&headers);
        while raw.len() < headers_end + 4 + body_len {
            let n = socket.read(&mut buf).await.unwrap();
            assert!(n > 0, "connection closed before body was complete");
            raw.extend_from_slice(&buf[..n]);
        }

        let body = r#"{"jsonrpc":"2.0","id":1,"result":"0x1"}"#;
        let resp = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(resp.as_bytes()).await.unwrap();
        socket.flush().await.unwrap();
        headers
    });

    (format!("http://{addr}"), handle)
}

fn content_length(headers: &str) -> usize {
    header_value(headers, "content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

fn header_value<'a>(headers: &'a str, name: &str) -> Option<&'a str> {
    headers.lines().find_map(|line| {
        let (n, v) = line.split_once(':')?;
        n.eq_ignore_ascii_case(name).then(|| v.trim())
    })
}

#[tokio::test]
async fn secret_sends_basic_auth_with_empty_username() {
    let (url, server) = spawn_server().await;
    let client = HttpRpcClient::new(
        url,
        HttpClientConfig {
            auth_secret: Some("sesame".into()),
            ..HttpClientConfig::default()
        },
    );

    let resp = client
        .send(JsonRpcRequest::new("eth_blockNumber", vec![]))
        .await
        .unwrap();
    assert_eq!(resp.result, Some(serde_json::json!("0x1")));

    let headers = server.await.unwrap();
    // base64(":sesame") — empty username, secret as password
    assert_eq!(
        header_value(&headers, "authorization"),
        Some("Basic OnNlc2FtZQ==")
    );
}

#[tokio::test]
async fn no_secret_sends_no_auth_header() {
    let (url, server) = spawn_server().await;
    let client = HttpRpcClient::default_for(url);

    client
        .send(JsonRpcRequest::new("eth_blockNumber", vec![]))
        .await
        .unwrap();

    let headers = server.await.unwrap();
    assert_eq!(header_value(&headers, "authorization"), None);
}
