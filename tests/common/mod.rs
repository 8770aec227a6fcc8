//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use explorer_shell::{AppConfig, AppContext};

/// Config pointing the provider at `url`.
#[allow(dead_code)]
pub fn config_with_provider(url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.provider.http_url = Some(url.to_string());
    config.provider.rpc_timeout_secs = 2;
    config
}

#[allow(dead_code)]
pub fn context_with_provider(url: &str) -> AppContext {
    AppContext::new(config_with_provider(url))
}

/// Start a JSON-RPC node on an ephemeral port.
///
/// `handler` receives the method and params and returns the `result`.
#[allow(dead_code)]
pub async fn start_mock_rpc<F>(handler: F) -> SocketAddr
where
    F: Fn(&str, &Value) -> Value + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        let _ = serve_one(socket, handler.as_ref()).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

async fn serve_one<F>(mut socket: TcpStream, handler: &F) -> std::io::Result<()>
where
    F: Fn(&str, &Value) -> Value,
{
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let request: Value = serde_json::from_slice(&buf[header_end..]).unwrap_or(Value::Null);
    let method = request["method"].as_str().unwrap_or_default();
    let result = handler(method, &request["params"]);
    let body = json!({
        "jsonrpc": "2.0",
        "id": request["id"].clone(),
        "result": result,
    })
    .to_string();

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}

/// A latest block carrying the given transaction hashes.
#[allow(dead_code)]
pub fn block_json(number: u64, tx_hashes: &[&str]) -> Value {
    let zero_hash = format!("0x{}", "0".repeat(64));
    json!({
        "hash": format!("0x{}", "1".repeat(64)),
        "parentHash": zero_hash,
        "sha3Uncles": zero_hash,
        "miner": format!("0x{}", "0".repeat(40)),
        "stateRoot": zero_hash,
        "transactionsRoot": zero_hash,
        "receiptsRoot": zero_hash,
        "logsBloom": format!("0x{}", "0".repeat(512)),
        "difficulty": "0x0",
        "number": format!("0x{:x}", number),
        "gasLimit": "0x1c9c380",
        "gasUsed": "0x0",
        "timestamp": "0x6553f100",
        "extraData": "0x",
        "mixHash": zero_hash,
        "nonce": "0x0000000000000000",
        "baseFeePerGas": "0x7",
        "size": "0x220",
        "uncles": [],
        "transactions": tx_hashes,
    })
}
