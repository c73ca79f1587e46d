//! Scripted chart websocket for provider integration tests

use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use std::time::Duration;
use stock_signals::config::TradingViewConfig;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

/// 04:00 UTC on 2024-03-04, 03-05 and 03-06; 09:30 in Colombo.
pub const TIMESTAMPS: [i64; 3] = [1709524800, 1709611200, 1709697600];

pub const DESCRIPTION: &str = "JOHN KEELLS HOLDINGS PLC";

/// A one-connection server that waits for `create_series`, replays `script`
/// and then records everything the client sends until it hangs up.
pub struct ScriptedFeed {
    pub url: String,
    pub received: JoinHandle<Vec<String>>,
}

pub async fn spawn_feed(script: Vec<String>) -> ScriptedFeed {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let received = tokio::spawn(async move {
        let (tcp, _) = listener.accept().await.unwrap();
        let stream = accept_async(tcp).await.unwrap();
        let (mut write, mut read) = stream.split();
        let mut received = Vec::new();

        while let Some(Ok(message)) = read.next().await {
            if let Message::Text(text) = message {
                let requested = text.contains("create_series");
                received.push(text);
                if requested {
                    break;
                }
            }
        }

        for message in script {
            write.send(Message::Text(message)).await.unwrap();
        }

        while let Some(Ok(message)) = read.next().await {
            match message {
                Message::Text(text) => received.push(text),
                Message::Close(_) => break,
                _ => {}
            }
        }
        received
    });

    ScriptedFeed {
        url: format!("ws://{}", addr),
        received,
    }
}

pub fn feed_config(url: &str) -> TradingViewConfig {
    TradingViewConfig {
        ws_url: url.to_string(),
        exchange: "CSELK".to_string(),
        bars: 500,
        utc_offset_secs: 19_800,
        max_retries: 0,
        retry_min_delay: Duration::from_millis(1),
        request_timeout: Duration::from_secs(5),
    }
}

pub fn frame(payload: &str) -> String {
    format!("~m~{}~m~{}", payload.len(), payload)
}

pub fn message(method: &str, params: Value) -> String {
    frame(&json!({ "m": method, "p": params }).to_string())
}

pub fn greeting() -> String {
    frame(
        &json!({
            "session_id": "<0.1.2>_test",
            "timestamp": 1709500000,
            "javastudies": "3.66",
            "protocol": "json"
        })
        .to_string(),
    )
}

pub fn symbol_resolved() -> String {
    message(
        "symbol_resolved",
        json!(["cs_test", "symbol_1", { "name": "JKH.N0000", "description": DESCRIPTION }]),
    )
}

pub fn bars(method: &str, rows: &[[f64; 6]]) -> String {
    let points: Vec<Value> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| json!({ "i": i, "v": row }))
        .collect();
    message(method, json!(["cs_test", { "s1": { "s": points } }]))
}

pub fn series_completed() -> String {
    message("series_completed", json!(["cs_test", "s1", "s1"]))
}

pub fn symbol_error() -> String {
    message("symbol_error", json!(["cs_test", "symbol_1", "invalid symbol"]))
}

pub fn critical_error() -> String {
    message("critical_error", json!(["cs_test", "wrong data", "create_series"]))
}
