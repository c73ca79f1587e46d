//! Mocked chart API for provider integration tests

use serde_json::{json, Value};
use std::time::Duration;
use stock_signals::config::ProviderConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 09:30 New York time, 2024-03-04 through 2024-03-07.
pub const TIMESTAMPS: [i64; 4] = [1709562600, 1709649000, 1709735400, 1709821800];

pub fn provider_config(server: &MockServer) -> ProviderConfig {
    ProviderConfig {
        base_url: server.uri(),
        range: "2y".to_string(),
        max_retries: 2,
        retry_min_delay: Duration::from_millis(1),
        request_timeout: Duration::from_secs(5),
    }
}

/// Four daily rows; the second has a null close and must be dropped.
pub fn chart_body(symbol: &str) -> Value {
    json!({
        "chart": {
            "result": [{
                "meta": {
                    "symbol": symbol,
                    "longName": "Apple Inc.",
                    "shortName": "Apple",
                    "gmtoffset": -18000
                },
                "timestamp": TIMESTAMPS,
                "indicators": {
                    "quote": [{
                        "open": [169.0, 170.5, 171.0, 172.5],
                        "high": [171.0, 172.0, 173.0, 174.0],
                        "low": [168.0, 169.5, 170.0, 171.5],
                        "close": [170.0, null, 172.0, 173.0],
                        "volume": [52000000, 48000000, 61000000, 55000000]
                    }]
                }
            }],
            "error": null
        }
    })
}

pub fn not_found_body() -> Value {
    json!({
        "chart": {
            "result": null,
            "error": {
                "code": "Not Found",
                "description": "No data found, symbol may be delisted"
            }
        }
    })
}

pub async fn mock_chart(server: &MockServer, symbol: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/v8/finance/chart/{}", symbol)))
        .and(query_param("interval", "1d"))
        .and(query_param("range", "2y"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(symbol)))
        .mount(server)
        .await;
}
