//! Integration tests for the TradingView chart feed
//!
//! wiremock only speaks HTTP, so these run against a local websocket server
//! that replays a recorded-shape session.

#[path = "tradingview_provider/test_utils.rs"]
mod test_utils;

use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use stock_signals::core::analysis::AnalysisService;
use stock_signals::error::{AnalysisError, ProviderError};
use stock_signals::services::{
    ExchangeRouter, InMemorySeriesProvider, SeriesProvider, TradingViewSeriesProvider,
};

use test_utils::{
    bars, critical_error, feed_config, frame, greeting, series_completed, spawn_feed,
    symbol_error, symbol_resolved, DESCRIPTION, TIMESTAMPS,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn session_script() -> Vec<String> {
    let [t0, t1, t2] = TIMESTAMPS.map(|t| t as f64);
    vec![
        format!("{}{}", greeting(), frame("~h~1")),
        symbol_resolved(),
        bars(
            "timescale_update",
            &[
                [t0, 190.0, 192.0, 189.0, 191.0, 120000.0],
                [t1, 191.0, 193.0, 190.0, 192.0, 95000.0],
            ],
        ),
        // Later update revises 03-05 within the same Colombo day.
        format!(
            "{}{}",
            bars(
                "du",
                &[
                    [t2, 192.0, 195.0, 191.0, 194.5, 130000.0],
                    [t1 + 3600.0, 191.0, 193.5, 190.0, 192.5, 97000.0],
                ],
            ),
            series_completed()
        ),
    ]
}

#[tokio::test]
async fn fetch_reads_completed_series() {
    let feed = spawn_feed(session_script()).await;
    let provider = TradingViewSeriesProvider::new(&feed_config(&feed.url));

    let series = provider.fetch("JKH.N0000").await.unwrap();

    assert_eq!(series.symbol(), "JKH.N0000");
    assert_eq!(series.name(), Some(DESCRIPTION));
    let dates: Vec<NaiveDate> = series.bars().iter().map(|b| b.date).collect();
    assert_eq!(dates, vec![date(2024, 3, 4), date(2024, 3, 5), date(2024, 3, 6)]);
    assert_eq!(series.closes(), vec![191.0, 192.5, 194.5]);
    assert_eq!(series.bars()[0].volume, 120000.0);
}

#[tokio::test]
async fn session_requests_qualified_symbol_and_echoes_heartbeat() {
    let feed = spawn_feed(session_script()).await;
    let provider = TradingViewSeriesProvider::new(&feed_config(&feed.url));
    provider.fetch("JKH.N0000").await.unwrap();

    let sent = tokio::time::timeout(Duration::from_secs(5), feed.received)
        .await
        .unwrap()
        .unwrap();

    assert!(sent[0].contains("set_auth_token"));
    assert!(sent
        .iter()
        .any(|m| m.contains("resolve_symbol") && m.contains("CSELK:JKH.N0000")));
    assert!(sent
        .iter()
        .any(|m| m.contains("create_series") && m.contains("\"1D\",500]")));
    assert!(sent.iter().any(|m| m == "~m~4~m~~h~1"));
}

#[tokio::test]
async fn prefixed_ticker_is_not_double_qualified() {
    let feed = spawn_feed(session_script()).await;
    let provider = TradingViewSeriesProvider::new(&feed_config(&feed.url));
    assert_eq!(provider.qualified_symbol("CSELK:JKH.N0000"), "CSELK:JKH.N0000");

    provider.fetch("CSELK:JKH.N0000").await.unwrap();
    let sent = feed.received.await.unwrap();
    assert!(!sent.iter().any(|m| m.contains("CSELK:CSELK")));
}

#[tokio::test]
async fn symbol_error_is_not_found() {
    let feed = spawn_feed(vec![greeting(), symbol_error()]).await;
    let provider = TradingViewSeriesProvider::new(&feed_config(&feed.url));

    let err = provider.fetch("NOPE.N0000").await.unwrap_err();
    assert!(matches!(err, ProviderError::NotFound { ref ticker } if ticker == "NOPE.N0000"));
}

#[tokio::test]
async fn critical_error_is_protocol_error_without_retry() {
    let feed = spawn_feed(vec![greeting(), critical_error()]).await;
    let mut config = feed_config(&feed.url);
    // A retry would hit a closed listener and surface as a stream error.
    config.max_retries = 2;
    let provider = TradingViewSeriesProvider::new(&config);

    let err = provider.fetch("JKH.N0000").await.unwrap_err();
    assert!(matches!(err, ProviderError::Protocol(_)), "got {:?}", err);
}

#[tokio::test]
async fn silent_feed_times_out() {
    let feed = spawn_feed(vec![greeting()]).await;
    let mut config = feed_config(&feed.url);
    config.request_timeout = Duration::from_millis(200);
    let provider = TradingViewSeriesProvider::new(&config);

    let err = provider.fetch("JKH.N0000").await.unwrap_err();
    assert!(matches!(err, ProviderError::Timeout(_)));
}

#[tokio::test]
async fn router_sends_colombo_tickers_to_the_feed() {
    let feed = spawn_feed(session_script()).await;
    let router = ExchangeRouter::new(
        Arc::new(InMemorySeriesProvider::new()),
        Arc::new(TradingViewSeriesProvider::new(&feed_config(&feed.url))),
    );
    let service = AnalysisService::new(Arc::new(router));

    let report = service.analyze("jkh.n0000").await.unwrap();
    assert_eq!(report.ticker, "JKH.N0000");
    assert_eq!(report.full_name, DESCRIPTION);
    assert_eq!(report.indicators.last_close, 194.5);
}

#[tokio::test]
async fn unknown_colombo_ticker_maps_to_data_unavailable() {
    let feed = spawn_feed(vec![greeting(), symbol_error()]).await;
    let router = ExchangeRouter::new(
        Arc::new(InMemorySeriesProvider::new()),
        Arc::new(TradingViewSeriesProvider::new(&feed_config(&feed.url))),
    );
    let service = AnalysisService::new(Arc::new(router));

    let err = service.analyze("NOPE.N0000").await.unwrap_err();
    assert!(matches!(err, AnalysisError::DataUnavailable { .. }));
}
