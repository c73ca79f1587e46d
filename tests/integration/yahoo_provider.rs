//! Integration tests for the Yahoo chart provider

#[path = "yahoo_provider/test_utils.rs"]
mod test_utils;

use chrono::NaiveDate;
use std::sync::Arc;
use stock_signals::core::analysis::AnalysisService;
use stock_signals::error::{AnalysisError, ProviderError};
use stock_signals::services::{SeriesProvider, YahooSeriesProvider};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use test_utils::{chart_body, mock_chart, not_found_body, provider_config};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn fetch_parses_chart_rows() {
    let server = MockServer::start().await;
    mock_chart(&server, "AAPL").await;

    let provider = YahooSeriesProvider::new(&provider_config(&server)).unwrap();
    let series = provider.fetch("AAPL").await.unwrap();

    assert_eq!(series.symbol(), "AAPL");
    assert_eq!(series.name(), Some("Apple Inc."));
    assert_eq!(series.len(), 3);

    let dates: Vec<NaiveDate> = series.bars().iter().map(|b| b.date).collect();
    assert_eq!(dates, vec![date(2024, 3, 4), date(2024, 3, 6), date(2024, 3, 7)]);
    assert_eq!(series.closes(), vec![170.0, 172.0, 173.0]);
    assert_eq!(series.bars()[0].volume, 52_000_000.0);
}

#[tokio::test]
async fn http_404_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/NOPE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_body()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = YahooSeriesProvider::new(&provider_config(&server)).unwrap();
    let err = provider.fetch("NOPE").await.unwrap_err();
    assert!(matches!(err, ProviderError::NotFound { ref ticker } if ticker == "NOPE"));
}

#[tokio::test]
async fn chart_error_object_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/GONE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(not_found_body()))
        .mount(&server)
        .await;

    let provider = YahooSeriesProvider::new(&provider_config(&server)).unwrap();
    let err = provider.fetch("GONE").await.unwrap_err();
    assert!(matches!(err, ProviderError::NotFound { .. }));
}

#[tokio::test]
async fn server_errors_are_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/AAPL"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mock_chart(&server, "AAPL").await;

    let provider = YahooSeriesProvider::new(&provider_config(&server)).unwrap();
    let series = provider.fetch("AAPL").await.unwrap();
    assert_eq!(series.len(), 3);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/BAD"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = YahooSeriesProvider::new(&provider_config(&server)).unwrap();
    let err = provider.fetch("BAD").await.unwrap_err();
    assert!(matches!(err, ProviderError::Api { status: 400, .. }));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn persistent_server_errors_surface_after_retries() {
    let server = MockServer::start().await;
    // One attempt plus two retries.
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/DOWN"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let provider = YahooSeriesProvider::new(&provider_config(&server)).unwrap();
    let err = provider.fetch("DOWN").await.unwrap_err();
    assert!(matches!(err, ProviderError::Api { status: 503, .. }));
}

#[tokio::test]
async fn analysis_over_short_provider_history() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body("AAPL")))
        .mount(&server)
        .await;

    let provider = YahooSeriesProvider::new(&provider_config(&server)).unwrap();
    let service = AnalysisService::new(Arc::new(provider));

    let report = service.analyze("aapl").await.unwrap();
    assert_eq!(report.full_name, "Apple Inc.");
    assert_eq!(report.indicators.last_close, 173.0);
    assert!(report.indicators.sma50.is_none());
    assert!(report.indicators.rsi.is_none());
    assert_eq!(
        report.log[3],
        "50-Day Simple Moving Average (SMA50): undefined - Used to gauge short-term trend direction."
    );

    let points = service.forecast("AAPL", 2).await.unwrap();
    assert_eq!(points[0].date, date(2024, 3, 8));
    assert_eq!(points[1].date, date(2024, 3, 11));
}

#[tokio::test]
async fn unknown_ticker_maps_to_data_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let provider = YahooSeriesProvider::new(&provider_config(&server)).unwrap();
    let service = AnalysisService::new(Arc::new(provider));
    let err = service.analyze("NOPE").await.unwrap_err();
    assert!(matches!(err, AnalysisError::DataUnavailable { .. }));
}
