//! Unit tests for exchange routing

use std::sync::Arc;
use stock_signals::services::{Exchange, ExchangeRouter, InMemorySeriesProvider, SeriesProvider};

use crate::fixtures::{linear_closes, series};

#[test]
fn test_exchange_from_ticker() {
    assert_eq!(Exchange::for_ticker("AAPL"), Exchange::Us);
    assert_eq!(Exchange::for_ticker("BRK.B"), Exchange::Us);
    assert_eq!(Exchange::for_ticker("JKH.N0000"), Exchange::Colombo);
    assert_eq!(Exchange::for_ticker("comb.x0000"), Exchange::Colombo);
    assert_eq!(Exchange::for_ticker("CSELK:JKH.N0000"), Exchange::Colombo);
    assert_eq!(Exchange::for_ticker("NASDAQ:AAPL"), Exchange::Us);
    assert_eq!(Exchange::for_ticker("ABC.N000"), Exchange::Us);
    assert_eq!(Exchange::for_ticker(".N0000"), Exchange::Us);
}

#[tokio::test]
async fn test_router_dispatches_by_exchange() {
    let us = InMemorySeriesProvider::new().with_series(series("AAPL", &linear_closes(5, 1.0, 1.0)));
    let colombo = InMemorySeriesProvider::new()
        .with_series(series("JKH.N0000", &linear_closes(7, 1.0, 1.0)));
    let router = ExchangeRouter::new(Arc::new(us), Arc::new(colombo));

    assert_eq!(router.fetch("AAPL").await.unwrap().len(), 5);
    assert_eq!(router.fetch("JKH.N0000").await.unwrap().len(), 7);

    // Each exchange only sees its own tickers.
    assert!(router.fetch("AAPL.N0000").await.is_err());
}
