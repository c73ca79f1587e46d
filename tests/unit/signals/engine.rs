//! Unit tests for the signal engine and the readout log

use crate::fixtures::{approx_eq, linear_closes, series};
use stock_signals::models::{BarSeries, DecisionLabel};
use stock_signals::signals::{build_log, SignalEngine};

#[test]
fn test_steady_uptrend_trims() {
    let (set, decision) =
        SignalEngine::evaluate(&series("UP", &linear_closes(250, 100.0, 1.0))).unwrap();

    assert!(approx_eq(set.last_close, 349.0));
    assert!(approx_eq(set.rsi.unwrap(), 100.0));
    assert!(set.macd.unwrap() > set.signal_line.unwrap());
    assert!(set.sma50.unwrap() > set.sma200.unwrap());
    assert_eq!(decision.label, DecisionLabel::TrimPosition);
}

#[test]
fn test_steady_downtrend_buys_the_dip() {
    let (set, decision) =
        SignalEngine::evaluate(&series("DOWN", &linear_closes(250, 400.0, -1.0))).unwrap();

    assert!(approx_eq(set.rsi.unwrap(), 0.0));
    assert!(set.macd.unwrap() < set.signal_line.unwrap());
    assert_eq!(decision.label, DecisionLabel::BuyDip);
}

#[test]
fn test_short_history_leaves_long_averages_undefined() {
    let set = SignalEngine::indicators(&series("NEW", &linear_closes(120, 50.0, 0.25))).unwrap();

    assert!(set.sma50.is_some());
    assert!(set.ema50.is_some());
    assert!(set.sma200.is_none());
    assert!(set.ema200.is_none());
    assert!(set.rsi.is_some());
    assert!(set.upper_band.is_some());
}

#[test]
fn test_empty_series_has_no_snapshot() {
    let empty = BarSeries::new("NONE", None, Vec::new()).unwrap();
    assert!(SignalEngine::evaluate(&empty).is_none());
}

#[test]
fn test_readout_lines() {
    let (set, decision) =
        SignalEngine::evaluate(&series("NEW", &linear_closes(60, 10.0, 0.5))).unwrap();
    let log = build_log("NEW", "NEW Inc.", &set, &decision);

    assert_eq!(log.len(), 15);
    assert_eq!(log[0], "Stock: NEW");
    assert_eq!(log[1], "Full Stock Name: NEW Inc.");
    assert!(log[4].starts_with("200-Day Simple Moving Average (SMA200): undefined"));
    assert!(log[12].starts_with("Fibonacci Levels: {\"23.6%\": "));
    assert_eq!(
        log[14],
        format!("Decision: {} - {}", decision.label, decision.rationale)
    );
}
