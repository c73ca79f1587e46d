//! Human-readable log of the readings behind a decision.

use crate::models::{Decision, FibonacciLevels, IndicatorSet};

fn reading(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "undefined".to_string(),
    }
}

fn fibonacci(levels: &FibonacciLevels) -> String {
    let body: Vec<String> = levels
        .entries()
        .iter()
        .map(|(label, level)| format!("\"{}\": {}", label, level))
        .collect();
    format!("{{{}}}", body.join(", "))
}

/// Ordered log lines: identity, one line per indicator, then the decision.
pub fn build_log(
    ticker: &str,
    full_name: &str,
    set: &IndicatorSet,
    decision: &Decision,
) -> Vec<String> {
    vec![
        format!("Stock: {}", ticker),
        format!("Full Stock Name: {}", full_name),
        format!("Last Close Price: {}", set.last_close),
        format!(
            "50-Day Simple Moving Average (SMA50): {} - Used to gauge short-term trend direction.",
            reading(set.sma50)
        ),
        format!(
            "200-Day Simple Moving Average (SMA200): {} - Used for long-term trend analysis.",
            reading(set.sma200)
        ),
        format!(
            "50-Day Exponential Moving Average (EMA50): {} - Reacts more quickly to price changes.",
            reading(set.ema50)
        ),
        format!(
            "200-Day Exponential Moving Average (EMA200): {} - Provides a smoother long-term trend.",
            reading(set.ema200)
        ),
        format!(
            "Relative Strength Index (RSI): {} - Indicates overbought (>70) or oversold (<30) conditions.",
            reading(set.rsi)
        ),
        format!(
            "MACD Value: {} - Measures trend strength and momentum.",
            reading(set.macd)
        ),
        format!(
            "Signal Line: {} - Used to detect MACD crossovers for trend confirmation.",
            reading(set.signal_line)
        ),
        format!(
            "Upper Bollinger Band: {} - Acts as a resistance level in an uptrend.",
            reading(set.upper_band)
        ),
        format!(
            "Lower Bollinger Band: {} - Acts as a support level in a downtrend.",
            reading(set.lower_band)
        ),
        format!(
            "Fibonacci Levels: {} - Identifies potential support and resistance zones.",
            fibonacci(&set.fibonacci)
        ),
        format!(
            "Volume Spike Detected: {} - High volume suggests strong buying/selling pressure.",
            set.volume_spike
        ),
        format!("Decision: {} - {}", decision.label, decision.rationale),
    ]
}
