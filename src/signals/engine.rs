//! Indicator snapshot and decision for a bar series.

use crate::indicators::{
    calculate_bollinger_bands_default, calculate_ema, calculate_fibonacci_levels_default,
    calculate_macd, calculate_rsi_default, calculate_sma, detect_volume_spike_default,
};
use crate::models::{BarSeries, Decision, IndicatorSet};
use crate::signals::decision::DecisionEngine;

pub const SHORT_TREND_PERIOD: usize = 50;
pub const LONG_TREND_PERIOD: usize = 200;

pub struct SignalEngine;

impl SignalEngine {
    /// Latest value of every indicator; `None` only for an empty series.
    pub fn indicators(series: &BarSeries) -> Option<IndicatorSet> {
        let bars = series.bars();
        let last_close = series.last()?.close;

        let macd = calculate_macd(bars);
        let bands = calculate_bollinger_bands_default(bars);

        let mut set = IndicatorSet::new(last_close)
            .with_sma(
                calculate_sma(bars, SHORT_TREND_PERIOD),
                calculate_sma(bars, LONG_TREND_PERIOD),
            )
            .with_ema(
                calculate_ema(bars, SHORT_TREND_PERIOD),
                calculate_ema(bars, LONG_TREND_PERIOD),
            )
            .with_rsi(calculate_rsi_default(bars))
            .with_macd(macd.map(|m| m.macd), macd.map(|m| m.signal))
            .with_bands(bands.map(|b| b.upper), bands.map(|b| b.lower))
            .with_volume_spike(detect_volume_spike_default(bars));

        if let Some(levels) = calculate_fibonacci_levels_default(bars) {
            set = set.with_fibonacci(levels);
        }

        Some(set)
    }

    /// Indicators and the decision derived from them.
    pub fn evaluate(series: &BarSeries) -> Option<(IndicatorSet, Decision)> {
        let set = Self::indicators(series)?;
        let decision = DecisionEngine::decide(&set);
        Some((set, decision))
    }
}
