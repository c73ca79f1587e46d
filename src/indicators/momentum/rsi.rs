//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::bar::closes;
use crate::models::Bar;

pub const RSI_PERIOD: usize = 14;

/// RSI over closing prices.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Gains and losses are trailing simple means of the bar-to-bar deltas; the
/// first bar has no predecessor and contributes a zero delta. A zero average
/// loss is not special-cased: with gains the ratio is infinite and RSI is 100,
/// without gains it is 0/0 and the value is undefined.
pub fn rsi_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut gains = Vec::with_capacity(values.len());
    let mut losses = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let change = if i == 0 { 0.0 } else { values[i] - values[i - 1] };
        gains.push(if change > 0.0 { change } else { 0.0 });
        losses.push(if change < 0.0 { -change } else { 0.0 });
    }

    let avg_gain = math::rolling_mean(&gains, period);
    let avg_loss = math::rolling_mean(&losses, period);

    math::zip_with(&avg_gain, &avg_loss, |gain, loss| {
        let rs = gain / loss;
        100.0 - (100.0 / (1.0 + rs))
    })
    .into_iter()
    .map(|v| v.filter(|rsi| rsi.is_finite()))
    .collect()
}

/// Latest RSI of closing prices.
pub fn calculate_rsi(bars: &[Bar], period: usize) -> Option<f64> {
    math::latest(&rsi_series(&closes(bars), period))
}

/// Latest RSI with the default period (14).
pub fn calculate_rsi_default(bars: &[Bar]) -> Option<f64> {
    calculate_rsi(bars, RSI_PERIOD)
}
