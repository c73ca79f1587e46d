//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::bar::closes;
use crate::models::Bar;

/// Exponential smoothing with α = 2/(period+1), seeded with the first value.
///
/// No warm-up bias adjustment is applied, so the series is defined from the
/// first element onward.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut iter = values.iter();
    if let Some(&first) = iter.next() {
        let mut prev = first;
        out.push(prev);
        for &value in iter {
            prev = math::ema_from_previous(value, prev, period);
            out.push(prev);
        }
    }
    out
}

/// Latest EMA of closing prices.
///
/// Reported only once the series covers a full `period`; shorter histories
/// yield `None` even though the recurrence itself has a value.
pub fn calculate_ema(bars: &[Bar], period: usize) -> Option<f64> {
    if bars.len() < period {
        return None;
    }
    ema_series(&closes(bars), period).last().copied()
}
