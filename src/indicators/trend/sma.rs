//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::bar::closes;
use crate::models::Bar;

/// Trailing arithmetic mean of `values`; the first `period - 1` entries are `None`.
pub fn sma_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    math::rolling_mean(values, period)
}

/// Latest SMA of closing prices, `None` with fewer than `period` bars.
pub fn calculate_sma(bars: &[Bar], period: usize) -> Option<f64> {
    math::latest(&sma_series(&closes(bars), period))
}
