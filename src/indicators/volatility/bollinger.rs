//! Bollinger Bands indicator

use serde::{Deserialize, Serialize};

use crate::common::math;
use crate::models::bar::closes;
use crate::models::Bar;

pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_STD_DEV: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Bands aligned with `values`.
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// The deviation is the sample standard deviation (n - 1) of the same window.
pub fn bollinger_series(
    values: &[f64],
    period: usize,
    std_dev: f64,
) -> Vec<Option<BollingerBands>> {
    let middle = math::rolling_mean(values, period);
    let std = math::rolling_std(values, period);
    middle
        .iter()
        .zip(&std)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(BollingerBands {
                upper: m + std_dev * s,
                middle: *m,
                lower: m - std_dev * s,
            }),
            _ => None,
        })
        .collect()
}

pub fn calculate_bollinger_bands(
    bars: &[Bar],
    period: usize,
    std_dev: f64,
) -> Option<BollingerBands> {
    bollinger_series(&closes(bars), period, std_dev)
        .last()
        .copied()
        .flatten()
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(bars: &[Bar]) -> Option<BollingerBands> {
    calculate_bollinger_bands(bars, BOLLINGER_PERIOD, BOLLINGER_STD_DEV)
}
