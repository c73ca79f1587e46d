//! MACD (Moving Average Convergence Divergence) indicator

use serde::{Deserialize, Serialize};

use crate::models::bar::closes;
use crate::indicators::trend::ema_series;
use crate::models::Bar;

pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;
pub const MACD_SIGNAL_PERIOD: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdReading {
    pub macd: f64,
    pub signal: f64,
}

impl MacdReading {
    pub fn histogram(&self) -> f64 {
        self.macd - self.signal
    }
}

/// MACD line and signal line, aligned with `values`.
///
/// MACD = EMA(12) - EMA(26)
/// Signal = EMA(9) of MACD
pub fn macd_series(values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let fast = ema_series(values, MACD_FAST_PERIOD);
    let slow = ema_series(values, MACD_SLOW_PERIOD);
    let macd_line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal_line = ema_series(&macd_line, MACD_SIGNAL_PERIOD);
    (macd_line, signal_line)
}

/// Latest MACD reading; `None` only for an empty slice.
pub fn calculate_macd(bars: &[Bar]) -> Option<MacdReading> {
    let (macd_line, signal_line) = macd_series(&closes(bars));
    Some(MacdReading {
        macd: *macd_line.last()?,
        signal: *signal_line.last()?,
    })
}
