//! Fibonacci retracement levels over the recent closing range

use crate::models::{Bar, FibonacciLevels};

/// About six months of trading days.
pub const FIBONACCI_LOOKBACK: usize = 126;

/// Levels from the high and low close of the trailing `lookback` bars (all
/// bars when fewer are available). `None` for an empty slice.
pub fn calculate_fibonacci_levels(bars: &[Bar], lookback: usize) -> Option<FibonacciLevels> {
    let recent = &bars[bars.len().saturating_sub(lookback)..];
    let first = recent.first()?.close;
    let (high, low) = recent
        .iter()
        .fold((first, first), |(hi, lo), b| (hi.max(b.close), lo.min(b.close)));
    Some(FibonacciLevels::from_range(high, low))
}

pub fn calculate_fibonacci_levels_default(bars: &[Bar]) -> Option<FibonacciLevels> {
    calculate_fibonacci_levels(bars, FIBONACCI_LOOKBACK)
}
