//! Volume spike detection

use crate::common::math;
use crate::models::Bar;

pub const VOLUME_MA_PERIOD: usize = 50;
pub const VOLUME_SPIKE_MULTIPLIER: f64 = 1.5;

/// Whether the latest volume exceeds `multiplier` times its trailing mean.
///
/// The mean window ends at (and includes) the latest bar. With fewer than
/// `period` bars there is no mean and no spike.
pub fn detect_volume_spike(bars: &[Bar], period: usize, multiplier: f64) -> bool {
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();
    let Some(average) = math::latest(&math::rolling_mean(&volumes, period)) else {
        return false;
    };
    volumes
        .last()
        .is_some_and(|latest| *latest > average * multiplier)
}

pub fn detect_volume_spike_default(bars: &[Bar]) -> bool {
    detect_volume_spike(bars, VOLUME_MA_PERIOD, VOLUME_SPIKE_MULTIPLIER)
}
