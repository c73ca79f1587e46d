//! Rolling-window and smoothing primitives over plain `f64` slices.
//!
//! Series are returned time-aligned with their input: entry `i` describes the
//! window ending at input index `i`, and `None` marks positions where the
//! window is not yet full.

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(var.sqrt())
}

/// Apply `f` to every trailing window of `window` values.
pub fn rolling<F>(values: &[f64], window: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> Option<f64>,
{
    if window == 0 {
        return vec![None; values.len()];
    }
    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                f(&values[i + 1 - window..=i])
            }
        })
        .collect()
}

/// Rolling arithmetic mean.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, |w| Some(mean(w)))
}

/// Rolling sample standard deviation.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, sample_std)
}

/// EMA smoothing factor `2 / (period + 1)`.
pub fn smoothing_factor(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One step of the EMA recurrence.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    (value - previous) * smoothing_factor(period) + previous
}

/// Latest entry of an aligned series.
pub fn latest(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten()
}

/// Element-wise combination of two aligned series; `None` wherever either is.
pub fn zip_with<F>(a: &[Option<f64>], b: &[Option<f64>], f: F) -> Vec<Option<f64>>
where
    F: Fn(f64, f64) -> f64,
{
    a.iter()
        .zip(b)
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(f(*x, *y)),
            _ => None,
        })
        .collect()
}
