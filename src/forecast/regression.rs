use serde::{Deserialize, Serialize};

use crate::common::math;

/// Ordinary least squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Fit `values[i]` against `x = i`. `None` for an empty slice.
    ///
    /// A single observation has no spread in `x`; the line is then flat at
    /// that value.
    pub fn fit(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len();
        let x_mean = (n - 1) as f64 / 2.0;
        let y_mean = math::mean(values);

        let (sxy, sxx) = values
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(sxy, sxx), (i, y)| {
                let dx = i as f64 - x_mean;
                (sxy + dx * (y - y_mean), sxx + dx * dx)
            });

        let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };
        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
