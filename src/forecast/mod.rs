//! Naive linear-trend price forecast.
//!
//! Closing prices are regressed on the zero-based trading-day index and the
//! fitted line is extended over the following business days.

pub mod calendar;
pub mod regression;

pub use calendar::*;
pub use regression::*;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{BarSeries, ForecastPoint};

/// Longest horizon accepted for a projection, in business days.
pub const MAX_FORECAST_DAYS: usize = 365;

#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("cannot project an empty series")]
    EmptySeries,

    #[error("no business day follows {0} within the supported calendar")]
    CalendarOverflow(NaiveDate),
}

/// Project `days_ahead` closes past the end of `series`.
///
/// Predicted values are not checked for finiteness here; the caller decides
/// how to treat them.
pub fn project(
    series: &BarSeries,
    days_ahead: usize,
) -> Result<Vec<ForecastPoint>, ProjectionError> {
    let last_date = series.last().ok_or(ProjectionError::EmptySeries)?.date;
    let trend = LinearTrend::fit(&series.closes()).ok_or(ProjectionError::EmptySeries)?;
    let dates = business_days_after(last_date, days_ahead)
        .ok_or(ProjectionError::CalendarOverflow(last_date))?;
    let start = series.len();

    let points = dates
        .into_iter()
        .enumerate()
        .map(|(offset, date)| ForecastPoint {
            date,
            predicted_close: trend.predict((start + offset) as f64),
        })
        .collect();

    Ok(points)
}
