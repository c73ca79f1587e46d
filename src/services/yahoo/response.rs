//! Wire format of `GET /v8/finance/chart/{ticker}`.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use crate::error::ProviderError;
use crate::models::{Bar, BarSeries};
use crate::services::market_data::merge_daily;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: String,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    /// Exchange offset from UTC in seconds.
    #[serde(default)]
    pub gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

/// Column-oriented OHLCV; any cell may be null on halted days.
#[derive(Debug, Default, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

fn cell(column: &[Option<f64>], i: usize) -> Option<f64> {
    column.get(i).copied().flatten()
}

fn exchange_date(timestamp: i64, gmtoffset: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp + gmtoffset, 0).map(|dt| dt.date_naive())
}

impl ChartResult {
    /// Convert to a validated series.
    ///
    /// Rows with a missing cell are dropped and same-date rows are merged.
    pub fn into_series(self, ticker: &str) -> Result<BarSeries, ProviderError> {
        let quote = self.indicators.quote.into_iter().next().unwrap_or_default();
        let gmtoffset = self.meta.gmtoffset;

        let rows = self.timestamp.iter().enumerate().filter_map(|(i, &ts)| {
            Some(Bar::new(
                exchange_date(ts, gmtoffset)?,
                cell(&quote.open, i)?,
                cell(&quote.high, i)?,
                cell(&quote.low, i)?,
                cell(&quote.close, i)?,
                cell(&quote.volume, i)?,
            ))
        });
        let bars = merge_daily(rows);

        if bars.is_empty() {
            return Err(ProviderError::NotFound {
                ticker: ticker.to_string(),
            });
        }

        let name = self.meta.long_name.or(self.meta.short_name);
        BarSeries::new(self.meta.symbol, name, bars)
    }
}
