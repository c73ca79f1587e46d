//! Daily OHLCV bars as delivered by a series provider.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// A single trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ]
    }
}

/// Chronologically ordered bars for one ticker.
///
/// Construction through [`BarSeries::new`] guarantees strictly increasing dates
/// and finite, non-negative numeric fields, so indicator code never has to
/// re-validate its input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    symbol: String,
    name: Option<String>,
    bars: Vec<Bar>,
}

impl BarSeries {
    pub fn new(
        symbol: impl Into<String>,
        name: Option<String>,
        bars: Vec<Bar>,
    ) -> Result<Self, ProviderError> {
        for (i, bar) in bars.iter().enumerate() {
            for (field, value) in bar.fields() {
                if !value.is_finite() || value < 0.0 {
                    return Err(ProviderError::InvalidSeries(format!(
                        "{} on {} is not a finite non-negative number: {}",
                        field, bar.date, value
                    )));
                }
            }
            if i > 0 && bars[i - 1].date >= bar.date {
                return Err(ProviderError::InvalidSeries(format!(
                    "dates must be strictly increasing: {} follows {}",
                    bar.date,
                    bars[i - 1].date
                )));
            }
        }

        Ok(Self {
            symbol: symbol.into(),
            name,
            bars,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Long company name, when the provider supplies one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        closes(&self.bars)
    }
}

/// Closing prices in bar order.
pub fn closes(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}
