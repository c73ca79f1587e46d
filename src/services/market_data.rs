//! Market data provider interface.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::ProviderError;
use crate::models::{Bar, BarSeries};

/// Source of daily bar history for a ticker.
///
/// Implementations validate rows into a [`BarSeries`] before returning, and
/// report an unknown or empty ticker as [`ProviderError::NotFound`].
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    async fn fetch(&self, ticker: &str) -> Result<BarSeries, ProviderError>;
}

/// Serves fixed series keyed by upper-case ticker.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeriesProvider {
    series: HashMap<String, BarSeries>,
}

impl InMemorySeriesProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series: BarSeries) -> Self {
        self.insert(series);
        self
    }

    pub fn insert(&mut self, series: BarSeries) {
        self.series.insert(series.symbol().to_uppercase(), series);
    }
}

#[async_trait]
impl SeriesProvider for InMemorySeriesProvider {
    async fn fetch(&self, ticker: &str) -> Result<BarSeries, ProviderError> {
        self.series
            .get(&ticker.to_uppercase())
            .filter(|s| !s.is_empty())
            .cloned()
            .ok_or_else(|| ProviderError::NotFound {
                ticker: ticker.to_string(),
            })
    }
}

/// Collapse chronologically ordered rows to one bar per date.
///
/// Feeds sometimes repeat the in-progress session under the same date; the
/// later row wins.
pub(crate) fn merge_daily(rows: impl IntoIterator<Item = Bar>) -> Vec<Bar> {
    let mut bars: Vec<Bar> = Vec::new();
    for bar in rows {
        match bars.last_mut() {
            Some(prev) if prev.date == bar.date => *prev = bar,
            _ => bars.push(bar),
        }
    }
    bars
}
