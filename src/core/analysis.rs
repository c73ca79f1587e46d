//! Request-level orchestration: fetch, compute, decide, forecast.
//!
//! The service owns no mutable state. Every call fetches a fresh series from
//! the injected provider and builds its results from pure functions, so calls
//! for different tickers can run concurrently.

use std::sync::Arc;
use tracing::{info, warn};

use crate::error::AnalysisError;
use crate::forecast::{self, ProjectionError, MAX_FORECAST_DAYS};
use crate::metrics::Metrics;
use crate::models::{AnalysisReport, BarSeries, ForecastPoint, IndicatorSet};
use crate::services::market_data::SeriesProvider;
use crate::signals::{build_log, SignalEngine};

#[derive(Clone)]
pub struct AnalysisService {
    provider: Arc<dyn SeriesProvider>,
    metrics: Option<Arc<Metrics>>,
}

impl AnalysisService {
    pub fn new(provider: Arc<dyn SeriesProvider>) -> Self {
        Self {
            provider,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Indicators, decision and readout log for `ticker`.
    pub async fn analyze(&self, ticker: &str) -> Result<AnalysisReport, AnalysisError> {
        let ticker = normalize_ticker(ticker)?;
        let series = self.fetch(&ticker).await?;

        let (indicators, decision) =
            SignalEngine::evaluate(&series).ok_or_else(|| AnalysisError::DataUnavailable {
                ticker: ticker.clone(),
            })?;
        ensure_finite(&indicators)?;

        let full_name = series.name().unwrap_or("N/A").to_string();
        let log = build_log(&ticker, &full_name, &indicators, &decision);

        if let Some(metrics) = &self.metrics {
            metrics
                .analysis_decisions_total
                .with_label_values(&[decision.label.as_str()])
                .inc();
        }
        info!(
            ticker = %ticker,
            bars = series.len(),
            decision = %decision.label,
            "Analysis complete"
        );

        Ok(AnalysisReport {
            ticker,
            full_name,
            indicators,
            decision,
            log,
        })
    }

    /// Linear-trend projection of the close over the next `days` business days.
    ///
    /// `days` must lie in `1..=MAX_FORECAST_DAYS`; anything else is rejected
    /// before the provider is called.
    pub async fn forecast(
        &self,
        ticker: &str,
        days: i64,
    ) -> Result<Vec<ForecastPoint>, AnalysisError> {
        let ticker = normalize_ticker(ticker)?;
        let horizon = usize::try_from(days)
            .ok()
            .filter(|d| (1..=MAX_FORECAST_DAYS).contains(d))
            .ok_or_else(|| {
                AnalysisError::MissingParameter(format!(
                    "Parameter 'days' must be an integer between 1 and {}, got {}",
                    MAX_FORECAST_DAYS, days
                ))
            })?;

        let series = self.fetch(&ticker).await?;
        let points = forecast::project(&series, horizon).map_err(|e| match e {
            ProjectionError::EmptySeries => AnalysisError::DataUnavailable {
                ticker: ticker.clone(),
            },
            ProjectionError::CalendarOverflow(_) => AnalysisError::ComputationError(e.to_string()),
        })?;

        if let Some(bad) = points.iter().find(|p| !p.predicted_close.is_finite()) {
            return Err(AnalysisError::ComputationError(format!(
                "non-finite prediction for {}",
                bad.date
            )));
        }

        if let Some(metrics) = &self.metrics {
            metrics.forecasts_total.inc();
        }
        info!(ticker = %ticker, bars = series.len(), days = horizon, "Forecast complete");
        Ok(points)
    }

    async fn fetch(&self, ticker: &str) -> Result<BarSeries, AnalysisError> {
        match self.provider.fetch(ticker).await {
            Ok(series) if series.is_empty() => Err(AnalysisError::DataUnavailable {
                ticker: ticker.to_string(),
            }),
            Ok(series) => Ok(series),
            Err(e) => {
                warn!(ticker, error = %e, "Market data fetch failed");
                if let Some(metrics) = &self.metrics {
                    metrics.provider_errors_total.inc();
                }
                Err(e.into())
            }
        }
    }
}

/// Trimmed, upper-case ticker; rejects blanks before any work is done.
pub fn normalize_ticker(raw: &str) -> Result<String, AnalysisError> {
    let ticker = raw.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(AnalysisError::MissingParameter(
            "Ticker symbol is required".to_string(),
        ));
    }
    Ok(ticker)
}

fn ensure_finite(set: &IndicatorSet) -> Result<(), AnalysisError> {
    let readings = [
        ("last close", Some(set.last_close)),
        ("SMA50", set.sma50),
        ("SMA200", set.sma200),
        ("EMA50", set.ema50),
        ("EMA200", set.ema200),
        ("RSI", set.rsi),
        ("MACD", set.macd),
        ("signal line", set.signal_line),
        ("upper band", set.upper_band),
        ("lower band", set.lower_band),
    ];
    for (name, value) in readings {
        if value.is_some_and(|v| !v.is_finite()) {
            return Err(AnalysisError::ComputationError(format!(
                "{} is not a finite number",
                name
            )));
        }
    }
    Ok(())
}
