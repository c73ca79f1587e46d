//! Yahoo Finance market data provider implementation

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use super::response::ChartResponse;
use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::models::BarSeries;
use crate::services::market_data::SeriesProvider;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

pub struct YahooSeriesProvider {
    client: Client,
    base_url: String,
    range: String,
    max_retries: usize,
    retry_min_delay: Duration,
}

impl YahooSeriesProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_client(config, client))
    }

    /// Use a preconfigured client (tests point `config.base_url` at a mock).
    pub fn with_client(config: &ProviderConfig, client: Client) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            range: config.range.clone(),
            max_retries: config.max_retries,
            retry_min_delay: config.retry_min_delay,
        }
    }

    async fn fetch_once(&self, ticker: &str) -> Result<BarSeries, ProviderError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, ticker);
        let response = self
            .client
            .get(&url)
            .query(&[("range", self.range.as_str()), ("interval", "1d")])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound {
                ticker: ticker.to_string(),
            });
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChartResponse = response.json().await?;
        if let Some(err) = body.chart.error {
            return Err(if err.code.eq_ignore_ascii_case("not found") {
                ProviderError::NotFound {
                    ticker: ticker.to_string(),
                }
            } else {
                ProviderError::Api {
                    status: status.as_u16(),
                    message: err.description.unwrap_or(err.code),
                }
            });
        }

        let result = body
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| ProviderError::NotFound {
                ticker: ticker.to_string(),
            })?;

        let series = result.into_series(ticker)?;
        debug!(ticker, bars = series.len(), "Fetched daily bars");
        Ok(series)
    }
}

#[async_trait]
impl SeriesProvider for YahooSeriesProvider {
    async fn fetch(&self, ticker: &str) -> Result<BarSeries, ProviderError> {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.retry_min_delay)
            .with_max_times(self.max_retries);

        (|| self.fetch_once(ticker))
            .retry(backoff)
            .sleep(tokio::time::sleep)
            .when(ProviderError::is_transient)
            .notify(|err: &ProviderError, after: Duration| {
                warn!(
                    ticker,
                    error = %err,
                    retry_in_ms = after.as_millis() as u64,
                    "Retrying market data fetch"
                );
            })
            .await
    }
}
