//! TradingView chart websocket provider implementation

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::DateTime;
use futures_util::{SinkExt, StreamExt};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::{header::ORIGIN, HeaderValue};
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, warn};

use super::protocol::{self, FeedBar, SessionEvent};
use crate::config::TradingViewConfig;
use crate::error::ProviderError;
use crate::models::{Bar, BarSeries};
use crate::services::market_data::{merge_daily, SeriesProvider};

const TRADINGVIEW_ORIGIN: &str = "https://data.tradingview.com";

/// Daily history for one exchange over TradingView's public chart feed.
///
/// Each fetch opens its own websocket, requests a single series and closes
/// the connection once the series is complete.
pub struct TradingViewSeriesProvider {
    ws_url: String,
    exchange: String,
    bars: usize,
    utc_offset_secs: i64,
    max_retries: usize,
    retry_min_delay: Duration,
    request_timeout: Duration,
}

impl TradingViewSeriesProvider {
    pub fn new(config: &TradingViewConfig) -> Self {
        Self {
            ws_url: config.ws_url.clone(),
            exchange: config.exchange.clone(),
            bars: config.bars,
            utc_offset_secs: config.utc_offset_secs,
            max_retries: config.max_retries,
            retry_min_delay: config.retry_min_delay,
            request_timeout: config.request_timeout,
        }
    }

    /// `EXCHANGE:SYMBOL` for a ticker given with or without the prefix.
    pub fn qualified_symbol(&self, ticker: &str) -> String {
        let bare = ticker.split_once(':').map_or(ticker, |(_, symbol)| symbol);
        format!("{}:{}", self.exchange, bare)
    }

    async fn fetch_once(&self, ticker: &str) -> Result<BarSeries, ProviderError> {
        tokio::time::timeout(self.request_timeout, self.read_series(ticker))
            .await
            .map_err(|_| ProviderError::Timeout(self.request_timeout))?
    }

    async fn read_series(&self, ticker: &str) -> Result<BarSeries, ProviderError> {
        let symbol = self.qualified_symbol(ticker);
        let mut request = self.ws_url.as_str().into_client_request()?;
        request
            .headers_mut()
            .insert(ORIGIN, HeaderValue::from_static(TRADINGVIEW_ORIGIN));

        let (stream, _response) = connect_async(request).await?;
        let (mut write, mut read) = stream.split();

        for command in protocol::series_request(&session_id(), &symbol, self.bars) {
            write.send(Message::Text(command)).await?;
        }

        let mut name = None;
        let mut rows: Vec<FeedBar> = Vec::new();
        while let Some(message) = read.next().await {
            let text = match message? {
                Message::Text(text) => text,
                Message::Ping(data) => {
                    write.send(Message::Pong(data)).await?;
                    continue;
                }
                Message::Close(_) => break,
                _ => continue,
            };

            for payload in protocol::decode_frames(&text)? {
                match protocol::classify(payload)? {
                    SessionEvent::Heartbeat(beat) => {
                        write.send(Message::Text(protocol::encode_frame(&beat))).await?;
                    }
                    SessionEvent::SymbolResolved { description } => name = description,
                    SessionEvent::Bars(bars) => rows.extend(bars),
                    SessionEvent::Completed => {
                        let _ = write.send(Message::Close(None)).await;
                        debug!(ticker, symbol = %symbol, rows = rows.len(), "Series completed");
                        return self.to_series(ticker, name, rows);
                    }
                    SessionEvent::SymbolError(detail) => {
                        debug!(ticker, symbol = %symbol, detail = %detail, "Symbol not resolved");
                        return Err(ProviderError::NotFound {
                            ticker: ticker.to_string(),
                        });
                    }
                    SessionEvent::Error(detail) => return Err(ProviderError::Protocol(detail)),
                    SessionEvent::Other => {}
                }
            }
        }

        Err(ProviderError::Protocol(format!(
            "connection closed before {} completed",
            symbol
        )))
    }

    fn to_series(
        &self,
        ticker: &str,
        name: Option<String>,
        mut rows: Vec<FeedBar>,
    ) -> Result<BarSeries, ProviderError> {
        rows.sort_by_key(|r| r.timestamp);
        let bars = merge_daily(rows.into_iter().filter_map(|r| {
            let date = DateTime::from_timestamp(r.timestamp + self.utc_offset_secs, 0)?;
            Some(Bar::new(date.date_naive(), r.open, r.high, r.low, r.close, r.volume))
        }));

        if bars.is_empty() {
            return Err(ProviderError::NotFound {
                ticker: ticker.to_string(),
            });
        }
        BarSeries::new(ticker, name, bars)
    }
}

/// `cs_` plus twelve lowercase letters, unique enough per connection.
fn session_id() -> String {
    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let suffix: String = (0..12)
        .map(|_| {
            let letter = (b'a' + (seed % 26) as u8) as char;
            seed /= 26;
            letter
        })
        .collect();
    format!("cs_{}", suffix)
}

#[async_trait]
impl SeriesProvider for TradingViewSeriesProvider {
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
                    "Retrying market data stream"
                );
            })
            .await
    }
}
