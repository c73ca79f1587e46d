//! Exchange routing across market data providers.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::ProviderError;
use crate::models::BarSeries;
use crate::services::market_data::SeriesProvider;
use crate::services::tradingview::TradingViewSeriesProvider;
use crate::services::yahoo::YahooSeriesProvider;

/// Share-class suffixes of Colombo Stock Exchange codes (`JKH.N0000`).
const CSE_CLASSES: [char; 5] = ['N', 'X', 'R', 'P', 'W'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    Us,
    Colombo,
}

impl Exchange {
    /// Colombo for `CSELK:`-prefixed tickers and CSE codes such as
    /// `JKH.N0000`; US otherwise.
    pub fn for_ticker(ticker: &str) -> Self {
        let ticker = ticker.trim().to_uppercase();
        if let Some((prefix, _)) = ticker.split_once(':') {
            return if prefix == "CSELK" {
                Exchange::Colombo
            } else {
                Exchange::Us
            };
        }
        match ticker.rsplit_once('.') {
            Some((code, class)) if !code.is_empty() && is_cse_class(class) => Exchange::Colombo,
            _ => Exchange::Us,
        }
    }
}

fn is_cse_class(class: &str) -> bool {
    let mut chars = class.chars();
    let Some(letter) = chars.next() else {
        return false;
    };
    let digits: Vec<char> = chars.collect();
    CSE_CLASSES.contains(&letter) && digits.len() == 4 && digits.iter().all(char::is_ascii_digit)
}

/// Sends each ticker to the provider for its exchange.
pub struct ExchangeRouter {
    us: Arc<dyn SeriesProvider>,
    colombo: Arc<dyn SeriesProvider>,
}

impl ExchangeRouter {
    pub fn new(us: Arc<dyn SeriesProvider>, colombo: Arc<dyn SeriesProvider>) -> Self {
        Self { us, colombo }
    }

    /// Yahoo for US listings, TradingView for Colombo.
    pub fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        Ok(Self::new(
            Arc::new(YahooSeriesProvider::new(&config.provider)?),
            Arc::new(TradingViewSeriesProvider::new(&config.tradingview)),
        ))
    }
}

#[async_trait]
impl SeriesProvider for ExchangeRouter {
    async fn fetch(&self, ticker: &str) -> Result<BarSeries, ProviderError> {
        match Exchange::for_ticker(ticker) {
            Exchange::Us => self.us.fetch(ticker).await,
            Exchange::Colombo => self.colombo.fetch(ticker).await,
        }
    }
}
