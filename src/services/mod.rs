//! Market data sources

pub mod market_data;
pub mod router;
pub mod tradingview;
pub mod yahoo;

pub use market_data::*;
pub use router::{Exchange, ExchangeRouter};
pub use tradingview::TradingViewSeriesProvider;
pub use yahoo::YahooSeriesProvider;
