//! TradingView chart feed provider (Colombo Stock Exchange listings)

pub mod protocol;
pub mod provider;

pub use provider::TradingViewSeriesProvider;
