//! Yahoo Finance chart API provider

pub mod provider;
pub mod response;

pub use provider::YahooSeriesProvider;
