//! Technical-analysis signal engine for stock tickers.
//!
//! Daily bars come from a [`services::market_data::SeriesProvider`], indicators are
//! computed by pure functions in [`indicators`], a rule cascade in [`signals`] turns
//! the latest readings into a recommendation, and [`forecast`] extrapolates a
//! linear price trend over business days.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod forecast;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{AnalysisError, ProviderError};
