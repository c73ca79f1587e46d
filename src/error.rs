use std::time::Duration;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Errors raised by a [`SeriesProvider`](crate::services::market_data::SeriesProvider).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The ticker is unknown to the data source or it returned no bars.
    #[error("no market data found for {ticker}")]
    NotFound { ticker: String },

    /// Transport failure (connect, timeout, body decoding).
    #[error("market data request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The data source answered with an error status or error object.
    #[error("market data API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Websocket transport failure (handshake, IO, closed connection).
    #[error("market data stream failed: {0}")]
    Stream(#[from] tungstenite::Error),

    /// The streaming feed sent something we could not interpret, or reported
    /// an error for the session.
    #[error("market data protocol error: {0}")]
    Protocol(String),

    /// No complete answer arrived within the configured request timeout.
    #[error("market data request timed out after {0:?}")]
    Timeout(Duration),

    /// The returned rows violate the bar series invariants.
    #[error("invalid bar series: {0}")]
    InvalidSeries(String),
}

impl ProviderError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Request(e) => {
                e.is_timeout()
                    || e.is_connect()
                    || e.status().is_some_and(|s| s.is_server_error())
            }
            ProviderError::Api { status, .. } => *status == 429 || *status >= 500,
            ProviderError::Stream(e) => match e {
                tungstenite::Error::Io(_) | tungstenite::Error::ConnectionClosed => true,
                tungstenite::Error::Http(response) => response.status().is_server_error(),
                _ => false,
            },
            ProviderError::Timeout(_) => true,
            ProviderError::NotFound { .. }
            | ProviderError::Protocol(_)
            | ProviderError::InvalidSeries(_) => false,
        }
    }
}

/// Errors surfaced by [`AnalysisService`](crate::core::analysis::AnalysisService).
///
/// Insufficient history is deliberately absent: indicators without enough bars
/// are reported as undefined values instead of failing the request.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A request parameter is absent or out of range. Raised before any fetch.
    #[error("{0}")]
    MissingParameter(String),

    /// The provider returned no usable series for the ticker.
    #[error("no data available for {ticker}")]
    DataUnavailable { ticker: String },

    /// A computation produced a non-finite result where a number is required.
    #[error("computation error: {0}")]
    ComputationError(String),

    #[error(transparent)]
    Provider(ProviderError),
}

impl From<ProviderError> for AnalysisError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound { ticker } => AnalysisError::DataUnavailable { ticker },
            other => AnalysisError::Provider(other),
        }
    }
}
