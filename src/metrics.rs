//! Prometheus metrics for the HTTP API and the analysis pipeline.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub analysis_decisions_total: IntCounterVec,
    pub forecasts_total: IntCounter,
    pub provider_errors_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served")?;
        let analysis_decisions_total = IntCounterVec::new(
            Opts::new("analysis_decisions_total", "Decisions produced, by label"),
            &["decision"],
        )?;
        let forecasts_total = IntCounter::new("forecasts_total", "Forecasts produced")?;
        let provider_errors_total = IntCounter::new(
            "provider_errors_total",
            "Market data fetches that ended in an error",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(analysis_decisions_total.clone()))?;
        registry.register(Box::new(forecasts_total.clone()))?;
        registry.register(Box::new(provider_errors_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            analysis_decisions_total,
            forecasts_total,
            provider_errors_total,
        })
    }

    /// Text exposition format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
