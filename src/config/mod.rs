//! Environment-driven configuration.
//!
//! Values are read once at startup (after `.env` is loaded by the binary).
//! Parsing goes through [`AppConfig::from_lookup`] so tests can supply a map
//! instead of touching the process environment.

use std::env;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:4200";
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_HISTORY_RANGE: &str = "2y";
pub const DEFAULT_MAX_RETRIES: usize = 3;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_TRADINGVIEW_WS_URL: &str = "wss://data.tradingview.com/socket.io/websocket";
pub const DEFAULT_COLOMBO_EXCHANGE: &str = "CSELK";
pub const DEFAULT_COLOMBO_BARS: usize = 500;
/// Sri Lanka Standard Time, UTC+05:30.
pub const COLOMBO_UTC_OFFSET_SECS: i64 = 19_800;

/// Deployment environment name ("production", "sandbox", ...).
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Settings for the HTTP market data provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub base_url: String,
    /// History window requested per fetch, in the provider's range syntax.
    pub range: String,
    pub max_retries: usize,
    pub retry_min_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            range: DEFAULT_HISTORY_RANGE.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_min_delay: Duration::from_millis(500),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Settings for the TradingView streaming feed used for Colombo listings.
#[derive(Debug, Clone, PartialEq)]
pub struct TradingViewConfig {
    pub ws_url: String,
    /// TradingView exchange prefix the symbols are resolved under.
    pub exchange: String,
    /// Daily bars requested per series.
    pub bars: usize,
    /// Exchange offset from UTC, used to date the bars.
    pub utc_offset_secs: i64,
    pub max_retries: usize,
    pub retry_min_delay: Duration,
    pub request_timeout: Duration,
}

impl Default for TradingViewConfig {
    fn default() -> Self {
        Self {
            ws_url: DEFAULT_TRADINGVIEW_WS_URL.to_string(),
            exchange: DEFAULT_COLOMBO_EXCHANGE.to_string(),
            bars: DEFAULT_COLOMBO_BARS,
            utc_offset_secs: COLOMBO_UTC_OFFSET_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_min_delay: Duration::from_millis(500),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: String,
    pub port: u16,
    /// CORS origins allowed to call the HTTP API.
    pub allowed_origins: Vec<String>,
    pub provider: ProviderConfig,
    pub tradingview: TradingViewConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ProviderConfig::default();
        let tv_defaults = TradingViewConfig::default();
        let max_retries = parse_or(&lookup, "PROVIDER_MAX_RETRIES", DEFAULT_MAX_RETRIES);
        let request_timeout = Duration::from_secs(parse_or(
            &lookup,
            "PROVIDER_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        ));

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            environment: lookup("APP_ENV").unwrap_or_else(|| "sandbox".to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            allowed_origins,
            provider: ProviderConfig {
                base_url: lookup("YAHOO_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.base_url),
                range: lookup("HISTORY_RANGE").unwrap_or(defaults.range),
                max_retries,
                retry_min_delay: defaults.retry_min_delay,
                request_timeout,
            },
            tradingview: TradingViewConfig {
                ws_url: lookup("TRADINGVIEW_WS_URL").unwrap_or(tv_defaults.ws_url),
                exchange: lookup("COLOMBO_EXCHANGE")
                    .map(|e| e.trim().to_uppercase())
                    .unwrap_or(tv_defaults.exchange),
                bars: parse_or(&lookup, "COLOMBO_HISTORY_BARS", DEFAULT_COLOMBO_BARS),
                utc_offset_secs: tv_defaults.utc_offset_secs,
                max_retries,
                retry_min_delay: tv_defaults.retry_min_delay,
                request_timeout,
            },
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "Ignoring malformed config value");
            default
        }),
        None => default,
    }
}
