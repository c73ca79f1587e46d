//! Stock signal API server
//!
//! Serves `/api/analyze` and `/api/predict` over Yahoo Finance (US) and
//! TradingView (Colombo) daily history, plus `/health` and `/metrics`.
//! Stateless; safe to run several replicas.

use dotenvy::dotenv;
use stock_signals::config::AppConfig;
use stock_signals::core::http::start_server;
use stock_signals::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let config = AppConfig::from_env();
    logging::init_logging(&config.environment);

    info!(environment = %config.environment, "Starting stock signal API server");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);
    info!(origins = ?config.allowed_origins, "CORS origins");

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(&config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
