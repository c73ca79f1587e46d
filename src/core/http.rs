//! HTTP endpoint server using Axum

use axum::{
    extract::{Query, Request, State},
    http::{HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::config::AppConfig;
use crate::core::analysis::AnalysisService;
use crate::error::AnalysisError;
use crate::metrics::Metrics;
use crate::models::{AnalysisReport, ForecastPoint};
use crate::services::ExchangeRouter;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub service: AnalysisService,
    /// Empty means any origin.
    pub allowed_origins: Arc<Vec<String>>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

impl AnalysisError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AnalysisError::DataUnavailable { .. } => StatusCode::NOT_FOUND,
            AnalysisError::Provider(_) => StatusCode::BAD_GATEWAY,
            AnalysisError::ComputationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "stock-signal-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct AnalyzeQuery {
    ticker: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PredictQuery {
    ticker: Option<String>,
    days: Option<String>,
}

async fn analyze(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeQuery>,
) -> Result<Json<AnalysisReport>, AnalysisError> {
    let ticker = params.ticker.unwrap_or_default();
    let report = state.service.analyze(&ticker).await?;
    Ok(Json(report))
}

async fn predict(
    State(state): State<AppState>,
    Query(params): Query<PredictQuery>,
) -> Result<Json<Vec<ForecastPoint>>, AnalysisError> {
    let missing = || {
        AnalysisError::MissingParameter(
            "Missing required parameters 'ticker' or 'days'".to_string(),
        )
    };
    let ticker = params
        .ticker
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(missing)?;
    let days: i64 = params
        .days
        .and_then(|d| d.trim().parse().ok())
        .ok_or_else(missing)?;

    let points = state.service.forecast(&ticker, days).await?;
    Ok(Json(points))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
        .allow_credentials(true)
}

pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.allowed_origins);
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/analyze", get(analyze))
        .route("/api/predict", get(predict))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(cors),
        )
        .with_state(state)
}

pub async fn start_server(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let provider = Arc::new(ExchangeRouter::from_config(config)?);
    let service = AnalysisService::new(provider).with_metrics(metrics.clone());

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        service,
        allowed_origins: Arc::new(config.allowed_origins.clone()),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
