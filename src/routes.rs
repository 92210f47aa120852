use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::pipeline::{ForecastReport, SummaryPipeline};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SummaryPipeline>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

// Route handlers
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Always responds 200 with the uniform six-field report; the pipeline
/// converts every stage failure into that shape itself.
pub async fn summarize_forecast(
    State(state): State<AppState>,
    Query(params): Query<SummaryQuery>,
) -> Json<ForecastReport> {
    Json(state.pipeline.run(params.lat, params.lon).await)
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/summary", get(summarize_forecast))
        .with_state(state)
}
