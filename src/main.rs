use axum::Router;
use chrono::Duration;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod ai;
mod config;
mod forecast;
mod pipeline;
mod routes;
mod utils;

use ai::SummaryClient;
use config::Config;
use forecast::cache::{ForecastCache, SystemClock};
use forecast::nws::NwsClient;
use pipeline::SummaryPipeline;
use routes::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecast_summary_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env()?);

    // One cache instance shared by every request
    let cache = Arc::new(ForecastCache::new(
        Duration::seconds(config.cache_ttl_secs),
        config.cache_capacity,
        Arc::new(SystemClock),
    ));

    // Initialize upstream clients
    let weather_client = Arc::new(NwsClient::new((*config).clone()));
    let ai_client = Arc::new(SummaryClient::new((*config).clone()));

    let pipeline = Arc::new(SummaryPipeline::new(
        Arc::clone(&config),
        cache,
        weather_client,
        ai_client,
    ));

    // Create application state
    let state = AppState { pipeline };

    let app: Router = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!("Server starting on http://0.0.0.0:8080");

    axum::serve(listener, app).await?;

    Ok(())
}
