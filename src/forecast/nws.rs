use super::types::{Coordinate, ForecastDocument, PointsResponse};
use crate::config::Config;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Unavailable(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed metadata: {0}")]
    Malformed(String),
}

pub struct NwsClient {
    client: Client,
    config: Config,
}

impl NwsClient {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Two sequential requests: resolve the coordinate to a forecast URL via
    /// the points endpoint, then fetch the forecast payload from that URL.
    /// Every error variant here is absorbed into absence at the cache seam.
    pub async fn fetch(&self, coordinate: &Coordinate) -> Result<ForecastDocument, FetchError> {
        let points_url = format!(
            "{}/points/{},{}",
            self.config.nws_base_url, coordinate.latitude, coordinate.longitude
        );

        tracing::info!(
            "Fetching point metadata for lat: {}, lon: {}",
            coordinate.latitude,
            coordinate.longitude
        );
        let response = self.client.get(&points_url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        let metadata: PointsResponse = response.json().await?;

        let forecast_url = metadata
            .properties
            .forecast
            .ok_or_else(|| FetchError::Malformed("no forecast URL in point metadata".to_string()))?;

        tracing::info!("Fetching forecast data from {}", forecast_url);
        let response = self.client.get(&forecast_url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        let raw: Value = response.json().await?;

        Ok(ForecastDocument::new(raw))
    }
}
