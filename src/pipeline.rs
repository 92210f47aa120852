use crate::ai::{AiError, SummaryClient};
use crate::config::Config;
use crate::forecast::cache::ForecastCache;
use crate::forecast::nws::NwsClient;
use crate::forecast::parse::{build_paragraph, filter_periods, merge_detailed, merge_short};
use crate::forecast::types::{Coordinate, ParseError};
use crate::utils::validate_coordinates;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

const FULL_SUMMARY_FRAMING: &str = "You are a helpful assistant summarizing weather data.";
const DETAILED_SUMMARY_FRAMING: &str =
    "You are a helpful assistant summarizing weather forecasts in detail.";
const SHORT_SUMMARY_FRAMING: &str =
    "You are a helpful assistant summarizing short weather forecasts.";

const SUMMARY_PLACEHOLDER: &str = "Unable to generate summary.";
const INVALID_INPUT_PLACEHOLDER: &str = "Unable to generate summary due to invalid inputs.";
const NO_DATA_MESSAGE: &str = "No forecast data retrieved.";
const NO_INFORMATION_MESSAGE: &str = "No weather information available to summarize.";

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Summarization(#[from] AiError),
    #[error("failed to serialize forecast payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The uniform six-field result of one request cycle. Failure shapes fill
/// the first two fields with a message and placeholder and leave the rest
/// empty, so consumers always see the same structure.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub raw_data: String,
    pub summary: String,
    pub merged_detailed_forecasts: String,
    pub merged_detailed_summary: String,
    pub merged_short_forecasts: String,
    pub merged_short_summary: String,
}

impl ForecastReport {
    fn failure(message: String, summary: &str) -> Self {
        Self {
            raw_data: message,
            summary: summary.to_string(),
            merged_detailed_forecasts: String::new(),
            merged_detailed_summary: String::new(),
            merged_short_forecasts: String::new(),
            merged_short_summary: String::new(),
        }
    }
}

pub struct SummaryPipeline {
    config: Arc<Config>,
    cache: Arc<ForecastCache>,
    weather_client: Arc<NwsClient>,
    ai_client: Arc<SummaryClient>,
}

impl SummaryPipeline {
    pub fn new(
        config: Arc<Config>,
        cache: Arc<ForecastCache>,
        weather_client: Arc<NwsClient>,
        ai_client: Arc<SummaryClient>,
    ) -> Self {
        Self {
            config,
            cache,
            weather_client,
            ai_client,
        }
    }

    /// Runs the full request cycle for one coordinate. Never fails: stage
    /// errors are folded into the report, with any propagated error caught
    /// once here as the last line of defense.
    pub async fn run(&self, lat: f64, lon: f64) -> ForecastReport {
        if let Err(message) = validate_coordinates(lat, lon) {
            tracing::error!("Input validation failed: {}", message);
            return ForecastReport::failure(message, INVALID_INPUT_PLACEHOLDER);
        }

        match self.generate(lat, lon).await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Forecast summarization failed: {}", e);
                ForecastReport::failure(format!("An error occurred: {}", e), SUMMARY_PLACEHOLDER)
            }
        }
    }

    async fn generate(&self, lat: f64, lon: f64) -> Result<ForecastReport, PipelineError> {
        let coordinate = Coordinate::new(lat, lon);

        let document = match self
            .cache
            .get_or_fetch(&coordinate, || self.weather_client.fetch(&coordinate))
            .await
        {
            Some(document) => document,
            None => {
                tracing::error!("No forecast data retrieved");
                return Ok(ForecastReport::failure(
                    NO_DATA_MESSAGE.to_string(),
                    SUMMARY_PLACEHOLDER,
                ));
            }
        };

        let periods = document.periods()?;

        let paragraphs: Vec<String> = filter_periods(&periods, self.config.forecast_days)
            .into_iter()
            .map(build_paragraph)
            .collect();
        if paragraphs.is_empty() {
            tracing::error!("No weather information available to summarize");
            return Ok(ForecastReport::failure(
                NO_INFORMATION_MESSAGE.to_string(),
                SUMMARY_PLACEHOLDER,
            ));
        }

        let summary = self
            .ai_client
            .summarize(FULL_SUMMARY_FRAMING, &paragraphs.join(" "), None, None)
            .await?;

        let raw_data = serde_json::to_string_pretty(document.raw())?;

        // The merged views span the whole fetched document, not the
        // day-limited window used for the narrative paragraphs.
        let merged_detailed_forecasts = merge_detailed(&periods);
        let merged_detailed_summary = self
            .ai_client
            .summarize(DETAILED_SUMMARY_FRAMING, &merged_detailed_forecasts, None, None)
            .await?;

        let merged_short_forecasts = merge_short(&periods);
        let merged_short_summary = self
            .ai_client
            .summarize(SHORT_SUMMARY_FRAMING, &merged_short_forecasts, None, None)
            .await?;

        Ok(ForecastReport {
            raw_data,
            summary,
            merged_detailed_forecasts,
            merged_detailed_summary,
            merged_short_forecasts,
            merged_short_summary,
        })
    }
}
