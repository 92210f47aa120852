use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Exact-value cache key: the bit patterns of both floats. No rounding,
    /// so 32.7767 and 32.77670000000001 are distinct keys.
    pub fn key(&self) -> (u64, u64) {
        (self.latitude.to_bits(), self.longitude.to_bits())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointsProperties {
    pub forecast: Option<String>,
}

/// One discrete forecast interval (a day or night segment) as returned by
/// the upstream API. Everything except the start time is optional so that
/// sparse periods still deserialize; downstream rendering substitutes
/// defaults instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    pub start_time: String,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub temperature_unit: Option<String>,
    #[serde(default)]
    pub wind_speed: Option<String>,
    #[serde(default)]
    pub wind_direction: Option<String>,
    #[serde(default)]
    pub short_forecast: Option<String>,
    #[serde(default)]
    pub detailed_forecast: Option<String>,
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("forecast payload has no properties.periods")]
    MissingPeriods,
    #[error("forecast periods have unexpected shape: {0}")]
    InvalidPeriods(#[from] serde_json::Error),
}

/// The raw forecast payload from the upstream API, kept verbatim. Periods
/// are extracted on demand: a payload that arrived over a successful
/// response but lacks the expected shape is a contract violation surfaced
/// as `ParseError`, not a quiet absence.
#[derive(Debug, Clone)]
pub struct ForecastDocument {
    raw: Value,
}

impl ForecastDocument {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn periods(&self) -> Result<Vec<ForecastPeriod>, ParseError> {
        let periods = self
            .raw
            .get("properties")
            .and_then(|properties| properties.get("periods"))
            .ok_or(ParseError::MissingPeriods)?;
        Ok(serde_json::from_value(periods.clone())?)
    }
}
