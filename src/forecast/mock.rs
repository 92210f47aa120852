use super::types::{ForecastDocument, ForecastPeriod};
use serde_json::json;

pub fn period(
    number: i64,
    name: &str,
    start_time: &str,
    short_forecast: &str,
    detailed_forecast: &str,
) -> ForecastPeriod {
    ForecastPeriod {
        number: Some(number),
        name: Some(name.to_string()),
        start_time: start_time.to_string(),
        temperature: Some(72.0),
        temperature_unit: Some("F".to_string()),
        wind_speed: Some("10 mph".to_string()),
        wind_direction: Some("SW".to_string()),
        short_forecast: Some(short_forecast.to_string()),
        detailed_forecast: Some(detailed_forecast.to_string()),
    }
}

pub fn sample_raw() -> serde_json::Value {
    json!({
        "properties": {
            "updated": "2025-01-10T10:35:42+00:00",
            "units": "us",
            "periods": [
                {
                    "number": 1,
                    "name": "Today",
                    "startTime": "2025-01-10T06:00:00-06:00",
                    "endTime": "2025-01-10T18:00:00-06:00",
                    "temperature": 72,
                    "temperatureUnit": "F",
                    "windSpeed": "10 mph",
                    "windDirection": "SW",
                    "shortForecast": "Mostly Sunny",
                    "detailedForecast": "Mostly sunny, with a high near 72."
                },
                {
                    "number": 2,
                    "name": "Tonight",
                    "startTime": "2025-01-10T18:00:00-06:00",
                    "endTime": "2025-01-11T06:00:00-06:00",
                    "temperature": 48,
                    "temperatureUnit": "F",
                    "windSpeed": "5 mph",
                    "windDirection": "S",
                    "shortForecast": "Mostly Clear",
                    "detailedForecast": "Mostly clear, with a low around 48."
                },
                {
                    "number": 3,
                    "name": "Saturday",
                    "startTime": "2025-01-11T06:00:00-06:00",
                    "endTime": "2025-01-11T18:00:00-06:00",
                    "temperature": 75,
                    "temperatureUnit": "F",
                    "windSpeed": "15 mph",
                    "windDirection": "SSW",
                    "shortForecast": "Partly Sunny",
                    "detailedForecast": "Partly sunny, with a high near 75."
                }
            ]
        }
    })
}

pub fn sample_document() -> ForecastDocument {
    ForecastDocument::new(sample_raw())
}
