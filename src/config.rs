use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub openrouter_api_key: String,
    pub openrouter_base_url: String,
    pub or_model: String,
    pub nws_base_url: String,
    pub user_agent: String,
    pub cache_ttl_secs: i64,
    pub cache_capacity: usize,
    pub forecast_days: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            openrouter_api_key: env::var("OPENROUTER_API_KEY")
                .map_err(|_| anyhow::anyhow!("OPENROUTER_API_KEY not set"))?,
            openrouter_base_url: env::var("OPENROUTER_BASE_URL")
                .unwrap_or_else(|_| "https://openrouter.ai/api/v1/chat/completions".to_string()),
            or_model: env::var("OR_MODEL")
                .unwrap_or_else(|_| "openai/gpt-4o-mini".to_string()),
            nws_base_url: env::var("NWS_BASE_URL")
                .unwrap_or_else(|_| "https://api.weather.gov".to_string()),
            user_agent: env::var("APP_USER_AGENT")
                .unwrap_or_else(|_| "WeatherApp/1.0 (your.email@example.com)".to_string()),
            cache_ttl_secs: env_or("CACHE_TTL_SECS", 600),
            cache_capacity: env_or("CACHE_CAPACITY", 100),
            forecast_days: env_or("FORECAST_DAYS", 14),
        })
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
