use crate::config::Config;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

pub struct SummaryClient {
    client: Client,
    config: Config,
}

impl SummaryClient {
    pub fn new(config: Config) -> Self {
        // No request timeout: summarization latency propagates to the caller.
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Sends one deterministic summarization exchange (framing as the system
    /// message, the body as the user message) and returns the generated text
    /// verbatim. Errors propagate; there is no fallback text.
    ///
    /// The length hints are accepted for interface compatibility but are not
    /// forwarded upstream.
    pub async fn summarize(
        &self,
        framing: &str,
        body: &str,
        _max_length: Option<u32>,
        _min_length: Option<u32>,
    ) -> Result<String, AiError> {
        self.chat_completion(framing, body).await
    }

    async fn chat_completion(&self, framing: &str, body: &str) -> Result<String, AiError> {
        let request = ChatRequest {
            model: self.config.or_model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: framing.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: body.to_string(),
                },
            ],
            temperature: 0.0,
        };

        let response = self
            .client
            .post(&self.config.openrouter_base_url)
            .header("Authorization", format!("Bearer {}", self.config.openrouter_api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let chat_response: ChatResponse = response.json().await?;
                match chat_response.choices.into_iter().next() {
                    Some(choice) => Ok(choice.message.content),
                    None => Err(AiError::ApiError("No response choices".to_string())),
                }
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(AiError::ApiError(format!("HTTP {}: {}", status, error_text)))
            }
        }
    }
}
