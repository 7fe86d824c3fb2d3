use dotenv::dotenv;
use reqwest::Client;
use std::env;
use std::error::Error;
use std::fmt;

use super::endpoints::{
    ChatCompletionRequest, ChatCompletionResponse, OpenRouterAvailableModel, Provider,
    OPENROUTER_CHAT_URL, OPENROUTER_MODELS,
};

#[derive(Debug)]
pub enum ApiConnectionError {
    MissingApiKey(String),
    NetworkError(reqwest::Error),
    SerializationError(serde_json::Error),
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
}

impl fmt::Display for ApiConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiConnectionError::MissingApiKey(key_name) => {
                write!(f, "API key not found in environment: {}", key_name)
            }
            ApiConnectionError::NetworkError(err) => write!(f, "Network error: {}", err),
            ApiConnectionError::SerializationError(err) => {
                write!(f, "Serialization error: {}", err)
            }
            ApiConnectionError::ApiError { status, error_body } => {
                write!(f, "API error {}: {}", status, error_body)
            }
        }
    }
}

impl Error for ApiConnectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiConnectionError::NetworkError(err) => Some(err),
            ApiConnectionError::SerializationError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiConnectionError {
    fn from(err: reqwest::Error) -> Self {
        ApiConnectionError::NetworkError(err)
    }
}

impl From<serde_json::Error> for ApiConnectionError {
    fn from(err: serde_json::Error) -> Self {
        ApiConnectionError::SerializationError(err)
    }
}

/// Decodes a successful completion body; malformed JSON is a `SerializationError`.
pub(crate) fn parse_chat_response(body: &str) -> Result<ChatCompletionResponse, ApiConnectionError> {
    serde_json::from_str(body).map_err(ApiConnectionError::from)
}

impl Provider {
    pub fn openrouter(api_key_env_var_name: &str) -> Self {
        dotenv().ok();
        Self::OpenRouter {
            api_key: api_key_env_var_name.to_string(),
            endpoint: OPENROUTER_CHAT_URL.to_string(),
            available_models: OPENROUTER_MODELS.to_vec(),
        }
    }

    /// Points the provider at another OpenAI-compatible endpoint.
    pub fn with_endpoint(self, url: &str) -> Self {
        match self {
            Provider::OpenRouter {
                api_key,
                available_models,
                ..
            } => Provider::OpenRouter {
                api_key,
                endpoint: url.to_string(),
                available_models,
            },
        }
    }

    pub fn get_available_models(&self) -> Vec<OpenRouterAvailableModel> {
        match self {
            Provider::OpenRouter {
                available_models, ..
            } => available_models.clone(),
        }
    }

    pub async fn call_chat_completion(
        &self,
        client: &Client,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ApiConnectionError> {
        match self {
            Provider::OpenRouter {
                api_key: api_key_env_var_name,
                endpoint,
                ..
            } => {
                dotenv().ok();
                let actual_api_key = env::var(api_key_env_var_name)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
                    .ok_or_else(|| ApiConnectionError::MissingApiKey(api_key_env_var_name.clone()))?;

                let site_url = env::var("SITE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
                let app_name = env::var("APP_NAME").unwrap_or_else(|_| "MoodKitchen".to_string());

                tracing::debug!(model = %request.model, endpoint = %endpoint, "sending chat completion request");

                let response = client
                    .post(endpoint.as_str())
                    .bearer_auth(actual_api_key)
                    .header("Content-Type", "application/json")
                    .header("HTTP-Referer", site_url)
                    .header("X-Title", app_name)
                    .json(&request)
                    .send()
                    .await?;

                if response.status().is_success() {
                    let body = response.text().await?;
                    parse_chat_response(&body)
                } else {
                    let status = response.status();
                    let error_body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Failed to read error body".to_string());
                    Err(ApiConnectionError::ApiError { status, error_body })
                }
            }
        }
    }
}
