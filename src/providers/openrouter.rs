use async_trait::async_trait;
use reqwest::Client;

use super::{AiProvider, ProviderError};
use crate::api_connection::{ChatCompletionRequest, ChatMessage, Provider};

const SYSTEM_PROMPT: &str = "あなたは日本の家庭料理に詳しいアシスタントです。指定された形式のテキストだけを返してください。";

/// Text provider backed by an OpenRouter chat-completion model.
#[derive(Debug, Clone)]
pub struct OpenRouterTextProvider {
    provider: Provider,
    model: String,
    client: Client,
    temperature: f32,
    max_tokens: u32,
}

impl OpenRouterTextProvider {
    pub fn new(api_key_env_var: &str, model: &str) -> Self {
        Self {
            provider: Provider::openrouter(api_key_env_var),
            model: model.to_string(),
            client: Client::new(),
            temperature: 0.8,
            max_tokens: 2048,
        }
    }

    /// Sends requests to another OpenAI-compatible endpoint.
    pub fn with_endpoint(mut self, url: &str) -> Self {
        self.provider = self.provider.with_endpoint(url);
        self
    }
}

#[async_trait]
impl AiProvider for OpenRouterTextProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        };

        let response = self.provider.call_chat_completion(&self.client, request).await?;
        if let Some(usage) = &response.usage {
            tracing::debug!(model = %response.model, total_tokens = usage.total_tokens, "chat completion usage");
        }

        response
            .first_content()
            .map(str::to_string)
            .ok_or(ProviderError::EmptyResponse)
    }

    fn name(&self) -> &'static str {
        "openrouter"
    }
}
