use serde::{Serialize, Deserialize};

pub const OPENROUTER_CHAT_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

#[derive(Clone, Debug, Serialize)]
pub struct OpenRouterAvailableModel {
    pub model_name: &'static str,
    pub model_source: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub enum Provider {
    OpenRouter {
        /// Name of the environment variable holding the key, not the key itself.
        api_key: String,
        endpoint: String,
        available_models: Vec<OpenRouterAvailableModel>,
    },
}

pub const OPENROUTER_MODELS: &[OpenRouterAvailableModel] = &[
    OpenRouterAvailableModel {
        model_name: "google/gemini-flash-1.5",
        model_source: "google",
    },
    OpenRouterAvailableModel {
        model_name: "qwen/qwen3-32b",
        model_source: "cerebras",
    },
];

pub const DEFAULT_MODEL: &str = "google/gemini-flash-1.5";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionResponseMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
    pub index: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: Option<u32>,
    pub total_tokens: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionResponse {
    pub id: String,
    #[serde(default)]
    pub object: Option<String>,
    pub created: u64,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    pub usage: Option<ChatCompletionUsage>,
}

impl ChatCompletionResponse {
    /// Trimmed text of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.trim())
            .filter(|content| !content.is_empty())
    }
}
