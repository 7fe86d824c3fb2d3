//! Pluggable collaborators for free-text recipes and recipe photos.
//!
//! The rule-based generator never depends on these; the service layer tries a provider
//! first and falls back to local generation (text) or the stock-photo table (images).

mod fake;
mod openrouter;
mod static_images;

pub use fake::{FakeImageProvider, FakeTextProvider};
pub use openrouter::OpenRouterTextProvider;
pub use static_images::{categorize, FoodCategory, StaticImageProvider};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::api_connection::ApiConnectionError;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Request(#[from] ApiConnectionError),

    #[error("Provider returned an empty response")]
    EmptyResponse,

    #[error("Daily provider quota of {limit} calls exhausted")]
    QuotaExceeded { limit: u32 },

    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

/// Generates natural-language recipe text from a prompt.
#[async_trait]
pub trait AiProvider: Send + Sync + fmt::Debug {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Short provider identifier for logs (e.g. "openrouter", "fake").
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    Placeholder,
    Generated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    /// An http(s) URL or a `data:` URI.
    pub url: String,
    pub category: String,
    pub source: ImageSource,
}

/// Produces an illustrative image for a recipe.
#[async_trait]
pub trait ImageProvider: Send + Sync + fmt::Debug {
    async fn generate(&self, recipe_name: &str, ingredients: &[String]) -> Result<ImageReference, ProviderError>;

    fn name(&self) -> &'static str;
}
