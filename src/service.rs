use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::generator::RecipeGenerator;
use crate::providers::{AiProvider, ImageProvider, ImageReference, ProviderError, StaticImageProvider};
use crate::recipe_prompt::build_recipe_prompt;
use crate::usage::DailyUsageCounter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("気分を選択してください")]
    MissingMood,

    #[error("レシピ名が必要です")]
    MissingRecipeName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSource {
    Ai,
    RuleBased,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub mood: String,
    pub ingredients: Vec<String>,
    pub recipes: String,
    pub source: RecipeSource,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    pub recipe_name: String,
    pub image: ImageReference,
    pub generated_at: DateTime<Utc>,
}

/// Request-facing entry point: tries the configured providers and falls back to local generation.
#[derive(Debug)]
pub struct RecipeService {
    generator: RecipeGenerator,
    text_provider: Option<Arc<dyn AiProvider>>,
    image_provider: Arc<dyn ImageProvider>,
    usage: Arc<DailyUsageCounter>,
}

impl RecipeService {
    pub fn new(generator: RecipeGenerator, usage: Arc<DailyUsageCounter>) -> Self {
        Self {
            generator,
            text_provider: None,
            image_provider: Arc::new(StaticImageProvider::new()),
            usage,
        }
    }

    pub fn with_text_provider(mut self, provider: Arc<dyn AiProvider>) -> Self {
        self.text_provider = Some(provider);
        self
    }

    pub fn with_image_provider(mut self, provider: Arc<dyn ImageProvider>) -> Self {
        self.image_provider = provider;
        self
    }

    pub fn usage(&self) -> &DailyUsageCounter {
        &self.usage
    }

    pub async fn recommend<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        mood_id: &str,
        ingredient_ids: &[S],
        rng: &mut R,
    ) -> Result<RecipeResponse, ServiceError> {
        let mood_id = mood_id.trim();
        if mood_id.is_empty() {
            return Err(ServiceError::MissingMood);
        }

        let catalog = self.generator.catalog();
        let mood_name = catalog.mood_name(mood_id).to_string();
        let ingredient_names = catalog.ingredient_names(ingredient_ids);

        let ai_text = match &self.text_provider {
            // The prompt needs ingredients; an empty selection goes straight to the default recipes.
            Some(provider) if !ingredient_names.is_empty() => {
                match self.ask_provider(provider.as_ref(), &mood_name, &ingredient_names).await {
                    Ok(text) => Some(text),
                    Err(e) => {
                        tracing::warn!(provider = provider.name(), error = %e, "text provider failed, using rule-based recipes");
                        None
                    }
                }
            }
            _ => None,
        };

        let (recipes, source) = match ai_text {
            Some(text) => (text, RecipeSource::Ai),
            None => (
                self.generator.synthesize_recipes(mood_id, ingredient_ids, rng),
                RecipeSource::RuleBased,
            ),
        };

        tracing::info!(mood_id, ingredients = ingredient_names.len(), ?source, "recipes ready");

        Ok(RecipeResponse {
            mood: mood_name,
            ingredients: ingredient_names,
            recipes,
            source,
            generated_at: Utc::now(),
        })
    }

    async fn ask_provider(
        &self,
        provider: &dyn AiProvider,
        mood_name: &str,
        ingredient_names: &[String],
    ) -> Result<String, ProviderError> {
        if !self.usage.try_acquire() {
            return Err(ProviderError::QuotaExceeded {
                limit: self.usage.limit(),
            });
        }
        let prompt = build_recipe_prompt(mood_name, ingredient_names);
        let text = provider.generate(&prompt).await?;
        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text)
    }

    pub async fn illustrate<R: Rng + ?Sized>(
        &self,
        recipe_name: &str,
        ingredients: &[String],
        rng: &mut R,
    ) -> Result<ImageResponse, ServiceError> {
        let recipe_name = recipe_name.trim();
        if recipe_name.is_empty() {
            return Err(ServiceError::MissingRecipeName);
        }

        let image = match self.image_provider.generate(recipe_name, ingredients).await {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(provider = self.image_provider.name(), error = %e, "image provider failed, using placeholder");
                StaticImageProvider::pick(recipe_name, ingredients, rng)
            }
        };

        Ok(ImageResponse {
            recipe_name: recipe_name.to_string(),
            image,
            generated_at: Utc::now(),
        })
    }
}
