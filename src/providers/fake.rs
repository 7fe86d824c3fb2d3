//! Fake providers for tests and offline runs.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{AiProvider, ImageProvider, ImageReference, ImageSource, ProviderError};

/// Returns a fixed reply, or fails every call when built with [`FakeTextProvider::failing`].
#[derive(Debug, Default)]
pub struct FakeTextProvider {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl FakeTextProvider {
    pub fn with_reply(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiProvider for FakeTextProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .ok_or_else(|| ProviderError::Unavailable("fake text provider has no reply".to_string()))
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

#[derive(Debug, Default)]
pub struct FakeImageProvider {
    url: Option<String>,
}

impl FakeImageProvider {
    pub fn with_url(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ImageProvider for FakeImageProvider {
    async fn generate(&self, _recipe_name: &str, _ingredients: &[String]) -> Result<ImageReference, ProviderError> {
        match &self.url {
            Some(url) => Ok(ImageReference {
                url: url.clone(),
                category: "generated".to_string(),
                source: ImageSource::Generated,
            }),
            None => Err(ProviderError::Unavailable("fake image provider is offline".to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
