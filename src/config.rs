use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::api_connection::endpoints::DEFAULT_MODEL;
use crate::catalog::Catalog;

pub const API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";
pub const MODEL_ENV_VAR: &str = "MOOD_KITCHEN_MODEL";
pub const DAILY_LIMIT_ENV_VAR: &str = "MOOD_KITCHEN_DAILY_AI_LIMIT";
pub const INGREDIENTS_CSV_ENV_VAR: &str = "MOOD_KITCHEN_INGREDIENTS_CSV";
pub const MOODS_CSV_ENV_VAR: &str = "MOOD_KITCHEN_MOODS_CSV";

pub const DEFAULT_DAILY_AI_LIMIT: u32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Environment variable the text provider reads its key from.
    pub api_key_env_var: String,
    pub model: String,
    pub daily_ai_limit: u32,
    pub ingredients_csv: Option<PathBuf>,
    pub moods_csv: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key_env_var: API_KEY_ENV_VAR.to_string(),
            model: DEFAULT_MODEL.to_string(),
            daily_ai_limit: DEFAULT_DAILY_AI_LIMIT,
            ingredients_csv: None,
            moods_csv: None,
        }
    }
}

impl AppConfig {
    /// Reads `.env` and the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let daily_ai_limit = match non_empty(DAILY_LIMIT_ENV_VAR) {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("{} must be a non-negative integer, got '{}'", DAILY_LIMIT_ENV_VAR, raw))?,
            None => DEFAULT_DAILY_AI_LIMIT,
        };

        Ok(Self {
            api_key_env_var: API_KEY_ENV_VAR.to_string(),
            model: non_empty(MODEL_ENV_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            daily_ai_limit,
            ingredients_csv: non_empty(INGREDIENTS_CSV_ENV_VAR).map(PathBuf::from),
            moods_csv: non_empty(MOODS_CSV_ENV_VAR).map(PathBuf::from),
        })
    }

    /// Built-in catalog unless both CSV overrides are set.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match (&self.ingredients_csv, &self.moods_csv) {
            (Some(ingredients), Some(moods)) => Catalog::from_csv_files(ingredients, moods)
                .context("Failed to load catalog from CSV overrides"),
            (None, None) => Ok(Catalog::builtin()),
            _ => Err(anyhow::anyhow!(
                "{} and {} must be set together",
                INGREDIENTS_CSV_ENV_VAR,
                MOODS_CSV_ENV_VAR
            )),
        }
    }
}
