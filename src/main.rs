use anyhow::{Context, Result};
use mood_kitchen::cli::{parse_args, Command};
use mood_kitchen::config::AppConfig;
use mood_kitchen::generator::{GeneratorConfig, RecipeGenerator};
use mood_kitchen::providers::OpenRouterTextProvider;
use mood_kitchen::service::RecipeService;
use mood_kitchen::usage::DailyUsageCounter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = parse_args();
    let config = AppConfig::from_env().context("Failed to read configuration")?;
    let catalog = config.load_catalog()?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command {
        Command::Catalog => {
            println!("Moods:");
            for mood in catalog.moods() {
                println!("  {} {} ({})", mood.emoji, mood.name, mood.id);
            }
            println!("\nIngredients:");
            for ingredient in catalog.ingredients() {
                println!("  [{}] {} ({})", ingredient.category, ingredient.name, ingredient.id);
            }
        }
        Command::Recipes { mood, ingredients, ai } => {
            let generator = RecipeGenerator::new(catalog, GeneratorConfig::default());
            let usage = Arc::new(DailyUsageCounter::new(config.daily_ai_limit));
            let mut service = RecipeService::new(generator, usage);
            if ai {
                tracing::info!(model = %config.model, "text provider enabled");
                service = service.with_text_provider(Arc::new(OpenRouterTextProvider::new(
                    &config.api_key_env_var,
                    &config.model,
                )));
            }

            let response = service
                .recommend(&mood, ingredients.as_slice(), &mut rng)
                .await
                .context("レシピ生成中にエラーが発生しました")?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.recipes);
            }
        }
        Command::Image { name, ingredients } => {
            let generator = RecipeGenerator::new(catalog, GeneratorConfig::default());
            let service = RecipeService::new(generator, Arc::new(DailyUsageCounter::new(config.daily_ai_limit)));

            let response = service
                .illustrate(&name, &ingredients, &mut rng)
                .await
                .context("画像生成中にエラーが発生しました")?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{} [{}]", response.image.url, response.image.category);
            }
        }
    }

    Ok(())
}
