pub mod api_connection;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod generator;
pub mod providers;
pub mod recipe_prompt;
pub mod service;
pub mod usage;

pub use catalog::Catalog;
pub use generator::{GeneratorConfig, RecipeGenerator, RecipeRecord};
pub use service::{RecipeResponse, RecipeService, RecipeSource};

/// Rule-based recipes for a mood and ingredient ids, using the built-in catalog.
pub fn synthesize_recipes<S: AsRef<str>>(mood_id: &str, ingredient_ids: &[S]) -> String {
    let mut rng = rand::thread_rng();
    RecipeGenerator::default().synthesize_recipes(mood_id, ingredient_ids, &mut rng)
}
