use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Mood-based recipe suggestions", long_about = None)]
pub struct Cli {
    /// Print responses as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Seed for the recipe generator and placeholder picker
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Suggest recipes for a mood and the ingredients on hand
    Recipes {
        /// Mood id (happy, tired, healthy, comfort, adventure, spicy)
        #[arg(short, long)]
        mood: String,

        /// Ingredient ids, comma separated
        #[arg(short, long, value_delimiter = ',')]
        ingredients: Vec<String>,

        /// Ask the configured text provider before falling back to the local generator
        #[arg(long)]
        ai: bool,
    },
    /// Pick an illustrative photo for a recipe
    Image {
        /// Recipe name
        #[arg(short, long)]
        name: String,

        /// Ingredient display names, comma separated
        #[arg(short, long, value_delimiter = ',')]
        ingredients: Vec<String>,
    },
    /// List known moods and ingredients
    Catalog,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recipes() {
        let cli = Cli::try_parse_from([
            "mood-kitchen", "recipes", "--mood", "happy", "--ingredients", "chicken,onion,rice", "--seed", "3",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(3));
        match cli.command {
            Command::Recipes { mood, ingredients, ai } => {
                assert_eq!(mood, "happy");
                assert_eq!(ingredients, vec!["chicken", "onion", "rice"]);
                assert!(!ai);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_ingredients_optional() {
        let cli = Cli::try_parse_from(["mood-kitchen", "--json", "recipes", "-m", "spicy"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Recipes { ref ingredients, .. } if ingredients.is_empty()));
    }
}
