use rand::distributions::WeightedIndex;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use super::combinations::DEFAULT_SUBSET;
use super::tables::{mood_profile, CookingMethod, CARB_IDS, PROTEIN_IDS, VEGETABLE_IDS};

/// Minutes added per ingredient in the subset.
pub const MINUTES_PER_INGREDIENT: u32 = 2;

const FALLBACK_CARB_NAME: &str = "ご飯";
const GENERIC_MAIN_NAME: &str = "野菜";
const MAX_MOOD_SEASONINGS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// ≤15 minutes is easy, ≤25 is medium, anything longer is hard.
    pub fn from_minutes(minutes: u32) -> Self {
        match minutes {
            0..=15 => Difficulty::Easy,
            16..=25 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn stars(self) -> String {
        let filled = self.level() as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(3 - filled))
    }

    pub fn serving_size(self) -> &'static str {
        match self {
            Difficulty::Easy => "1〜2人分",
            Difficulty::Medium => "2人分",
            Difficulty::Hard => "2〜3人分",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecipeRecord {
    pub name: String,
    pub cooking_method: CookingMethod,
    pub time_minutes: u32,
    pub difficulty: Difficulty,
    pub serving_size: String,
    pub main_ingredients: Vec<String>,
    pub seasonings: Vec<String>,
    pub steps: Vec<String>,
    pub tip: String,
}

/// Ingredient ids of a subset, split by culinary role.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RoleBuckets {
    pub proteins: Vec<String>,
    pub carbs: Vec<String>,
    pub vegetables: Vec<String>,
}

impl RoleBuckets {
    /// Ids outside the three closed sets are left out.
    pub fn classify<S: AsRef<str>>(subset: &[S]) -> Self {
        let mut buckets = Self::default();
        for id in subset.iter().map(|s| s.as_ref()) {
            if PROTEIN_IDS.contains(&id) {
                buckets.proteins.push(id.to_string());
            } else if CARB_IDS.contains(&id) {
                buckets.carbs.push(id.to_string());
            } else if VEGETABLE_IDS.contains(&id) {
                buckets.vegetables.push(id.to_string());
            }
        }
        buckets
    }
}

/// Builds one [`RecipeRecord`] from a mood and an ingredient subset.
#[derive(Debug, Clone, Copy)]
pub struct RecipeSynthesizer<'a> {
    catalog: &'a Catalog,
}

impl<'a> RecipeSynthesizer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn synthesize<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        mood_id: &str,
        subset: &[S],
        rng: &mut R,
    ) -> RecipeRecord {
        let subset: Vec<&str> = if subset.is_empty() {
            DEFAULT_SUBSET.to_vec()
        } else {
            subset.iter().map(|s| s.as_ref()).collect()
        };

        let profile = mood_profile(mood_id);
        let roles = RoleBuckets::classify(&subset);

        let method = pick_method(profile.method_weights, rng);
        let style = profile.styles.choose(rng).copied().unwrap_or_default();

        let protein = roles.proteins.first().map(|id| self.catalog.ingredient_name(id));
        let vegetable = roles.vegetables.first().map(|id| self.catalog.ingredient_name(id));
        let carb = roles.carbs.first().map(|id| self.catalog.ingredient_name(id));

        let name = recipe_name(style, protein, vegetable, method);

        let time_minutes = method.base_minutes() + MINUTES_PER_INGREDIENT * subset.len() as u32;
        let difficulty = Difficulty::from_minutes(time_minutes);

        let mut seasonings: Vec<String> = method.base_seasonings().iter().map(|s| s.to_string()).collect();
        for extra in profile.seasoning_additions.choose_multiple(rng, MAX_MOOD_SEASONINGS) {
            if !seasonings.iter().any(|s| s == extra) {
                seasonings.push(extra.to_string());
            }
        }

        let mut steps = fill_steps(method, protein, vegetable, carb.unwrap_or(FALLBACK_CARB_NAME));
        let last = steps.len() - 1;
        steps.insert(last, profile.technique_step.to_string());

        let method_tip = method.tips().choose(rng).copied().unwrap_or_default();
        let tip = format!("{}{}", method_tip, profile.encouragement);

        RecipeRecord {
            name,
            cooking_method: method,
            time_minutes,
            difficulty,
            serving_size: difficulty.serving_size().to_string(),
            main_ingredients: self.catalog.ingredient_names(&subset),
            seasonings,
            steps,
            tip,
        }
    }
}

fn pick_method<R: Rng + ?Sized>(weights: &[(CookingMethod, u32)], rng: &mut R) -> CookingMethod {
    match WeightedIndex::new(weights.iter().map(|(_, w)| *w)) {
        Ok(dist) => weights[dist.sample(rng)].0,
        // Only reachable with an empty or all-zero table.
        Err(_) => *CookingMethod::ALL.choose(rng).unwrap_or(&CookingMethod::StirFry),
    }
}

/// Two-role template when both a protein and a vegetable are present, otherwise the single-ingredient one.
fn fill_steps(method: CookingMethod, protein: Option<&str>, vegetable: Option<&str>, carb: &str) -> Vec<String> {
    match (protein, vegetable) {
        (Some(p), Some(v)) => method
            .step_template()
            .iter()
            .map(|step| step.replace("{protein}", p).replace("{vegetable}", v).replace("{carb}", carb))
            .collect(),
        (main, other) => {
            let main = main.or(other).unwrap_or(GENERIC_MAIN_NAME);
            method
                .single_step_template()
                .iter()
                .map(|step| step.replace("{main}", main).replace("{carb}", carb))
                .collect()
        }
    }
}

/// protein + vegetable, then protein, then vegetable, then a generic name.
fn recipe_name(style: &str, protein: Option<&str>, vegetable: Option<&str>, method: CookingMethod) -> String {
    let suffix = method.name_suffix();
    match (protein, vegetable) {
        (Some(p), Some(v)) => format!("{style}{p}と{v}の{suffix}"),
        (Some(p), None) => format!("{style}{p}の{suffix}"),
        (None, Some(v)) => format!("{style}{v}の{suffix}"),
        (None, None) => format!("{style}{GENERIC_MAIN_NAME}の{suffix}"),
    }
}
