use mood_kitchen::catalog::Catalog;
use mood_kitchen::generator::{
    ingredient_combinations, Difficulty, GeneratorConfig, RecipeGenerator, RecipeRecord,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

const MOODS: [&str; 6] = ["happy", "tired", "healthy", "comfort", "adventure", "spicy"];

fn all_ingredient_ids(catalog: &Catalog) -> Vec<String> {
    catalog.ingredients().iter().map(|i| i.id.clone()).collect()
}

fn assert_well_formed(recipe: &RecipeRecord) {
    assert!(!recipe.name.is_empty());
    assert!(!recipe.main_ingredients.is_empty());
    assert!(!recipe.steps.is_empty());
    assert!(!recipe.tip.is_empty());
    assert!(recipe.time_minutes >= recipe.cooking_method.base_minutes());
    let expected = match recipe.time_minutes {
        0..=15 => Difficulty::Easy,
        16..=25 => Difficulty::Medium,
        _ => Difficulty::Hard,
    };
    assert_eq!(recipe.difficulty, expected, "{}", recipe.name);
}

#[test]
fn test_every_prefix_and_mood_produces_text() {
    let generator = RecipeGenerator::default();
    let ids = all_ingredient_ids(generator.catalog());
    assert_eq!(ids.len(), 30);

    for len in 0..30 {
        for (m, mood) in MOODS.iter().enumerate() {
            let mut rng = StdRng::seed_from_u64((len * 10 + m) as u64);
            let text = generator.synthesize_recipes(mood, &ids[..len], &mut rng);
            let mood_name = generator.catalog().mood_name(mood);
            assert!(!text.is_empty());
            assert!(text.contains(mood_name), "mood '{}' missing for {} ingredients", mood_name, len);
        }
    }
}

#[test]
fn test_names_unique_and_fields_consistent() {
    let generator = RecipeGenerator::default();
    let ids = all_ingredient_ids(generator.catalog());

    for seed in 0..25u64 {
        let start = (seed as usize * 7) % ids.len();
        let len = (seed as usize % 5) + 1;
        let subset: Vec<String> = ids.iter().cycle().skip(start).take(len).cloned().collect();
        for mood in MOODS {
            let mut rng = StdRng::seed_from_u64(seed);
            let recipes = generator.generate(mood, subset.as_slice(), &mut rng);
            assert!(!recipes.is_empty());
            let names: HashSet<_> = recipes.iter().map(|r| r.name.clone()).collect();
            assert_eq!(names.len(), recipes.len());
            recipes.iter().for_each(assert_well_formed);
        }
    }
}

#[test]
fn test_combination_sets_are_stable() {
    let input = ["chicken", "onion", "rice", "egg", "tomato"];
    let first: HashSet<Vec<String>> = ingredient_combinations(&input).into_iter().filter(|c| c.len() >= 2).collect();
    for _ in 0..5 {
        let again: HashSet<Vec<String>> = ingredient_combinations(&input).into_iter().filter(|c| c.len() >= 2).collect();
        assert_eq!(first, again);
    }
}

#[test]
fn test_empty_ingredients_use_default_subset() {
    let generator = RecipeGenerator::default();
    let mut rng = StdRng::seed_from_u64(77);
    let recipes = generator.generate::<&str, _>("healthy", &[], &mut rng);
    assert!(!recipes.is_empty());
    for recipe in &recipes {
        assert_eq!(recipe.main_ingredients, vec!["卵", "玉ねぎ"]);
        assert_well_formed(recipe);
    }
}

#[test]
fn test_happy_chicken_onion_rice_scenario() {
    let generator = RecipeGenerator::default();
    let mut rng = StdRng::seed_from_u64(2025);
    let ids = ["chicken", "onion", "rice"];

    let recipes = generator.generate("happy", &ids, &mut rng);
    assert_eq!(recipes.len(), 3);
    for recipe in &recipes {
        assert!(recipe
            .main_ingredients
            .iter()
            .any(|i| i == "鶏肉" || i == "玉ねぎ" || i == "お米"));
    }

    let mut rng = StdRng::seed_from_u64(2025);
    let text = generator.synthesize_recipes("happy", &ids, &mut rng);
    let header = text.lines().take(2).collect::<Vec<_>>().join("\n");
    assert!(header.contains("元気いっぱい"));
    assert!(header.contains("鶏肉、玉ねぎ、お米"));
    assert!(text.contains("1. **") && text.contains("2. **") && text.contains("3. **"));
    assert!(!text.contains("4. **"));
}

#[test]
fn test_spicy_without_ingredients_scenario() {
    let generator = RecipeGenerator::default();
    let mut rng = StdRng::seed_from_u64(5);
    let recipes = generator.generate::<&str, _>("spicy", &[], &mut rng);
    assert!(!recipes.is_empty());
    for recipe in &recipes {
        assert_well_formed(recipe);
        assert!(recipe.time_minutes <= recipe.cooking_method.base_minutes() + 4);
        assert!(recipe.difficulty.level() >= 1 && recipe.difficulty.level() <= 3);
    }

    let mut rng = StdRng::seed_from_u64(5);
    let text = generator.synthesize_recipes::<&str, _>("spicy", &[], &mut rng);
    assert!(text.contains("スパイシー"));
    assert!(text.contains("調理時間"));
    assert!(text.contains("難易度"));
}

#[test]
fn test_custom_target_count() {
    let generator = RecipeGenerator::new(
        Catalog::builtin(),
        GeneratorConfig {
            target_count: 5,
            ..GeneratorConfig::default()
        },
    );
    let mut rng = StdRng::seed_from_u64(31);
    let recipes = generator.generate("adventure", &["beef", "pasta", "tomato", "mushroom"], &mut rng);
    assert_eq!(recipes.len(), 5);
}

#[test]
fn test_top_level_helper() {
    let text = mood_kitchen::synthesize_recipes("tired", &["udon", "egg"]);
    assert!(text.contains("疲れ気味"));
    assert!(text.contains("うどん、卵"));
}
