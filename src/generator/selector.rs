use rand::prelude::*;
use std::collections::HashSet;

use super::combinations::ingredient_combinations;
use super::synthesizer::{RecipeRecord, RecipeSynthesizer};
use super::GeneratorConfig;

/// Picks up to `config.target_count` recipes with distinct names.
///
/// A first pool of `config.pool_size` candidates is drawn from random ingredient subsets and
/// scanned greedily. If that leaves the batch short, extra candidates are drawn one at a time,
/// at most `config.retry_factor * config.target_count` of them. The result is never empty.
pub fn select_unique_recipes<S: AsRef<str>, R: Rng + ?Sized>(
    synthesizer: &RecipeSynthesizer<'_>,
    mood_id: &str,
    ingredient_ids: &[S],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<RecipeRecord> {
    let target = config.target_count.max(1);
    let combinations = ingredient_combinations(ingredient_ids);

    let draw = |rng: &mut R| -> RecipeRecord {
        // Never empty: the sampler returns the default subset for empty input.
        let subset = combinations.choose(rng).map(Vec::as_slice).unwrap_or(&[]);
        synthesizer.synthesize(mood_id, subset, rng)
    };

    let pool: Vec<RecipeRecord> = (0..config.pool_size).map(|_| draw(rng)).collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut selected = Vec::with_capacity(target);
    for candidate in pool {
        if selected.len() == target {
            break;
        }
        if seen.insert(candidate.name.clone()) {
            selected.push(candidate);
        }
    }

    let max_retries = config.retry_factor * target;
    let mut retries = 0;
    while selected.len() < target && retries < max_retries {
        retries += 1;
        let candidate = draw(rng);
        if seen.insert(candidate.name.clone()) {
            selected.push(candidate);
        }
    }

    if selected.is_empty() {
        // pool_size of zero and no retry budget; still hand back one recipe.
        selected.push(draw(rng));
    }

    if selected.len() < target {
        tracing::warn!(
            mood_id,
            found = selected.len(),
            wanted = target,
            "could not find enough distinct recipe names, returning fewer"
        );
    } else {
        tracing::debug!(mood_id, retries, "selected distinct recipes");
    }

    selected
}
