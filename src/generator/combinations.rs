/// Upper bound on the number of subsets handed to the synthesizer.
pub const MAX_COMBINATIONS: usize = 15;

/// Used whenever the caller supplies no ingredients at all.
pub const DEFAULT_SUBSET: [&str; 2] = ["egg", "onion"];

/// Candidate ingredient subsets for recipe synthesis.
///
/// Produces every subset of size 2, 3 and 4 (sizes larger than the input are skipped),
/// followed by every singleton, in lexicographic index order. The result is truncated to
/// [`MAX_COMBINATIONS`]. An empty input yields the single [`DEFAULT_SUBSET`].
pub fn ingredient_combinations<S: AsRef<str>>(ingredient_ids: &[S]) -> Vec<Vec<String>> {
    if ingredient_ids.is_empty() {
        return vec![DEFAULT_SUBSET.iter().map(|s| s.to_string()).collect()];
    }

    let ids: Vec<&str> = ingredient_ids.iter().map(|s| s.as_ref()).collect();
    let mut out = Vec::new();

    'sizes: for size in 2..=4 {
        if size > ids.len() {
            break;
        }
        for combo in IndexCombinations::new(ids.len(), size) {
            if out.len() == MAX_COMBINATIONS {
                break 'sizes;
            }
            out.push(combo.iter().map(|&i| ids[i].to_string()).collect());
        }
    }

    for id in &ids {
        if out.len() == MAX_COMBINATIONS {
            break;
        }
        out.push(vec![id.to_string()]);
    }

    out
}

/// Lexicographic k-combinations of `0..n`.
struct IndexCombinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl IndexCombinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n || k == 0,
        }
    }
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        let k = self.indices.len();
        // Rightmost position that can still move forward.
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input_yields_default() {
        let combos = ingredient_combinations::<String>(&[]);
        assert_eq!(combos, vec![ids(&["egg", "onion"])]);
    }

    #[test]
    fn test_single_ingredient() {
        let combos = ingredient_combinations(&ids(&["tofu"]));
        assert_eq!(combos, vec![ids(&["tofu"])]);
    }

    #[test]
    fn test_three_ingredients_order() {
        let combos = ingredient_combinations(&ids(&["chicken", "onion", "rice"]));
        assert_eq!(
            combos,
            vec![
                ids(&["chicken", "onion"]),
                ids(&["chicken", "rice"]),
                ids(&["onion", "rice"]),
                ids(&["chicken", "onion", "rice"]),
                ids(&["chicken"]),
                ids(&["onion"]),
                ids(&["rice"]),
            ]
        );
    }

    #[test]
    fn test_four_ingredients_is_capped() {
        // 6 pairs + 4 triples + 1 quadruple + 4 singletons = 15
        let combos = ingredient_combinations(&ids(&["a", "b", "c", "d"]));
        assert_eq!(combos.len(), 15);
        assert_eq!(combos[10], ids(&["a", "b", "c", "d"]));
        assert_eq!(combos[14], ids(&["d"]));
    }

    #[test]
    fn test_truncation_preserves_generation_order() {
        let input = ids(&["a", "b", "c", "d", "e", "f", "g"]);
        let combos = ingredient_combinations(&input);
        assert_eq!(combos.len(), MAX_COMBINATIONS);
        // 21 pairs exist, so only the first 15 pairs survive.
        assert!(combos.iter().all(|c| c.len() == 2));
        assert_eq!(combos[0], ids(&["a", "b"]));
        assert_eq!(combos[6], ids(&["b", "c"]));
    }

    #[test]
    fn test_same_input_same_subsets() {
        let input = ids(&["beef", "carrot", "potato", "onion", "rice"]);
        let first: HashSet<_> = ingredient_combinations(&input).into_iter().collect();
        let second: HashSet<_> = ingredient_combinations(&input).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_index_combinations_count() {
        assert_eq!(IndexCombinations::new(5, 3).count(), 10);
        assert_eq!(IndexCombinations::new(3, 4).count(), 0);
        assert_eq!(IndexCombinations::new(4, 4).count(), 1);
    }
}
