use super::synthesizer::RecipeRecord;

const INGREDIENT_SEPARATOR: &str = "、";
const NO_INGREDIENTS_LABEL: &str = "おまかせ";

/// Renders the selected recipes as one text blob. Deterministic for a given input.
pub fn format_recipes<S: AsRef<str>>(mood_name: &str, ingredient_names: &[S], recipes: &[RecipeRecord]) -> String {
    let ingredients_line = if ingredient_names.is_empty() {
        NO_INGREDIENTS_LABEL.to_string()
    } else {
        join(ingredient_names)
    };

    let header = format!("【気分】{}\n【食材】{}\n", mood_name, ingredients_line);
    let blocks = recipes
        .iter()
        .enumerate()
        .map(|(idx, recipe)| recipe_block(idx + 1, recipe))
        .collect::<Vec<String>>();
    let closing = format!("{}な気分にぴったりのレシピです。楽しく料理してくださいね！", mood_name);

    std::iter::once(header)
        .chain(blocks)
        .chain(std::iter::once(closing))
        .collect::<Vec<String>>()
        .join("\n")
}

/// One numbered block, ending with a newline.
fn recipe_block(number: usize, recipe: &RecipeRecord) -> String {
    let steps = recipe
        .steps
        .iter()
        .enumerate()
        .map(|(step_idx, step)| format!("     {}. {}", step_idx + 1, step))
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        "{}. **{}**
   - 調理時間: {}分
   - 難易度: {}
   - 分量: {}
   - 材料: {}
   - 調味料: {}
   - 作り方:
{}
   - ポイント: {}
",
        number,
        recipe.name,
        recipe.time_minutes,
        recipe.difficulty.stars(),
        recipe.serving_size,
        join(&recipe.main_ingredients),
        join(&recipe.seasonings),
        steps,
        recipe.tip
    )
}

fn join<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(INGREDIENT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::synthesizer::Difficulty;
    use crate::generator::tables::CookingMethod;

    fn sample_recipe(name: &str) -> RecipeRecord {
        RecipeRecord {
            name: name.to_string(),
            cooking_method: CookingMethod::StirFry,
            time_minutes: 16,
            difficulty: Difficulty::Medium,
            serving_size: "2人分".to_string(),
            main_ingredients: vec!["鶏肉".to_string(), "玉ねぎ".to_string()],
            seasonings: vec!["醤油".to_string(), "塩".to_string()],
            steps: vec!["切る".to_string(), "炒める".to_string()],
            tip: "強火で。".to_string(),
        }
    }

    #[test]
    fn test_format_layout() {
        let text = format_recipes("元気いっぱい", &["鶏肉", "玉ねぎ"], &[sample_recipe("A"), sample_recipe("B")]);
        assert!(text.starts_with("【気分】元気いっぱい\n【食材】鶏肉、玉ねぎ\n\n1. **A**\n"));
        assert!(text.contains("2. **B**"));
        assert!(text.contains("   - 調理時間: 16分\n"));
        assert!(text.contains("   - 難易度: ★★☆\n"));
        assert!(text.contains("   - 材料: 鶏肉、玉ねぎ\n"));
        assert!(text.contains("     2. 炒める\n"));
        assert!(text.ends_with("元気いっぱいな気分にぴったりのレシピです。楽しく料理してくださいね！"));
    }

    #[test]
    fn test_exact_block_text() {
        let text = format_recipes("疲れ気味", &["卵"], &[sample_recipe("A")]);
        let expected = concat!(
            "【気分】疲れ気味\n【食材】卵\n\n",
            "1. **A**\n",
            "   - 調理時間: 16分\n",
            "   - 難易度: ★★☆\n",
            "   - 分量: 2人分\n",
            "   - 材料: 鶏肉、玉ねぎ\n",
            "   - 調味料: 醤油、塩\n",
            "   - 作り方:\n",
            "     1. 切る\n",
            "     2. 炒める\n",
            "   - ポイント: 強火で。\n",
            "\n",
            "疲れ気味な気分にぴったりのレシピです。楽しく料理してくださいね！",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_no_recipes_keeps_header_and_closing() {
        let text = format_recipes("元気いっぱい", &["卵"], &[]);
        assert_eq!(text, "【気分】元気いっぱい\n【食材】卵\n\n元気いっぱいな気分にぴったりのレシピです。楽しく料理してくださいね！");
    }

    #[test]
    fn test_empty_ingredients_header() {
        let text = format_recipes::<&str>("スパイシー", &[], &[sample_recipe("A")]);
        assert!(text.contains("【食材】おまかせ\n"));
    }

    #[test]
    fn test_deterministic() {
        let recipes = vec![sample_recipe("A")];
        assert_eq!(
            format_recipes("疲れ気味", &["卵"], &recipes),
            format_recipes("疲れ気味", &["卵"], &recipes)
        );
    }
}
