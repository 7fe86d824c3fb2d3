/// Number of recipes requested from a text provider.
pub const PROMPT_RECIPE_COUNT: usize = 5;

/// Builds the home-cooking prompt sent to a generative text provider.
pub fn build_recipe_prompt<S: AsRef<str>>(mood_name: &str, ingredient_names: &[S]) -> String {
    let ingredients = ingredient_names
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "あなたは経験豊富な日本の家庭料理の料理人です。
以下の条件に基づいて、{count}つの料理レシピを提案してください。

【気分・好み】: {mood_name}
【使用可能な食材】: {ingredients}

以下の形式で{count}つのレシピを提案してください：

1. **料理名**
   - 調理時間: XX分
   - 難易度: ★☆☆（3段階）
   - 材料: 使用する食材を列挙
   - 作り方: 3〜5ステップで簡潔に
   - ポイント: 美味しく作るコツ

※注意:
- 選択された食材はなるべくすべて使用してください。
- 気分に合った味付け・調理法を選んでください。
- 一般的な調味料（醤油・塩・胡椒など）は使用可能。
- 初心者でも作れるレシピを心がけてください。
",
        count = PROMPT_RECIPE_COUNT,
    )
}
