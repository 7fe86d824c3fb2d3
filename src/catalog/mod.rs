pub mod data_loader;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use anyhow::Result;

pub use data_loader::{load_ingredient_catalog, load_mood_catalog};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IngredientCatalogEntry {
    pub id: String,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MoodCatalogEntry {
    pub id: String,
    pub name: String,
    pub emoji: String,
}

// (id, display name, category)
const BUILTIN_INGREDIENTS: &[(&str, &str, &str)] = &[
    ("rice", "お米", "主食"),
    ("pasta", "パスタ", "主食"),
    ("bread", "パン", "主食"),
    ("udon", "うどん", "主食"),
    ("soba", "そば", "主食"),
    ("chicken", "鶏肉", "肉類"),
    ("pork", "豚肉", "肉類"),
    ("beef", "牛肉", "肉類"),
    ("ground_meat", "ひき肉", "肉類"),
    ("salmon", "鮭", "魚類"),
    ("tuna", "まぐろ", "魚類"),
    ("shrimp", "えび", "魚類"),
    ("egg", "卵", "卵・乳製品"),
    ("milk", "牛乳", "卵・乳製品"),
    ("cheese", "チーズ", "卵・乳製品"),
    ("tofu", "豆腐", "大豆製品"),
    ("natto", "納豆", "大豆製品"),
    ("onion", "玉ねぎ", "野菜"),
    ("carrot", "にんじん", "野菜"),
    ("potato", "じゃがいも", "野菜"),
    ("cabbage", "キャベツ", "野菜"),
    ("tomato", "トマト", "野菜"),
    ("cucumber", "きゅうり", "野菜"),
    ("lettuce", "レタス", "野菜"),
    ("spinach", "ほうれん草", "野菜"),
    ("mushroom", "きのこ類", "野菜"),
    ("bell_pepper", "ピーマン", "野菜"),
    ("banana", "バナナ", "果物"),
    ("apple", "りんご", "果物"),
    ("lemon", "レモン", "果物"),
];

// (id, display name, emoji)
const BUILTIN_MOODS: &[(&str, &str, &str)] = &[
    ("happy", "元気いっぱい", "😄"),
    ("tired", "疲れ気味", "😴"),
    ("healthy", "ヘルシー志向", "🥗"),
    ("comfort", "家庭的な気分", "🏠"),
    ("adventure", "冒険したい", "🌟"),
    ("spicy", "スパイシー", "🌶️"),
];

/// Static ingredient and mood tables, immutable once built.
///
/// Lookups never fail: an unknown id is returned unchanged as its own display name.
#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: Vec<IngredientCatalogEntry>,
    moods: Vec<MoodCatalogEntry>,
    ingredient_index: HashMap<String, usize>,
    mood_index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(ingredients: Vec<IngredientCatalogEntry>, moods: Vec<MoodCatalogEntry>) -> Self {
        // First occurrence wins, matching a linear scan over the table.
        let mut ingredient_index = HashMap::new();
        for (idx, entry) in ingredients.iter().enumerate() {
            ingredient_index.entry(entry.id.clone()).or_insert(idx);
        }
        let mut mood_index = HashMap::new();
        for (idx, entry) in moods.iter().enumerate() {
            mood_index.entry(entry.id.clone()).or_insert(idx);
        }
        Self {
            ingredients,
            moods,
            ingredient_index,
            mood_index,
        }
    }

    /// The 30 ingredients and 6 moods the service ships with.
    pub fn builtin() -> Self {
        let ingredients = BUILTIN_INGREDIENTS
            .iter()
            .map(|(id, name, category)| IngredientCatalogEntry {
                id: id.to_string(),
                name: name.to_string(),
                category: category.to_string(),
            })
            .collect();
        let moods = BUILTIN_MOODS
            .iter()
            .map(|(id, name, emoji)| MoodCatalogEntry {
                id: id.to_string(),
                name: name.to_string(),
                emoji: emoji.to_string(),
            })
            .collect();
        Self::new(ingredients, moods)
    }

    pub fn from_csv_files(ingredients_csv: &Path, moods_csv: &Path) -> Result<Self> {
        let ingredients = load_ingredient_catalog(ingredients_csv)?;
        let moods = load_mood_catalog(moods_csv)?;
        Ok(Self::new(ingredients, moods))
    }

    pub fn ingredients(&self) -> &[IngredientCatalogEntry] {
        &self.ingredients
    }

    pub fn moods(&self) -> &[MoodCatalogEntry] {
        &self.moods
    }

    pub fn ingredient(&self, id: &str) -> Option<&IngredientCatalogEntry> {
        self.ingredient_index.get(id).map(|&idx| &self.ingredients[idx])
    }

    pub fn mood(&self, id: &str) -> Option<&MoodCatalogEntry> {
        self.mood_index.get(id).map(|&idx| &self.moods[idx])
    }

    pub fn ingredient_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.ingredient(id).map_or(id, |entry| entry.name.as_str())
    }

    pub fn mood_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.mood(id).map_or(id, |entry| entry.name.as_str())
    }

    pub fn ingredient_names<S: AsRef<str>>(&self, ids: &[S]) -> Vec<String> {
        ids.iter()
            .map(|id| self.ingredient_name(id.as_ref()).to_string())
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
