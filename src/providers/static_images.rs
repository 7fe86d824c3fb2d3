use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use super::{ImageProvider, ImageReference, ImageSource, ProviderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodCategory {
    RiceDishes,
    Noodles,
    Vegetables,
    MeatDishes,
    Seafood,
    Soups,
    EggDishes,
    Default,
}

impl FoodCategory {
    /// Matching order; the first category with a hit wins.
    const MATCH_ORDER: [FoodCategory; 7] = [
        FoodCategory::RiceDishes,
        FoodCategory::Noodles,
        FoodCategory::Vegetables,
        FoodCategory::MeatDishes,
        FoodCategory::Seafood,
        FoodCategory::Soups,
        FoodCategory::EggDishes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FoodCategory::RiceDishes => "rice_dishes",
            FoodCategory::Noodles => "noodles",
            FoodCategory::Vegetables => "vegetables",
            FoodCategory::MeatDishes => "meat_dishes",
            FoodCategory::Seafood => "seafood",
            FoodCategory::Soups => "soups",
            FoodCategory::EggDishes => "egg_dishes",
            FoodCategory::Default => "default",
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            FoodCategory::RiceDishes => &["ご飯", "おにぎり", "むすび", "丼", "チャーハン", "炒飯", "茶漬け", "おこげ", "rice"],
            FoodCategory::Noodles => &["パスタ", "うどん", "そば", "焼きそば", "ラーメン", "pasta", "noodles"],
            FoodCategory::Vegetables => &["ピーマン", "野菜", "サラダ", "炒め", "vegetables", "salad"],
            FoodCategory::MeatDishes => &["鶏肉", "豚肉", "牛肉", "肉", "唐揚げ", "焼き", "chicken", "pork", "beef"],
            FoodCategory::Seafood => &["魚", "鮭", "まぐろ", "えび", "海鮮", "fish", "salmon", "seafood"],
            FoodCategory::Soups => &["スープ", "汁", "味噌汁", "soup", "broth"],
            FoodCategory::EggDishes => &["卵", "親子丼", "オムライス", "egg", "omelet"],
            FoodCategory::Default => &[],
        }
    }

    pub fn image_urls(self) -> &'static [&'static str] {
        match self {
            FoodCategory::RiceDishes => &[
                "https://images.unsplash.com/photo-1603133872878-684f208fb84b?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1588166524941-3bf61a9c41db?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1626645738196-c2a7c87a8f58?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1617093727343-374698b1b08d?w=512&h=512&fit=crop&auto=format&q=80",
            ],
            FoodCategory::Noodles => &[
                "https://images.unsplash.com/photo-1621996346565-e3dbc353d2e5?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1563379091339-03246963d51a?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1555126634-323283e090fa?w=512&h=512&fit=crop&auto=format&q=80",
            ],
            FoodCategory::Vegetables => &[
                "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1540420773420-3366772f4999?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1529059997568-3d847b1154f0?w=512&h=512&fit=crop&auto=format&q=80",
            ],
            FoodCategory::MeatDishes => &[
                "https://images.unsplash.com/photo-1532636875304-0c89119d9b4d?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1529193591184-b1d58069ecdd?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1544025162-d76694265947?w=512&h=512&fit=crop&auto=format&q=80",
            ],
            FoodCategory::Seafood => &[
                "https://images.unsplash.com/photo-1544943910-4c1dc44aab44?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1559847844-d05fcb51d842?w=512&h=512&fit=crop&auto=format&q=80",
            ],
            FoodCategory::Soups => &[
                "https://images.unsplash.com/photo-1547592166-23ac45744acd?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1516684732162-798a0062be99?w=512&h=512&fit=crop&auto=format&q=80",
            ],
            FoodCategory::EggDishes => &[
                "https://images.unsplash.com/photo-1525351484163-7529414344d8?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1482049016688-2d3e1b311543?w=512&h=512&fit=crop&auto=format&q=80",
            ],
            FoodCategory::Default => &[
                "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1567620905732-2d1ec7ab7445?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1565958011703-44f9829ba187?w=512&h=512&fit=crop&auto=format&q=80",
                "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=512&h=512&fit=crop&auto=format&q=80",
            ],
        }
    }

    fn matches(self, text: &str) -> bool {
        self.keywords().iter().any(|keyword| text.contains(keyword))
    }
}

fn match_category(text: &str) -> Option<FoodCategory> {
    let lowered = text.to_lowercase();
    FoodCategory::MATCH_ORDER
        .iter()
        .copied()
        .find(|category| category.matches(&lowered))
}

/// Category from the recipe name, else from the first ingredient that matches, else default.
pub fn categorize<S: AsRef<str>>(recipe_name: &str, ingredients: &[S]) -> FoodCategory {
    match_category(recipe_name)
        .or_else(|| ingredients.iter().find_map(|i| match_category(i.as_ref())))
        .unwrap_or(FoodCategory::Default)
}

/// Picks a stock photo by keyword category. Never fails.
#[derive(Debug)]
pub struct StaticImageProvider {
    rng: Mutex<StdRng>,
}

impl StaticImageProvider {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Synchronous pick with a caller-supplied random source.
    pub fn pick<S: AsRef<str>, R: Rng + ?Sized>(recipe_name: &str, ingredients: &[S], rng: &mut R) -> ImageReference {
        let category = categorize(recipe_name, ingredients);
        let url = category
            .image_urls()
            .choose(rng)
            .or_else(|| FoodCategory::Default.image_urls().first())
            .copied()
            .unwrap_or_default();
        tracing::debug!(recipe_name, category = category.as_str(), url, "selected placeholder image");
        ImageReference {
            url: url.to_string(),
            category: category.as_str().to_string(),
            source: ImageSource::Placeholder,
        }
    }
}

impl Default for StaticImageProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageProvider for StaticImageProvider {
    async fn generate(&self, recipe_name: &str, ingredients: &[String]) -> Result<ImageReference, ProviderError> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(Self::pick(recipe_name, ingredients, &mut *rng))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
