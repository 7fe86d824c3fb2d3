use serde::{Deserialize, Serialize};

pub const PROTEIN_IDS: &[&str] = &[
    "chicken", "pork", "beef", "ground_meat", "salmon", "tuna", "shrimp", "egg", "tofu", "natto",
];

pub const CARB_IDS: &[&str] = &["rice", "pasta", "bread", "udon", "soba"];

pub const VEGETABLE_IDS: &[&str] = &[
    "onion", "carrot", "potato", "cabbage", "tomato", "cucumber", "lettuce", "spinach", "mushroom",
    "bell_pepper",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookingMethod {
    StirFry,
    Simmer,
    Grill,
    Steam,
    Soup,
    Salad,
}

impl CookingMethod {
    pub const ALL: [CookingMethod; 6] = [
        CookingMethod::StirFry,
        CookingMethod::Simmer,
        CookingMethod::Grill,
        CookingMethod::Steam,
        CookingMethod::Soup,
        CookingMethod::Salad,
    ];

    /// Minutes before the per-ingredient allowance is added.
    pub fn base_minutes(self) -> u32 {
        match self {
            CookingMethod::StirFry => 10,
            CookingMethod::Simmer => 20,
            CookingMethod::Grill => 12,
            CookingMethod::Steam => 15,
            CookingMethod::Soup => 15,
            CookingMethod::Salad => 5,
        }
    }

    pub fn name_suffix(self) -> &'static str {
        match self {
            CookingMethod::StirFry => "炒め",
            CookingMethod::Simmer => "煮込み",
            CookingMethod::Grill => "ソテー",
            CookingMethod::Steam => "蒸し",
            CookingMethod::Soup => "スープ",
            CookingMethod::Salad => "サラダ",
        }
    }

    pub fn base_seasonings(self) -> &'static [&'static str] {
        match self {
            CookingMethod::StirFry => &["サラダ油", "醤油", "塩", "こしょう"],
            CookingMethod::Simmer => &["醤油", "みりん", "砂糖", "だし"],
            CookingMethod::Grill => &["塩", "こしょう", "オリーブオイル"],
            CookingMethod::Steam => &["酒", "塩", "ポン酢"],
            CookingMethod::Soup => &["コンソメ", "塩", "こしょう"],
            CookingMethod::Salad => &["オリーブオイル", "酢", "塩"],
        }
    }

    /// Five steps for a protein + vegetable subset. `{protein}`, `{vegetable}` and `{carb}` are filled in by the synthesizer.
    pub fn step_template(self) -> [&'static str; 5] {
        match self {
            CookingMethod::StirFry => [
                "{protein}と{vegetable}を食べやすい大きさに切る",
                "フライパンにサラダ油を熱し、{protein}を中火で炒める",
                "{protein}に火が通ったら{vegetable}を加えてさっと炒める",
                "調味料を回し入れて全体にからめる",
                "器に盛り付け、{carb}と一緒にいただく",
            ],
            CookingMethod::Simmer => [
                "{protein}と{vegetable}をひと口大に切る",
                "鍋にだしと調味料を合わせて煮立てる",
                "{protein}を入れてアクを取りながら5分煮る",
                "{vegetable}を加え、落とし蓋をして弱火で煮込む",
                "味がしみたら火を止めて器に盛り、{carb}を添える",
            ],
            CookingMethod::Grill => [
                "{protein}に塩こしょうで下味をつける",
                "{vegetable}を食べやすく切る",
                "フライパンにオリーブオイルを熱し、{protein}を焼き色がつくまで焼く",
                "空いたところで{vegetable}を焼き、全体に火を通す",
                "皿に盛り付け、{carb}を添えて完成",
            ],
            CookingMethod::Steam => [
                "{protein}と{vegetable}を薄切りにする",
                "耐熱皿に{vegetable}を敷き、{protein}をのせる",
                "酒と塩をふり、ふんわりとラップをかける",
                "電子レンジか蒸し器で火が通るまで蒸す",
                "ポン酢をかけて、{carb}と一緒に盛り付ける",
            ],
            CookingMethod::Soup => [
                "{protein}と{vegetable}を小さめに切る",
                "鍋に水を入れて沸かし、コンソメを溶かす",
                "{protein}を入れて煮立てる",
                "{vegetable}を加えて柔らかくなるまで煮る",
                "塩こしょうで味を整え、{carb}を添えて器によそう",
            ],
            CookingMethod::Salad => [
                "{vegetable}を洗って水気をよく切る",
                "{protein}を食べやすい大きさにする（加熱が必要なものは火を通す）",
                "ボウルでオリーブオイル・酢・塩を混ぜてドレッシングを作る",
                "{vegetable}と{protein}をドレッシングで和える",
                "器に盛り付け、{carb}を添えて完成",
            ],
        }
    }

    /// Five steps for a subset with a single main ingredient, filled through `{main}` and `{carb}`.
    pub fn single_step_template(self) -> [&'static str; 5] {
        match self {
            CookingMethod::StirFry => [
                "{main}を食べやすい大きさに切る",
                "フライパンにサラダ油を熱し、{main}を中火で炒める",
                "全体に火が通るまで手早く炒め合わせる",
                "調味料を回し入れて全体にからめる",
                "器に盛り付け、{carb}と一緒にいただく",
            ],
            CookingMethod::Simmer => [
                "{main}をひと口大に切る",
                "鍋にだしと調味料を合わせて煮立てる",
                "{main}を入れてアクを取りながら5分煮る",
                "落とし蓋をして弱火でじっくり煮込む",
                "味がしみたら火を止めて器に盛り、{carb}を添える",
            ],
            CookingMethod::Grill => [
                "{main}を食べやすく切り、塩こしょうで下味をつける",
                "フライパンにオリーブオイルを熱する",
                "{main}を並べ、焼き色がつくまで焼く",
                "裏返して中まで火を通す",
                "皿に盛り付け、{carb}を添えて完成",
            ],
            CookingMethod::Steam => [
                "{main}を薄切りにする",
                "耐熱皿に{main}を並べる",
                "酒と塩をふり、ふんわりとラップをかける",
                "電子レンジか蒸し器で火が通るまで蒸す",
                "ポン酢をかけて、{carb}と一緒に盛り付ける",
            ],
            CookingMethod::Soup => [
                "{main}を小さめに切る",
                "鍋に水を入れて沸かし、コンソメを溶かす",
                "{main}を入れて煮立てる",
                "弱火にして柔らかくなるまで煮る",
                "塩こしょうで味を整え、{carb}を添えて器によそう",
            ],
            CookingMethod::Salad => [
                "{main}を食べやすい大きさにする（加熱が必要なものは火を通す）",
                "水気をよく切っておく",
                "ボウルでオリーブオイル・酢・塩を混ぜてドレッシングを作る",
                "{main}をドレッシングで和える",
                "器に盛り付け、{carb}を添えて完成",
            ],
        }
    }

    pub fn tips(self) -> &'static [&'static str] {
        match self {
            CookingMethod::StirFry => &[
                "強火で手早く炒めると、野菜のシャキシャキ感が残ります。",
                "具材の水気をしっかり切っておくと、べちゃっとしません。",
                "調味料は先に合わせておくと、味が均一になります。",
            ],
            CookingMethod::Simmer => &[
                "一度冷ますと味がぐっと染み込みます。",
                "落とし蓋をすると少ない煮汁でも均一に火が通ります。",
                "煮立たせすぎないのが、具材を柔らかく仕上げるコツです。",
            ],
            CookingMethod::Grill => &[
                "焼く前に常温に戻しておくと、中まで均一に火が通ります。",
                "焼いている間は触りすぎず、焼き色をしっかりつけましょう。",
                "仕上げにレモンを絞ると味が引き締まります。",
            ],
            CookingMethod::Steam => &[
                "ラップはふんわりかけて、蒸気の逃げ道を作りましょう。",
                "具材の厚みをそろえると、蒸しムラがなくなります。",
            ],
            CookingMethod::Soup => &[
                "具材から出るうま味を活かして、塩は最後に加えましょう。",
                "火を止める直前に加える具材は、食感が残ります。",
                "多めに作って翌日の朝ごはんにもどうぞ。",
            ],
            CookingMethod::Salad => &[
                "野菜の水気をしっかり切るとドレッシングがよくなじみます。",
                "食べる直前に和えると、シャキッとした食感が楽しめます。",
            ],
        }
    }
}

/// Per-mood generation parameters.
#[derive(Debug, Clone, Copy)]
pub struct MoodProfile {
    pub method_weights: &'static [(CookingMethod, u32)],
    pub styles: &'static [&'static str],
    pub seasoning_additions: &'static [&'static str],
    pub technique_step: &'static str,
    pub encouragement: &'static str,
}

const HAPPY: MoodProfile = MoodProfile {
    method_weights: &[
        (CookingMethod::StirFry, 4),
        (CookingMethod::Grill, 3),
        (CookingMethod::Soup, 1),
        (CookingMethod::Salad, 1),
    ],
    styles: &["元気モリモリ", "パワフル", "ごきげん"],
    seasoning_additions: &["にんにく", "しょうが", "オイスターソース", "バター"],
    technique_step: "仕上げに強火でさっと香ばしさを出す",
    encouragement: "元気な気分でもっと楽しく料理しましょう！",
};

const TIRED: MoodProfile = MoodProfile {
    method_weights: &[
        (CookingMethod::Steam, 4),
        (CookingMethod::Soup, 3),
        (CookingMethod::Simmer, 2),
        (CookingMethod::StirFry, 1),
    ],
    styles: &["ほっこり", "らくらく", "やさしい"],
    seasoning_additions: &["しょうが", "はちみつ", "鶏がらスープの素"],
    technique_step: "洗い物を減らすため、一つの鍋や器で仕上げる",
    encouragement: "疲れた日は無理せず、ゆっくり味わってくださいね。",
};

const HEALTHY: MoodProfile = MoodProfile {
    method_weights: &[
        (CookingMethod::Salad, 4),
        (CookingMethod::Steam, 3),
        (CookingMethod::Soup, 2),
        (CookingMethod::Grill, 1),
    ],
    styles: &["ヘルシー", "さっぱり", "彩り"],
    seasoning_additions: &["レモン汁", "ごま", "黒こしょう", "ハーブ"],
    technique_step: "油は控えめにして、素材の味を活かす",
    encouragement: "体にやさしい一皿で、心も体も整えましょう。",
};

const COMFORT: MoodProfile = MoodProfile {
    method_weights: &[
        (CookingMethod::Simmer, 4),
        (CookingMethod::Soup, 2),
        (CookingMethod::StirFry, 2),
        (CookingMethod::Grill, 1),
    ],
    styles: &["おふくろの味", "ほっとする", "定番"],
    seasoning_additions: &["味噌", "みりん", "バター", "かつお節"],
    technique_step: "弱火でじっくり時間をかけて味をなじませる",
    encouragement: "家庭の味で、ほっと一息つきましょう。",
};

const ADVENTURE: MoodProfile = MoodProfile {
    method_weights: &[
        (CookingMethod::Grill, 3),
        (CookingMethod::StirFry, 3),
        (CookingMethod::Salad, 2),
        (CookingMethod::Soup, 1),
        (CookingMethod::Steam, 1),
        (CookingMethod::Simmer, 1),
    ],
    styles: &["エスニック風", "無国籍", "創作"],
    seasoning_additions: &["ナンプラー", "カレー粉", "パクチー", "クミン"],
    technique_step: "いつもと違うスパイスを少量加えて香りを変えてみる",
    encouragement: "新しい味との出会いを楽しんでください！",
};

const SPICY: MoodProfile = MoodProfile {
    method_weights: &[
        (CookingMethod::StirFry, 4),
        (CookingMethod::Simmer, 2),
        (CookingMethod::Soup, 2),
        (CookingMethod::Grill, 1),
    ],
    styles: &["ピリ辛", "激辛", "スパイシー"],
    seasoning_additions: &["豆板醤", "一味唐辛子", "ラー油", "コチュジャン"],
    technique_step: "辛味調味料は油で先に炒めて香りを立たせる",
    encouragement: "辛さは調整しながら、刺激的な味を楽しみましょう！",
};

const FALLBACK: MoodProfile = MoodProfile {
    method_weights: &[
        (CookingMethod::StirFry, 1),
        (CookingMethod::Simmer, 1),
        (CookingMethod::Grill, 1),
        (CookingMethod::Steam, 1),
        (CookingMethod::Soup, 1),
        (CookingMethod::Salad, 1),
    ],
    styles: &["おまかせ", "シンプル"],
    seasoning_additions: &["ごま油", "にんにく"],
    technique_step: "味見をしながら好みの濃さに調整する",
    encouragement: "今日の気分に合わせて、自由にアレンジしてください。",
};

/// Profile for `mood_id`, or the uniform fallback when the mood is unknown.
pub fn mood_profile(mood_id: &str) -> &'static MoodProfile {
    match mood_id {
        "happy" => &HAPPY,
        "tired" => &TIRED,
        "healthy" => &HEALTHY,
        "comfort" => &COMFORT,
        "adventure" => &ADVENTURE,
        "spicy" => &SPICY,
        _ => &FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOODS: [&str; 6] = ["happy", "tired", "healthy", "comfort", "adventure", "spicy"];

    #[test]
    fn test_every_profile_is_usable() {
        for mood in MOODS.iter().copied().chain(std::iter::once("unknown")) {
            let profile = mood_profile(mood);
            assert!(!profile.method_weights.is_empty(), "{mood}");
            assert!(profile.method_weights.len() <= 6, "{mood}");
            assert!(profile.method_weights.iter().all(|(_, w)| *w > 0), "{mood}");
            assert!(!profile.styles.is_empty(), "{mood}");
            assert!(!profile.seasoning_additions.is_empty(), "{mood}");
        }
    }

    #[test]
    fn test_fallback_is_uniform_over_all_methods() {
        let profile = mood_profile("nope");
        let methods: Vec<_> = profile.method_weights.iter().map(|(m, _)| *m).collect();
        assert_eq!(methods, CookingMethod::ALL.to_vec());
        assert!(profile.method_weights.iter().all(|(_, w)| *w == 1));
    }

    #[test]
    fn test_method_tables_complete() {
        for method in CookingMethod::ALL {
            assert!(!method.tips().is_empty());
            assert!(!method.base_seasonings().is_empty());
            assert!(method.step_template().iter().all(|s| !s.is_empty()));
            assert!(method.single_step_template().iter().all(|s| !s.contains("{protein}") && !s.contains("{vegetable}")));
            assert!(method.single_step_template()[4].contains("{carb}"));
        }
    }

    #[test]
    fn test_role_sets_are_disjoint() {
        for id in PROTEIN_IDS {
            assert!(!CARB_IDS.contains(id) && !VEGETABLE_IDS.contains(id));
        }
        for id in CARB_IDS {
            assert!(!VEGETABLE_IDS.contains(id));
        }
    }
}
