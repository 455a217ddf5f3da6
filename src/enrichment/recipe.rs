use crate::model::{Difficulty, Recipe};
use serde::Deserialize;

const DEFAULT_SERVINGS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookingMethod {
    Oven,
    BoilAndMash,
    NoCook,
    Steam,
    Pan,
    CookAndGlaze,
    SlowCook,
    Generic,
}

impl CookingMethod {
    /// Phrase substituted into the final cooking step
    fn phrase(&self) -> &'static str {
        match self {
            CookingMethod::Oven => "roasted in the oven until golden and tender",
            CookingMethod::BoilAndMash => "boiled until tender, then mashed until smooth",
            CookingMethod::NoCook => "freshly tossed together",
            CookingMethod::Steam => "steamed until just tender",
            CookingMethod::Pan => "sautéed in a hot pan until tender",
            CookingMethod::CookAndGlaze => "cooked until tender and glazed",
            CookingMethod::SlowCook => "slowly cooked until rich and creamy",
            CookingMethod::Generic => "prepared until cooked through",
        }
    }
}

struct MethodRule {
    keywords: &'static [&'static str],
    method: CookingMethod,
    prep: u32,
    cook: u32,
    difficulty: Difficulty,
}

/// Checked in order, first match wins
const METHOD_RULES: &[MethodRule] = &[
    MethodRule {
        keywords: &["roast"],
        method: CookingMethod::Oven,
        prep: 15,
        cook: 45,
        difficulty: Difficulty::Easy,
    },
    MethodRule {
        keywords: &["mashed"],
        method: CookingMethod::BoilAndMash,
        prep: 10,
        cook: 20,
        difficulty: Difficulty::Easy,
    },
    MethodRule {
        keywords: &["salad"],
        method: CookingMethod::NoCook,
        prep: 15,
        cook: 0,
        difficulty: Difficulty::Easy,
    },
    MethodRule {
        keywords: &["steamed"],
        method: CookingMethod::Steam,
        prep: 5,
        cook: 10,
        difficulty: Difficulty::Easy,
    },
    MethodRule {
        keywords: &["sauté", "saute"],
        method: CookingMethod::Pan,
        prep: 10,
        cook: 15,
        difficulty: Difficulty::Easy,
    },
    MethodRule {
        keywords: &["glazed"],
        method: CookingMethod::CookAndGlaze,
        prep: 10,
        cook: 25,
        difficulty: Difficulty::Medium,
    },
    MethodRule {
        keywords: &["soup", "risotto"],
        method: CookingMethod::SlowCook,
        prep: 15,
        cook: 30,
        difficulty: Difficulty::Medium,
    },
];

static GENERIC_RULE: MethodRule = MethodRule {
    keywords: &[],
    method: CookingMethod::Generic,
    prep: 15,
    cook: 20,
    difficulty: Difficulty::Medium,
};

/// Extra ingredient lines; only the first matching entry applies
const EXTRA_INGREDIENTS: &[(&str, &[&str])] = &[
    (
        "glazed",
        &["2 tablespoons honey or maple syrup", "1 tablespoon balsamic vinegar"],
    ),
    ("mashed", &["1/2 cup warm milk or cream", "3 tablespoons butter"]),
    ("almondine", &["1/4 cup sliced almonds"]),
    ("garlic", &["3-4 cloves garlic, minced"]),
];

/// Words describing the preparation rather than the ingredient itself
const METHOD_WORDS: &[&str] = &[
    "roasted", "roast", "steamed", "glazed", "mashed", "sautéed", "sauteed", "creamy",
];

/// Keywords that signal a dish worth attaching a synthetic recipe to
const PREPARATION_KEYWORDS: &[&str] = &[
    "roast", "mashed", "salad", "steamed", "sauté", "saute", "glazed", "grilled", "baked",
    "fried", "soup", "risotto", "rice", "potatoes", "vegetables", "sauce", "dip",
];

/// Whether side dishes always get a recipe or only when their name suggests one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipePolicy {
    #[default]
    Always,
    WhenPrepared,
}

impl RecipePolicy {
    pub fn recipe_for(&self, dish_name: &str) -> Option<Recipe> {
        match self {
            RecipePolicy::Always => Some(synthesize_recipe(dish_name)),
            RecipePolicy::WhenPrepared if has_preparation_keyword(dish_name) => {
                Some(synthesize_recipe(dish_name))
            }
            RecipePolicy::WhenPrepared => None,
        }
    }
}

pub fn has_preparation_keyword(dish_name: &str) -> bool {
    let lower = dish_name.to_lowercase();
    PREPARATION_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// The cooking method selected for a dish name
pub fn cooking_method(dish_name: &str) -> CookingMethod {
    select_rule(&dish_name.to_lowercase()).method
}

fn select_rule(lower: &str) -> &'static MethodRule {
    METHOD_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .unwrap_or(&GENERIC_RULE)
}

/// The dish name with preparation words removed, lowercased
fn main_ingredient(dish_name: &str) -> String {
    let remaining: Vec<&str> = dish_name
        .split_whitespace()
        .filter(|word| !METHOD_WORDS.contains(&word.to_lowercase().as_str()))
        .collect();

    if remaining.is_empty() {
        dish_name.trim().to_lowercase()
    } else {
        remaining.join(" ").to_lowercase()
    }
}

/// Build a templated recipe for a side dish from its name alone
pub fn synthesize_recipe(dish_name: &str) -> Recipe {
    let lower = dish_name.to_lowercase();
    let rule = select_rule(&lower);
    let ingredient = main_ingredient(dish_name);

    let mut ingredients = vec![
        format!("2 lbs fresh {ingredient}"),
        "2 tablespoons olive oil or butter".to_string(),
        "Salt and pepper to taste".to_string(),
        "Fresh herbs (thyme, rosemary, or parsley)".to_string(),
    ];
    if let Some((_, extra)) = EXTRA_INGREDIENTS.iter().find(|(k, _)| lower.contains(k)) {
        ingredients.extend(extra.iter().map(|line| line.to_string()));
    }

    let first_step = match rule.method {
        CookingMethod::Oven => "Preheat your oven to 400°F (200°C)".to_string(),
        CookingMethod::Steam => "Set up a steamer basket over boiling water".to_string(),
        _ => format!("Prepare your {ingredient}"),
    };
    let instructions = vec![
        first_step,
        format!("Clean and prepare the {ingredient}, cutting into even pieces if needed"),
        "Season with salt, pepper, and herbs".to_string(),
        format!("Cook until {}", rule.method.phrase()),
        "Adjust seasoning to taste and serve hot".to_string(),
    ];

    Recipe {
        prep_time_minutes: rule.prep,
        cook_time_minutes: rule.cook,
        servings: DEFAULT_SERVINGS,
        difficulty: rule.difficulty,
        ingredients,
        instructions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roasted_rule() {
        let recipe = synthesize_recipe("Roasted Potatoes");
        assert_eq!(recipe.prep_time_minutes, 15);
        assert_eq!(recipe.cook_time_minutes, 45);
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.ingredients[0], "2 lbs fresh potatoes");
        assert!(recipe.instructions[0].contains("Preheat your oven"));
    }

    #[test]
    fn test_roasted_beats_glazed() {
        let recipe = synthesize_recipe("Roasted Glazed Carrots");
        assert_eq!(recipe.prep_time_minutes, 15);
        assert_eq!(recipe.cook_time_minutes, 45);
        assert_eq!(cooking_method("Roasted Glazed Carrots"), CookingMethod::Oven);
    }

    #[test]
    fn test_precedence_table() {
        let cases = [
            ("Truffle Mashed Potatoes", CookingMethod::BoilAndMash, 10, 20),
            ("Caesar Salad", CookingMethod::NoCook, 15, 0),
            ("Steamed Asparagus", CookingMethod::Steam, 5, 10),
            ("Sautéed Mushrooms", CookingMethod::Pan, 10, 15),
            ("Sauteed Spinach", CookingMethod::Pan, 10, 15),
            ("Glazed Carrots", CookingMethod::CookAndGlaze, 10, 25),
            ("Mushroom Risotto", CookingMethod::SlowCook, 15, 30),
            ("Miso Soup", CookingMethod::SlowCook, 15, 30),
            ("Yorkshire Pudding", CookingMethod::Generic, 15, 20),
        ];
        for (name, method, prep, cook) in cases {
            let recipe = synthesize_recipe(name);
            assert_eq!(cooking_method(name), method, "{name}");
            assert_eq!(recipe.prep_time_minutes, prep, "{name}");
            assert_eq!(recipe.cook_time_minutes, cook, "{name}");
        }
    }

    #[test]
    fn test_difficulty() {
        assert_eq!(synthesize_recipe("Glazed Carrots").difficulty, Difficulty::Medium);
        assert_eq!(synthesize_recipe("Miso Soup").difficulty, Difficulty::Medium);
        assert_eq!(synthesize_recipe("Coleslaw").difficulty, Difficulty::Medium);
        assert_eq!(synthesize_recipe("Garden Salad").difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_extra_ingredients() {
        let glazed = synthesize_recipe("Honey Glazed Brussels Sprouts");
        assert!(glazed.ingredients.iter().any(|i| i.contains("honey")));
        assert!(glazed.ingredients.iter().any(|i| i.contains("balsamic vinegar")));

        let mashed = synthesize_recipe("Garlic Mashed Potatoes");
        assert!(mashed.ingredients.iter().any(|i| i.contains("milk")));
        // first matching sub-pattern only
        assert!(!mashed.ingredients.iter().any(|i| i.contains("cloves garlic")));

        let almondine = synthesize_recipe("Green Beans Almondine");
        assert!(almondine.ingredients.iter().any(|i| i.contains("almonds")));

        let garlic = synthesize_recipe("Garlic Bread");
        assert!(garlic.ingredients.iter().any(|i| i.contains("cloves garlic")));

        assert_eq!(synthesize_recipe("Coleslaw").ingredients.len(), 4);
    }

    #[test]
    fn test_method_words_removed_from_ingredient() {
        let recipe = synthesize_recipe("Creamy Mashed Potatoes");
        assert_eq!(recipe.ingredients[0], "2 lbs fresh potatoes");
        let recipe = synthesize_recipe("Roasted");
        assert_eq!(recipe.ingredients[0], "2 lbs fresh roasted");
    }

    #[test]
    fn test_recipe_policy() {
        assert!(RecipePolicy::Always.recipe_for("Yorkshire Pudding").is_some());
        assert!(RecipePolicy::WhenPrepared.recipe_for("Yorkshire Pudding").is_none());
        assert!(RecipePolicy::WhenPrepared.recipe_for("Roasted Potatoes").is_some());
        assert!(RecipePolicy::WhenPrepared.recipe_for("Mint Sauce").is_some());
    }
}
