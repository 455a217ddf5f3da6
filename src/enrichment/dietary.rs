use crate::model::{DietaryTag, DietaryTags};

const PLANT_KEYWORDS: &[&str] = &[
    "salad",
    "vegetable",
    "veggie",
    "asparagus",
    "broccoli",
    "brussels",
    "spinach",
    "carrots",
    "beans",
    "potatoes",
    "mushroom",
    "tomato",
    "pepper",
    "corn",
    "peas",
    "cauliflower",
    "cabbage",
    "lettuce",
    "leeks",
    "onions",
];

const MEAT_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "fish", "shrimp", "bacon", "meat", "salmon", "turkey",
    "sausage", "lobster", "prawn",
];

const DAIRY_KEYWORDS: &[&str] = &["cream", "butter", "cheese", "milk", "yogurt"];

// Matched as whole words: "veggie" and "eggplant" contain "egg".
const EGG_WORDS: &[&str] = &["egg", "eggs"];

const GLUTEN_FREE_KEYWORDS: &[&str] = &["rice", "quinoa", "potato", "corn", "polenta"];

const GLUTEN_KEYWORDS: &[&str] = &[
    "bread",
    "pasta",
    "noodles",
    "couscous",
    "flour",
    "breadcrumb",
    "yorkshire",
];

const LOW_CARB_KEYWORDS: &[&str] = &["salad", "vegetables", "meat", "fish", "cheese"];

const HIGH_CARB_KEYWORDS: &[&str] = &["potato", "rice", "pasta", "bread", "noodles"];

const HEALTHY_KEYWORDS: &[&str] = &["salad", "steamed", "grilled", "fresh", "light", "nutritious"];

/// Labels a scraped description may state outright
const EXPLICIT_LABELS: &[(&str, DietaryTag)] = &[
    ("vegetarian", DietaryTag::Vegetarian),
    ("veggie", DietaryTag::Vegetarian),
    ("vegan", DietaryTag::Vegan),
    ("plant-based", DietaryTag::Vegan),
    ("gluten-free", DietaryTag::GlutenFree),
    ("gluten free", DietaryTag::GlutenFree),
    ("dairy-free", DietaryTag::DairyFree),
    ("dairy free", DietaryTag::DairyFree),
    ("no dairy", DietaryTag::DairyFree),
    ("low-carb", DietaryTag::LowCarb),
    ("low carb", DietaryTag::LowCarb),
    ("keto", DietaryTag::LowCarb),
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

fn contains_word(text: &str, words: &[&str]) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| words.contains(&token))
}

/// Infer dietary tags from a dish name, optionally followed by free text such as a
/// scraped description.
pub fn infer_dietary_tags(text: &str) -> DietaryTags {
    let lower = text.to_lowercase();
    let mut tags = DietaryTags::new();

    let vegetarian = contains_any(&lower, PLANT_KEYWORDS) && !contains_any(&lower, MEAT_KEYWORDS);
    if vegetarian {
        tags.insert(DietaryTag::Vegetarian);
        if !contains_any(&lower, DAIRY_KEYWORDS) && !contains_word(&lower, EGG_WORDS) {
            tags.insert(DietaryTag::Vegan);
        }
    }

    if contains_any(&lower, GLUTEN_FREE_KEYWORDS) && !contains_any(&lower, GLUTEN_KEYWORDS) {
        tags.insert(DietaryTag::GlutenFree);
    }

    if contains_any(&lower, LOW_CARB_KEYWORDS) && !contains_any(&lower, HIGH_CARB_KEYWORDS) {
        tags.insert(DietaryTag::LowCarb);
    }

    if contains_any(&lower, HEALTHY_KEYWORDS) {
        tags.insert(DietaryTag::Healthy);
    }

    for (label, tag) in EXPLICIT_LABELS {
        if !lower.contains(label) {
            continue;
        }
        if *tag == DietaryTag::Vegetarian && lower.contains("non-vegetarian") {
            continue;
        }
        tags.insert(*tag);
    }

    tags
}
