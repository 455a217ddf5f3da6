use crate::enrichment::{
    classify_cuisine, describe_main, describe_side, infer_dietary_tags, seo_description,
    seo_keywords, seo_title, slugify, RecipePolicy,
};
use crate::model::{
    DishRecord, DishType, PairingGroup, PairingInput, SideCandidate, MAX_SIDE_DISHES,
};
use log::debug;
use std::collections::HashSet;

/// Search-phrase prefixes stripped when deriving a main dish name from a keyword
const KEYWORD_PREFIXES: &[&str] = &[
    "what to serve with ",
    "what goes with ",
    "what to eat with ",
    "sides for ",
];

const SIDE_TITLE_WORDS: &[&str] = &["salad", "rice", "bread", "vegetable", "potato"];
const DESSERT_TITLE_WORDS: &[&str] = &["cake", "pie", "pudding", "ice cream"];
const APPETIZER_TITLE_WORDS: &[&str] = &["soup", "dip", "appetizer"];
const BEVERAGE_TITLE_WORDS: &[&str] = &["juice", "smoothie", "tea", "coffee"];

/// Knobs the assembler needs from the caller
#[derive(Debug, Clone)]
pub struct AssemblyOptions {
    pub recipe_policy: RecipePolicy,
    /// Brand appended to SEO titles
    pub site_name: String,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            recipe_policy: RecipePolicy::Always,
            site_name: "PairDish".to_string(),
        }
    }
}

/// Capitalize the first letter of every word and lowercase the rest
pub(crate) fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive a display name from a search phrase such as "what to serve with beef wellington"
pub fn main_dish_from_keyword(keyword: &str) -> String {
    let keyword = keyword.trim();
    let stripped = KEYWORD_PREFIXES
        .iter()
        .find_map(|prefix| {
            if keyword.eq_ignore_ascii_case(prefix.trim_end()) {
                return Some("");
            }
            keyword
                .get(..prefix.len())
                .filter(|head| head.eq_ignore_ascii_case(prefix))
                .map(|_| &keyword[prefix.len()..])
        })
        .unwrap_or(keyword);

    capitalize_words(stripped)
}

/// Resolve the main dish name of an input, or `None` if nothing usable remains
pub fn resolve_main_dish(input: &PairingInput) -> Option<String> {
    let explicit = input
        .main_dish
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());

    let name = match explicit {
        Some(name) => name.to_string(),
        None => main_dish_from_keyword(input.keyword.as_deref().unwrap_or_default()),
    };

    if name.trim().is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Guess a dish type from a free-form scraped title
pub fn infer_dish_type(title: &str) -> DishType {
    let lower = title.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(SIDE_TITLE_WORDS) {
        DishType::Side
    } else if has(DESSERT_TITLE_WORDS) {
        DishType::Dessert
    } else if has(APPETIZER_TITLE_WORDS) {
        DishType::Appetizer
    } else if has(BEVERAGE_TITLE_WORDS) {
        DishType::Beverage
    } else {
        DishType::Main
    }
}

/// Drop blank and repeated (case-insensitive) side names, keep input order, cap at
/// [`MAX_SIDE_DISHES`]
pub fn select_sides(sides: &[SideCandidate]) -> Vec<&SideCandidate> {
    let mut seen = HashSet::new();
    sides
        .iter()
        .filter(|side| {
            let key = side.name.trim().to_lowercase();
            !key.is_empty() && seen.insert(key)
        })
        .take(MAX_SIDE_DISHES)
        .collect()
}

fn build_main(
    name: &str,
    cuisine: &str,
    query: Option<&str>,
    side_count: usize,
    options: &AssemblyOptions,
) -> DishRecord {
    DishRecord {
        name: name.to_string(),
        slug: slugify(name),
        description: describe_main(name, cuisine),
        dish_type: DishType::Main,
        cuisine: cuisine.to_string(),
        dietary_tags: infer_dietary_tags(name),
        recipe: None,
        seo_title: Some(seo_title(name, side_count, &options.site_name)),
        seo_description: Some(seo_description(name, cuisine)),
        keywords: seo_keywords(name, cuisine, query),
    }
}

fn build_side(
    side: &SideCandidate,
    main_name: &str,
    infer_types: bool,
    options: &AssemblyOptions,
) -> DishRecord {
    let name = side.name.trim();

    let cuisine = classify_cuisine(name);

    let tag_text = match side.description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => format!("{name} {description}"),
        _ => name.to_string(),
    };

    let dish_type = if infer_types {
        match infer_dish_type(name) {
            DishType::Main => DishType::Side,
            inferred => inferred,
        }
    } else {
        DishType::Side
    };

    DishRecord {
        name: name.to_string(),
        slug: slugify(name),
        description: describe_side(name, main_name),
        dish_type,
        cuisine: cuisine.to_string(),
        dietary_tags: infer_dietary_tags(&tag_text),
        recipe: options.recipe_policy.recipe_for(name),
        seo_title: None,
        seo_description: None,
        keywords: Vec::new(),
    }
}

/// Assemble the enriched pairing group for one input.
///
/// Returns `None` only when no main dish name can be resolved.
pub fn assemble(input: &PairingInput, options: &AssemblyOptions) -> Option<PairingGroup> {
    let main_name = resolve_main_dish(input)?;
    let cuisine = classify_cuisine(&main_name);
    let sides = select_sides(&input.sides);

    debug!(
        "Assembling {} ({}) with {} of {} side candidates",
        main_name,
        cuisine,
        sides.len(),
        input.sides.len()
    );

    let main_dish = build_main(
        &main_name,
        cuisine,
        input.keyword.as_deref(),
        sides.len(),
        options,
    );
    let side_dishes = sides
        .into_iter()
        .map(|side| build_side(side, &main_name, input.infer_dish_types, options))
        .collect();

    Some(PairingGroup {
        main_dish,
        side_dishes,
    })
}
