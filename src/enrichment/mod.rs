//! Deterministic rules that turn a bare dish name into catalog fields.

pub mod cuisine;
pub mod describe;
pub mod dietary;
pub mod recipe;
pub mod slug;

pub use cuisine::{classify_cuisine, INTERNATIONAL};
pub use describe::{
    describe_main, describe_side, seo_description, seo_keywords, seo_title, stable_hash,
};
pub use dietary::infer_dietary_tags;
pub use recipe::{cooking_method, synthesize_recipe, CookingMethod, RecipePolicy};
pub use slug::slugify;
