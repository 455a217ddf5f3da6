use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Maximum number of side dishes attached to one main dish
pub const MAX_SIDE_DISHES: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishType {
    Main,
    Side,
    Appetizer,
    Dessert,
    Beverage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    LowCarb,
    Healthy,
}

impl DietaryTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::Vegan => "vegan",
            DietaryTag::GlutenFree => "gluten-free",
            DietaryTag::DairyFree => "dairy-free",
            DietaryTag::LowCarb => "low-carb",
            DietaryTag::Healthy => "healthy",
        }
    }
}

impl fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deduplicated, ordered set of dietary tags.
///
/// Every way of building a set keeps `vegan ⇒ vegetarian`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DietaryTags(BTreeSet<DietaryTag>);

impl DietaryTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: DietaryTag) {
        if tag == DietaryTag::Vegan {
            self.0.insert(DietaryTag::Vegetarian);
        }
        self.0.insert(tag);
    }

    pub fn contains(&self, tag: DietaryTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = DietaryTag> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<DietaryTag> for DietaryTags {
    fn from_iter<I: IntoIterator<Item = DietaryTag>>(iter: I) -> Self {
        let mut tags = DietaryTags::new();
        for tag in iter {
            tags.insert(tag);
        }
        tags
    }
}

impl<'de> Deserialize<'de> for DietaryTags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tags = Vec::<DietaryTag>::deserialize(deserializer)?;
        Ok(tags.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
}

/// Synthetic recipe attached to a side dish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "prep_time")]
    pub prep_time_minutes: u32,
    #[serde(rename = "cook_time")]
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// One enriched catalog record, main or side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishRecord {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub dish_type: DishType,
    pub cuisine: String,
    pub dietary_tags: DietaryTags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// A main dish together with its ordered, de-duplicated side dishes.
///
/// Serializes to the `{"main_dish": ..., "side_dishes": [...]}` payload expected by the
/// import endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingGroup {
    pub main_dish: DishRecord,
    pub side_dishes: Vec<DishRecord>,
}

/// A side dish candidate as delivered by an input adapter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideCandidate {
    pub name: String,
    /// Free text scraped alongside the name, used only for tag inference
    pub description: Option<String>,
}

impl SideCandidate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

impl From<&str> for SideCandidate {
    fn from(name: &str) -> Self {
        SideCandidate::named(name)
    }
}

impl From<String> for SideCandidate {
    fn from(name: String) -> Self {
        SideCandidate::named(name)
    }
}

/// A raw pairing row: a main dish (explicit or derived from a search keyword) and its
/// candidate side dishes in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingInput {
    pub keyword: Option<String>,
    pub main_dish: Option<String>,
    pub sides: Vec<SideCandidate>,
    /// Whether side dish types should be inferred from free-form scraped titles
    pub infer_dish_types: bool,
}

impl PairingInput {
    /// Input derived from a search phrase such as "what to serve with beef wellington"
    pub fn from_keyword<I, S>(keyword: impl Into<String>, sides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SideCandidate>,
    {
        Self {
            keyword: Some(keyword.into()),
            main_dish: None,
            sides: sides.into_iter().map(Into::into).collect(),
            infer_dish_types: false,
        }
    }

    /// Input with an explicit main dish name
    pub fn for_dish<I, S>(main_dish: impl Into<String>, sides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SideCandidate>,
    {
        Self {
            keyword: None,
            main_dish: Some(main_dish.into()),
            sides: sides.into_iter().map(Into::into).collect(),
            infer_dish_types: false,
        }
    }

    /// Label used in logs and failure records before the main dish is resolved
    pub fn label(&self) -> Option<&str> {
        self.main_dish
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.keyword.as_deref().filter(|s| !s.trim().is_empty()))
    }
}
