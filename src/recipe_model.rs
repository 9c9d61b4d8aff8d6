//! # Recipe Data Model
//!
//! This module defines the data structures for catalog recipes and their
//! derived, display-ready summaries. Recipes are immutable once loaded;
//! summaries are transient projections produced by filtering and enrichment.
//!
//! ## Core Concepts
//!
//! - **Recipe**: an immutable catalog record with a stable integer id
//! - **RecipeSummary**: a display projection plus match/enrichment metadata
//! - **Ingredient token**: one lowercase trimmed entry of the recipe's
//!   comma-separated ingredient text, used for matching
//! - **Substitution**: a suggested replacement for a missed ingredient
//!
//! ## Usage
//!
//! ```rust
//! use recipe_catalog::recipe_model::Recipe;
//!
//! let recipe = Recipe::sample(1, "Masala Omelette", "egg, milk, onion");
//! assert_eq!(recipe.ingredient_tokens(), vec!["egg", "milk", "onion"]);
//! ```

use serde::{Deserialize, Serialize};

/// A nutrition value as provided by the source dataset
///
/// The dataset is inconsistent: some records carry calories/protein as
/// strings, others as numbers, most not at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceNutrition {
    /// Free-text value (e.g. "320 kcal")
    Text(String),
    /// Plain numeric value
    Number(f64),
}

impl SourceNutrition {
    /// Render the source value as a display string
    pub fn display(&self) -> String {
        match self {
            SourceNutrition::Text(s) => s.clone(),
            SourceNutrition::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
        }
    }
}

/// An immutable catalog recipe
///
/// The `id` is assigned once at load time (1-based, in file order) and never
/// reused or mutated for the process lifetime. Serde names match the source
/// dataset fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier, assigned at load time
    #[serde(default)]
    pub id: u32,

    /// Recipe display name
    #[serde(rename = "TranslatedRecipeName")]
    pub name: String,

    /// Image URL, absent for some records
    #[serde(rename = "image-url", default)]
    pub image_url: Option<String>,

    /// Cuisine label (e.g. "Indian", "Continental")
    #[serde(rename = "Cuisine", default)]
    pub cuisine: String,

    /// Total preparation time in minutes
    #[serde(rename = "TotalTimeInMins", default)]
    pub total_time_minutes: u32,

    /// Source-provided calories, if any
    #[serde(rename = "Calories", default)]
    pub calories_raw: Option<SourceNutrition>,

    /// Source-provided protein, if any
    #[serde(rename = "Protein", default)]
    pub protein_raw: Option<SourceNutrition>,

    /// Comma-separated ingredient text
    #[serde(rename = "Cleaned-Ingredients", default)]
    pub cleaned_ingredients: String,
}

impl Recipe {
    /// Ingredient tokens used for matching: split on commas, trimmed,
    /// lowercased, empties discarded
    pub fn ingredient_tokens(&self) -> Vec<String> {
        self.cleaned_ingredients
            .split(',')
            .map(|ing| ing.trim().to_lowercase())
            .filter(|ing| !ing.is_empty())
            .collect()
    }

    /// Ingredient items for the shopping list: trimmed but original case
    pub fn shopping_items(&self) -> Vec<String> {
        self.cleaned_ingredients
            .split(',')
            .map(|ing| ing.trim().to_string())
            .filter(|ing| !ing.is_empty())
            .collect()
    }

    /// Construct a minimal recipe, for tests and documentation examples
    pub fn sample(id: u32, name: &str, cleaned_ingredients: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            image_url: None,
            cuisine: String::new(),
            total_time_minutes: 0,
            calories_raw: None,
            protein_raw: None,
            cleaned_ingredients: cleaned_ingredients.to_string(),
        }
    }
}

/// A suggested replacement for a missed ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    /// The missed ingredient
    pub original: String,
    /// Replacement, or the explicit "No substitute available" marker
    pub substitute: String,
}

/// A derived, display-ready projection of a recipe
///
/// Produced by the filter engine and completed by the enrichment service.
/// `calories`, `protein` and `image` stay `None` until enrichment fills them
/// with either the source value or a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Recipe id this summary projects
    pub id: u32,

    /// Recipe display name
    pub title: String,

    /// Image URL; placeholder supplied on enrichment when absent
    pub image: Option<String>,

    /// Total preparation time in minutes
    #[serde(rename = "prepTime")]
    pub prep_time: u32,

    /// Calories display value (source or "Approx." placeholder)
    pub calories: Option<String>,

    /// Protein display value (source or "Approx." placeholder)
    pub protein: Option<String>,

    /// Number of ingredient tokens not satisfied by the user's list
    #[serde(rename = "missedIngredientCount")]
    pub missed_ingredient_count: usize,

    /// The unsatisfied ingredient tokens, in recipe order
    #[serde(rename = "missedIngredients")]
    pub missed_ingredients: Vec<String>,

    /// Number of satisfied ingredient tokens; only set by ingredient matching
    #[serde(rename = "matchCount", skip_serializing_if = "Option::is_none")]
    pub match_count: Option<usize>,

    /// Substitutions for missed ingredients; only set on request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitutions: Option<Vec<Substitution>>,
}

impl RecipeSummary {
    /// Project a recipe into a summary with no match metadata
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.name.clone(),
            image: recipe.image_url.clone(),
            prep_time: recipe.total_time_minutes,
            calories: recipe.calories_raw.as_ref().map(SourceNutrition::display),
            protein: recipe.protein_raw.as_ref().map(SourceNutrition::display),
            missed_ingredient_count: 0,
            missed_ingredients: Vec::new(),
            match_count: None,
            substitutions: None,
        }
    }
}
