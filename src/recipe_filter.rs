//! # Recipe Filter Engine
//!
//! This module provides the two query modes over the recipe store: a
//! name/attribute filter and the ingredient-match ranking used to recommend
//! recipes from a user-supplied ingredient list.
//!
//! ## Matching semantics
//!
//! An ingredient token counts as matched when it *contains* one of the user's
//! terms as a substring: the user term is the needle, the recipe token the
//! haystack. "egg" therefore matches "2 eggs", but a user term "2 eggs" does
//! not match the token "egg". The direction is load-bearing and must not be
//! reversed.
//!
//! ## Ranking
//!
//! Ranked results reward recipes that use more of what the user already has
//! (`match_count` descending) and, among ties, recipes requiring fewer
//! additional purchases (`missed_ingredient_count` ascending). Only the top
//! five survive.

use crate::catalog_config::INGREDIENT_MATCH_RESULT_CAP;
use crate::recipe_model::RecipeSummary;
use crate::recipe_store::RecipeStore;

/// Name/attribute query; all present filters AND together
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    /// Case-insensitive substring match against the recipe name
    pub query: String,
    /// Case-insensitive exact cuisine match
    pub cuisine: Option<String>,
    /// Inclusive upper bound on total time in minutes
    pub max_time: Option<u32>,
    /// Case-insensitive substring match against the raw ingredient text;
    /// recipes containing it are dropped
    pub exclude_ingredient: Option<String>,
}

impl NameFilter {
    /// Filter on a name query alone
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// Apply the name/attribute filter, preserving store order
///
/// No ranking and no result cap; summaries carry no match metadata.
pub fn filter_by_name(store: &RecipeStore, filter: &NameFilter) -> Vec<RecipeSummary> {
    let query = filter.query.to_lowercase();
    let cuisine = filter.cuisine.as_ref().map(|c| c.to_lowercase());
    let exclude = filter.exclude_ingredient.as_ref().map(|e| e.to_lowercase());

    store
        .all()
        .iter()
        .filter(|recipe| recipe.name.to_lowercase().contains(&query))
        .filter(|recipe| match &cuisine {
            Some(cuisine) => recipe.cuisine.to_lowercase() == *cuisine,
            None => true,
        })
        .filter(|recipe| match filter.max_time {
            Some(max_time) => recipe.total_time_minutes <= max_time,
            None => true,
        })
        .filter(|recipe| match &exclude {
            Some(exclude) => !recipe.cleaned_ingredients.to_lowercase().contains(exclude),
            None => true,
        })
        .map(RecipeSummary::from_recipe)
        .collect()
}

/// Rank recipes against a user-supplied ingredient list
///
/// Zero-match recipes are excluded; the result is sorted by match count
/// descending with missed-ingredient count as tie-break, then truncated to
/// the top five. An empty ingredient list yields an empty result.
pub fn filter_by_ingredients(store: &RecipeStore, user_ingredients: &[String]) -> Vec<RecipeSummary> {
    let user_terms: Vec<String> = user_ingredients
        .iter()
        .map(|ing| ing.trim().to_lowercase())
        .filter(|ing| !ing.is_empty())
        .collect();

    let mut summaries: Vec<RecipeSummary> = store
        .all()
        .iter()
        .map(|recipe| {
            let tokens = recipe.ingredient_tokens();
            let (matched, missed): (Vec<String>, Vec<String>) = tokens
                .into_iter()
                .partition(|token| user_terms.iter().any(|term| token.contains(term.as_str())));

            let mut summary = RecipeSummary::from_recipe(recipe);
            summary.match_count = Some(matched.len());
            summary.missed_ingredient_count = missed.len();
            summary.missed_ingredients = missed;
            summary
        })
        .filter(|summary| summary.match_count.unwrap_or(0) > 0)
        .collect();

    summaries.sort_by(|a, b| {
        b.match_count
            .cmp(&a.match_count)
            .then(a.missed_ingredient_count.cmp(&b.missed_ingredient_count))
    });
    summaries.truncate(INGREDIENT_MATCH_RESULT_CAP);
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_model::Recipe;

    fn sample_store() -> RecipeStore {
        let mut omelette = Recipe::sample(0, "Masala Omelette", "egg, onion, chilli");
        omelette.cuisine = "Indian".to_string();
        omelette.total_time_minutes = 15;

        let mut pancakes = Recipe::sample(0, "Chocolate Pancakes", "egg, milk, flour, cocoa");
        pancakes.cuisine = "Continental".to_string();
        pancakes.total_time_minutes = 30;

        RecipeStore::from_records(vec![omelette, pancakes])
    }

    #[test]
    fn test_name_filter_is_case_insensitive() {
        let store = sample_store();
        let lower = filter_by_name(&store, &NameFilter::query("omelette"));
        let upper = filter_by_name(&store, &NameFilter::query("OMELETTE"));
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].title, "Masala Omelette");
    }

    #[test]
    fn test_name_filter_ands_all_criteria() {
        let store = sample_store();
        let filter = NameFilter {
            query: String::new(),
            cuisine: Some("indian".to_string()),
            max_time: Some(20),
            exclude_ingredient: None,
        };
        let results = filter_by_name(&store, &filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Masala Omelette");
    }

    #[test]
    fn test_name_filter_excludes_ingredient() {
        let store = sample_store();
        let filter = NameFilter {
            query: String::new(),
            exclude_ingredient: Some("Cocoa".to_string()),
            ..NameFilter::default()
        };
        let results = filter_by_name(&store, &filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Masala Omelette");
    }

    #[test]
    fn test_ingredient_match_counts_and_misses() {
        let store = sample_store();
        let results = filter_by_ingredients(&store, &["egg".to_string()]);
        assert_eq!(results.len(), 2);
        for summary in &results {
            assert_eq!(summary.match_count, Some(1));
        }
        let omelette = results.iter().find(|s| s.title == "Masala Omelette").unwrap();
        assert_eq!(omelette.missed_ingredient_count, 2);
        assert_eq!(omelette.missed_ingredients, vec!["onion", "chilli"]);
    }

    #[test]
    fn test_fewer_missed_ingredients_break_ties() {
        // Same match count; the omelette misses fewer ingredients
        let store = sample_store();
        let results = filter_by_ingredients(&store, &["egg".to_string()]);
        assert_eq!(results[0].title, "Masala Omelette");
        assert_eq!(results[1].title, "Chocolate Pancakes");
    }

    #[test]
    fn test_higher_match_count_wins() {
        let store = sample_store();
        let results =
            filter_by_ingredients(&store, &["egg".to_string(), "milk".to_string(), "flour".to_string()]);
        assert_eq!(results[0].title, "Chocolate Pancakes");
        assert_eq!(results[0].match_count, Some(3));
    }

    #[test]
    fn test_zero_match_recipes_are_excluded() {
        let store = sample_store();
        let results = filter_by_ingredients(&store, &["paneer".to_string()]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_ingredient_list_yields_empty_result() {
        let store = sample_store();
        assert!(filter_by_ingredients(&store, &[]).is_empty());
    }

    #[test]
    fn test_result_capped_at_five() {
        let records = (0..8)
            .map(|i| Recipe::sample(0, &format!("Egg Dish {i}"), "egg, salt"))
            .collect();
        let store = RecipeStore::from_records(records);
        let results = filter_by_ingredients(&store, &["egg".to_string()]);
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_containment_direction_is_user_term_as_needle() {
        let store = RecipeStore::from_records(vec![Recipe::sample(0, "Boiled Eggs", "2 eggs")]);
        // User term is the needle: "egg" is contained in "2 eggs"
        assert_eq!(filter_by_ingredients(&store, &["egg".to_string()]).len(), 1);
        // Reversed direction must not match: "2 fresh eggs" is not contained in "2 eggs"
        assert!(filter_by_ingredients(&store, &["2 fresh eggs".to_string()]).is_empty());
    }
}
