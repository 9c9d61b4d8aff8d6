//! # User State Manager
//!
//! This module owns the five mutable user collections: favorites, meal plan,
//! shopping list, search history, and rating tallies. Everything lives in
//! memory for the process lifetime and resets on restart.
//!
//! Each collection sits behind its own mutex, held only for the duration of
//! the in-memory mutation, never across an external call. Operations are
//! defensive: unresolvable recipe ids and out-of-range indices degrade to
//! no-ops that return the current state, and list-out operations return
//! snapshots.

use crate::catalog_config::SEARCH_HISTORY_CAP;
use crate::catalog_errors::CatalogError;
use crate::recipe_store::RecipeStore;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A favorited recipe reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// Recipe id
    pub id: u32,
    /// Recipe name at the time of favoriting
    pub title: String,
}

/// A planned meal: a recipe scheduled on a date
///
/// Dates are opaque strings; duplicate `(id, date)` pairs may accumulate on
/// add and are all removed together on removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    /// Recipe id
    pub id: u32,
    /// Recipe name at the time of planning
    pub title: String,
    /// Opaque date string supplied by the caller
    pub date: String,
}

/// Owner of all mutable per-user collections
#[derive(Debug)]
pub struct UserStateManager {
    store: Arc<RecipeStore>,
    favorites: Mutex<Vec<FavoriteEntry>>,
    meal_plan: Mutex<Vec<MealPlanEntry>>,
    shopping_list: Mutex<Vec<String>>,
    search_history: Mutex<Vec<String>>,
    ratings: Mutex<HashMap<u32, Vec<i32>>>,
}

impl UserStateManager {
    /// Create a manager with all collections empty
    pub fn new(store: Arc<RecipeStore>) -> Self {
        Self {
            store,
            favorites: Mutex::new(Vec::new()),
            meal_plan: Mutex::new(Vec::new()),
            shopping_list: Mutex::new(Vec::new()),
            search_history: Mutex::new(Vec::new()),
            ratings: Mutex::new(HashMap::new()),
        }
    }

    // --- Favorites ---

    /// Add a recipe to the favorites; idempotent, and a no-op when the id
    /// does not resolve
    pub fn add_favorite(&self, id: u32) -> Vec<FavoriteEntry> {
        let mut favorites = self.favorites.lock().unwrap();
        if let Some(recipe) = self.store.get_by_id(id) {
            if !favorites.iter().any(|fav| fav.id == id) {
                info!("Adding recipe {} to favorites", id);
                favorites.push(FavoriteEntry {
                    id,
                    title: recipe.name.clone(),
                });
            }
        }
        favorites.clone()
    }

    /// Remove a favorite; no-op when absent
    pub fn remove_favorite(&self, id: u32) -> Vec<FavoriteEntry> {
        let mut favorites = self.favorites.lock().unwrap();
        favorites.retain(|fav| fav.id != id);
        favorites.clone()
    }

    /// Snapshot of the favorites list, insertion order
    pub fn favorites(&self) -> Vec<FavoriteEntry> {
        self.favorites.lock().unwrap().clone()
    }

    // --- Meal plan ---

    /// Schedule a recipe on a date
    ///
    /// An empty date is rejected with [`CatalogError::Validation`]. An
    /// unresolvable id leaves the plan unchanged. Duplicate `(id, date)`
    /// pairs are permitted by design.
    pub fn plan_meal(&self, id: u32, date: &str) -> Result<Vec<MealPlanEntry>, CatalogError> {
        if date.trim().is_empty() {
            return Err(CatalogError::Validation(
                "A date is required to plan a meal".to_string(),
            ));
        }

        let mut meal_plan = self.meal_plan.lock().unwrap();
        if let Some(recipe) = self.store.get_by_id(id) {
            info!("Planning recipe {} on {}", id, date);
            meal_plan.push(MealPlanEntry {
                id,
                title: recipe.name.clone(),
                date: date.to_string(),
            });
        }
        Ok(meal_plan.clone())
    }

    /// Remove every plan entry matching both the id and the date
    pub fn remove_meal_plan_entry(&self, id: u32, date: &str) -> Vec<MealPlanEntry> {
        let mut meal_plan = self.meal_plan.lock().unwrap();
        meal_plan.retain(|entry| !(entry.id == id && entry.date == date));
        meal_plan.clone()
    }

    /// Snapshot of the meal plan, insertion order
    pub fn meal_plan(&self) -> Vec<MealPlanEntry> {
        self.meal_plan.lock().unwrap().clone()
    }

    // --- Shopping list ---

    /// Add items for a recipe to the shopping list
    ///
    /// A non-empty `explicit` list takes precedence; otherwise the recipe's
    /// full ingredient set is used. Items already present (exact string
    /// match) are skipped, so order is first-insertion order. An
    /// unresolvable id returns the list unchanged.
    pub fn add_shopping_items(&self, id: u32, explicit: &[String]) -> Vec<String> {
        let mut shopping_list = self.shopping_list.lock().unwrap();

        let recipe = match self.store.get_by_id(id) {
            Some(recipe) => recipe,
            None => return shopping_list.clone(),
        };

        let items: Vec<String> = if explicit.is_empty() {
            recipe.shopping_items()
        } else {
            explicit.to_vec()
        };

        for item in items {
            if !shopping_list.contains(&item) {
                shopping_list.push(item);
            }
        }
        debug!("Shopping list now holds {} items", shopping_list.len());
        shopping_list.clone()
    }

    /// Remove a shopping item by position; out-of-range is a no-op
    pub fn remove_shopping_item(&self, index: usize) -> Vec<String> {
        let mut shopping_list = self.shopping_list.lock().unwrap();
        if index < shopping_list.len() {
            shopping_list.remove(index);
        }
        shopping_list.clone()
    }

    /// Snapshot of the shopping list, first-insertion order
    pub fn shopping_list(&self) -> Vec<String> {
        self.shopping_list.lock().unwrap().clone()
    }

    // --- Search history ---

    /// Record a searched recipe name
    ///
    /// Bounded to the five most recent, most-recent-first. Re-adding a name
    /// already anywhere in the history is a no-op, not a promote-to-front.
    pub fn add_search_history(&self, name: &str) -> Vec<String> {
        let mut history = self.search_history.lock().unwrap();
        if !history.iter().any(|entry| entry == name) {
            history.insert(0, name.to_string());
            history.truncate(SEARCH_HISTORY_CAP);
        }
        history.clone()
    }

    /// Snapshot of the search history, most-recent-first
    pub fn search_history(&self) -> Vec<String> {
        self.search_history.lock().unwrap().clone()
    }

    // --- Ratings ---

    /// Record a score for a recipe and return the fresh average
    ///
    /// Scores accumulate in one process-lifetime map keyed by recipe id.
    pub fn rate_recipe(&self, id: u32, score: i32) -> f64 {
        let mut ratings = self.ratings.lock().unwrap();
        let scores = ratings.entry(id).or_default();
        scores.push(score);
        info!("Recipe {} rated {} ({} ratings total)", id, score, scores.len());
        average(scores)
    }

    /// Average of all recorded scores, one-decimal rounding; `0.0` when the
    /// recipe has no ratings
    pub fn average_rating(&self, id: u32) -> f64 {
        let ratings = self.ratings.lock().unwrap();
        match ratings.get(&id) {
            Some(scores) => average(scores),
            None => 0.0,
        }
    }
}

fn average(scores: &[i32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: i32 = scores.iter().sum();
    let mean = f64::from(sum) / scores.len() as f64;
    (mean * 10.0).round() / 10.0
}
