//! # Recipe Catalog & Meal-Planning Core
//!
//! Serves a fixed recipe dataset, filters it by name or by a user-supplied
//! ingredient list, and maintains in-memory user collections: favorites,
//! meal plan, shopping list, search history, and ratings. All mutable state
//! is process-lifetime only; the HTTP transport is an external adapter on
//! top of this crate.

pub mod catalog_config;
pub mod catalog_errors;
pub mod enrichment;
pub mod recipe_filter;
pub mod recipe_model;
pub mod recipe_store;
pub mod user_state;
pub mod video_search;
