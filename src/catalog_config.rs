//! # Catalog Configuration Module
//!
//! This module defines configuration structures and defaults for the recipe
//! catalog: dataset location, result caps, placeholder-value ranges, and the
//! settings for the external video lookup.

// Constants for catalog behavior
pub const DEFAULT_RECIPES_PATH: &str = "recipes.json";
pub const INGREDIENT_MATCH_RESULT_CAP: usize = 5;
pub const SEARCH_HISTORY_CAP: usize = 5;
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Ranges used when generating "Approx." placeholder nutrition values
#[derive(Debug, Clone)]
pub struct PlaceholderRanges {
    /// Calories lower bound (inclusive)
    pub calories_min: u32,
    /// Calories upper bound (exclusive)
    pub calories_max: u32,
    /// Protein grams lower bound (inclusive)
    pub protein_min: u32,
    /// Protein grams upper bound (exclusive)
    pub protein_max: u32,
}

impl Default for PlaceholderRanges {
    fn default() -> Self {
        Self {
            calories_min: 200,
            calories_max: 500,
            protein_min: 5,
            protein_max: 25,
        }
    }
}

/// Configuration for the external video-title lookup
#[derive(Debug, Clone)]
pub struct VideoSearchConfig {
    /// API key for the video search service
    pub api_key: String,
    /// Search endpoint URL
    pub endpoint: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl VideoSearchConfig {
    /// Build a config for the given API key with default endpoint and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: "https://www.googleapis.com/youtube/v3/search".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Top-level catalog configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Path to the recipe dataset file
    pub recipes_path: String,
    /// Placeholder generation ranges
    pub placeholder_ranges: PlaceholderRanges,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            recipes_path: DEFAULT_RECIPES_PATH.to_string(),
            placeholder_ranges: PlaceholderRanges::default(),
        }
    }
}
