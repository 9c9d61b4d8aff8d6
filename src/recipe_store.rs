//! # Recipe Store
//!
//! This module owns the immutable-after-load recipe collection. The dataset
//! is parsed once at startup; ids are assigned sequentially (1-based, in file
//! order) and stay stable for the process lifetime. A load failure is fatal
//! to startup.

use crate::catalog_errors::CatalogError;
use crate::recipe_model::Recipe;
use anyhow::{Context, Result};
use log::info;
use rand::Rng;
use std::fs;
use std::path::Path;

/// Immutable collection of catalog recipes, keyed by stable id
#[derive(Debug)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Load the dataset from a JSON file and assign sequential ids
    ///
    /// The file must contain a JSON array of recipe records. Unreadable or
    /// malformed input fails with [`CatalogError::DatasetLoad`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        info!("Loading recipe dataset from: {}", path.display());

        let recipes = Self::parse_dataset(path)?;

        info!("Loaded {} recipes", recipes.len());
        Ok(Self { recipes })
    }

    /// Build a store directly from records, assigning ids; used by tests and
    /// embedders that source records elsewhere
    pub fn from_records(mut records: Vec<Recipe>) -> Self {
        for (index, recipe) in records.iter_mut().enumerate() {
            recipe.id = index as u32 + 1;
        }
        Self { recipes: records }
    }

    fn parse_dataset(path: &Path) -> Result<Vec<Recipe>> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;

        let mut recipes: Vec<Recipe> =
            serde_json::from_str(&data).context("Failed to parse dataset as a recipe array")?;

        for (index, recipe) in recipes.iter_mut().enumerate() {
            recipe.id = index as u32 + 1;
        }

        Ok(recipes)
    }

    /// Look up a recipe by id
    pub fn get_by_id(&self, id: u32) -> Option<&Recipe> {
        // Ids are sequential from 1, so index directly
        if id == 0 {
            return None;
        }
        self.recipes.get(id as usize - 1)
    }

    /// All recipes in load order
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Pick a uniformly random recipe, `None` on an empty store
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<&Recipe> {
        if self.recipes.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.recipes.len());
        self.recipes.get(index)
    }

    /// Number of loaded recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the store holds no recipes
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
