//! # Catalog Error Types Module
//!
//! This module defines the error taxonomy shared across the recipe catalog.
//! Only two conditions surface as errors: a dataset that cannot be loaded at
//! startup (fatal) and a rejected caller input (non-fatal). A missing recipe
//! id is never an error: lookups return `Option` and mutating operations
//! degrade to no-ops that hand back the current state.

/// Errors surfaced by catalog operations
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// The recipe dataset could not be read or parsed; aborts startup
    DatasetLoad(String),
    /// A caller-supplied value failed validation (e.g. empty meal-plan date)
    Validation(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::DatasetLoad(msg) => write!(f, "Dataset load error: {msg}"),
            CatalogError::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        CatalogError::DatasetLoad(err.to_string())
    }
}
