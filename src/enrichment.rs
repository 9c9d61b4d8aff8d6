//! # Enrichment Service
//!
//! This module completes recipe summaries for display: missing calories and
//! protein get generated "Approx." placeholder strings, missing images get a
//! fixed placeholder URL, and missed ingredients can be annotated with
//! substitution suggestions from a fixed lookup table.
//!
//! Enrichment is idempotent: values already present are never overwritten,
//! so re-enriching an enriched summary is a no-op.

use crate::catalog_config::{PlaceholderRanges, PLACEHOLDER_IMAGE_URL};
use crate::recipe_model::{RecipeSummary, Substitution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

/// Marker attached when the substitution table has no entry
pub const NO_SUBSTITUTE: &str = "No substitute available";

/// Fixed substitution lookup table
static SUBSTITUTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert("chicken", "tofu");
    map.insert("beef", "mushroom");
    map.insert("fish", "tempeh");
    map.insert("egg", "flaxseed");
    map.insert("milk", "almond milk");
    map
});

/// Fills missing display fields on recipe summaries
///
/// Placeholder values come from an owned random generator; construct with
/// [`EnrichmentService::with_seed`] for deterministic output in tests.
#[derive(Debug)]
pub struct EnrichmentService {
    rng: Mutex<StdRng>,
    ranges: PlaceholderRanges,
}

impl EnrichmentService {
    /// Create a service with an entropy-seeded generator
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            ranges: PlaceholderRanges::default(),
        }
    }

    /// Create a service with a fixed seed, for deterministic tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ranges: PlaceholderRanges::default(),
        }
    }

    /// Fill missing display fields in place
    ///
    /// When `include_substitutions` is set and a summary carries missed
    /// ingredients, a parallel substitution list is attached; ingredients
    /// without a table entry map to [`NO_SUBSTITUTE`] rather than being
    /// omitted.
    pub fn enrich(&self, summaries: &mut [RecipeSummary], include_substitutions: bool) {
        for summary in summaries.iter_mut() {
            if summary.calories.is_none() {
                summary.calories = Some(format!("Approx. {}", self.random_calories()));
            }
            if summary.protein.is_none() {
                summary.protein = Some(format!("Approx. {}g", self.random_protein()));
            }
            if summary.image.is_none() {
                summary.image = Some(PLACEHOLDER_IMAGE_URL.to_string());
            }
            if include_substitutions
                && summary.substitutions.is_none()
                && !summary.missed_ingredients.is_empty()
            {
                summary.substitutions = Some(substitutions_for(&summary.missed_ingredients));
            }
        }
    }

    fn random_calories(&self) -> u32 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_range(self.ranges.calories_min..self.ranges.calories_max)
    }

    fn random_protein(&self) -> u32 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_range(self.ranges.protein_min..self.ranges.protein_max)
    }
}

impl Default for EnrichmentService {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up substitutions for a list of missed ingredients
fn substitutions_for(missed: &[String]) -> Vec<Substitution> {
    missed
        .iter()
        .map(|ingredient| Substitution {
            original: ingredient.clone(),
            substitute: SUBSTITUTIONS
                .get(ingredient.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| NO_SUBSTITUTE.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_model::Recipe;

    fn bare_summary() -> RecipeSummary {
        RecipeSummary::from_recipe(&Recipe::sample(1, "Test", "egg, milk"))
    }

    #[test]
    fn test_placeholders_fill_missing_fields() {
        let service = EnrichmentService::with_seed(42);
        let mut summaries = vec![bare_summary()];
        service.enrich(&mut summaries, false);

        let calories = summaries[0].calories.as_deref().unwrap();
        let protein = summaries[0].protein.as_deref().unwrap();
        assert!(calories.starts_with("Approx. "));
        assert!(protein.starts_with("Approx. "));
        assert!(protein.ends_with('g'));
        assert_eq!(summaries[0].image.as_deref(), Some(PLACEHOLDER_IMAGE_URL));

        let calories_value: u32 = calories.trim_start_matches("Approx. ").parse().unwrap();
        assert!((200..500).contains(&calories_value));
        let protein_value: u32 = protein
            .trim_start_matches("Approx. ")
            .trim_end_matches('g')
            .parse()
            .unwrap();
        assert!((5..25).contains(&protein_value));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut first = vec![bare_summary()];
        let mut second = vec![bare_summary()];
        EnrichmentService::with_seed(7).enrich(&mut first, false);
        EnrichmentService::with_seed(7).enrich(&mut second, false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_enrichment_is_idempotent() {
        let service = EnrichmentService::with_seed(42);
        let mut summaries = vec![bare_summary()];
        service.enrich(&mut summaries, true);
        let enriched_once = summaries.clone();
        service.enrich(&mut summaries, true);
        assert_eq!(summaries, enriched_once);
    }

    #[test]
    fn test_existing_values_are_untouched() {
        let service = EnrichmentService::with_seed(42);
        let mut summary = bare_summary();
        summary.calories = Some("120 kcal".to_string());
        summary.image = Some("https://example.com/dish.jpg".to_string());
        let mut summaries = vec![summary];
        service.enrich(&mut summaries, false);
        assert_eq!(summaries[0].calories.as_deref(), Some("120 kcal"));
        assert_eq!(summaries[0].image.as_deref(), Some("https://example.com/dish.jpg"));
    }

    #[test]
    fn test_substitutions_cover_every_missed_ingredient() {
        let service = EnrichmentService::with_seed(42);
        let mut summary = bare_summary();
        summary.missed_ingredients = vec!["chicken".to_string(), "saffron".to_string()];
        summary.missed_ingredient_count = 2;
        let mut summaries = vec![summary];
        service.enrich(&mut summaries, true);

        let subs = summaries[0].substitutions.as_ref().unwrap();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].original, "chicken");
        assert_eq!(subs[0].substitute, "tofu");
        assert_eq!(subs[1].original, "saffron");
        assert_eq!(subs[1].substitute, NO_SUBSTITUTE);
    }

    #[test]
    fn test_substitutions_skipped_unless_requested() {
        let service = EnrichmentService::with_seed(42);
        let mut summary = bare_summary();
        summary.missed_ingredients = vec!["chicken".to_string()];
        let mut summaries = vec![summary];
        service.enrich(&mut summaries, false);
        assert!(summaries[0].substitutions.is_none());
    }
}
