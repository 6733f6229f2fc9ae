//! # Ingredient Aggregation
//!
//! Merges parsed ingredients that name the same grocery item. Two entries are
//! the same item when their normalized names and units are equal; a missing
//! unit is its own class, so "2 ägg" and "2 st ägg" stay apart.
//!
//! - Output keeps the order in which each item was first seen
//! - Only the quantity is summed; the first entry's name and source text win
//! - Re-aggregating an aggregated list changes nothing, which lets the grocery
//!   list be rebuilt from scratch on every refresh

use crate::ingredient_model::ParsedIngredient;
use crate::measurement_types::Unit;
use log::{debug, trace};
use std::collections::HashMap;

/// Incremental aggregator over parsed ingredients
#[derive(Debug, Default, Clone)]
pub struct Aggregator {
    entries: Vec<ParsedIngredient>,
    index: HashMap<(String, Option<Unit>), usize>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one ingredient and return the position of the entry it landed in
    ///
    /// Ingredients with an empty normalized name (blank input lines) are
    /// never merged with each other.
    pub fn add(&mut self, ingredient: ParsedIngredient) -> usize {
        if ingredient.normalized_name.is_empty() {
            self.entries.push(ingredient);
            return self.entries.len() - 1;
        }

        let key = (ingredient.normalized_name.clone(), ingredient.unit);
        match self.index.get(&key) {
            Some(&position) => {
                let entry = &mut self.entries[position];
                trace!(
                    "Merging '{}' into '{}': {} + {}",
                    ingredient.original_text,
                    entry.name,
                    entry.quantity,
                    ingredient.quantity
                );
                // Saturate instead of overflowing to infinity
                entry.quantity = (entry.quantity + ingredient.quantity).min(f64::MAX);
                position
            }
            None => {
                let position = self.entries.len();
                self.index.insert(key, position);
                self.entries.push(ingredient);
                position
            }
        }
    }

    pub fn extend<I>(&mut self, ingredients: I)
    where
        I: IntoIterator<Item = ParsedIngredient>,
    {
        for ingredient in ingredients {
            self.add(ingredient);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ParsedIngredient] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ParsedIngredient> {
        self.entries
    }
}

/// Merge ingredients sharing `(normalized_name, unit)`, summing quantities
///
/// # Examples
///
/// ```rust
/// use grocery_ingredients::aggregation::aggregate_ingredients;
/// use grocery_ingredients::ingredient_parser::parse_ingredient;
///
/// let merged = aggregate_ingredients(&[
///     parse_ingredient("2 morötter"),
///     parse_ingredient("1 morot"),
/// ]);
///
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].quantity, 3.0);
/// assert_eq!(merged[0].name, "morötter");
/// ```
pub fn aggregate_ingredients(items: &[ParsedIngredient]) -> Vec<ParsedIngredient> {
    let mut aggregator = Aggregator::new();
    aggregator.extend(items.iter().cloned());

    debug!(
        "Aggregated {} ingredients into {} entries",
        items.len(),
        aggregator.len()
    );
    aggregator.into_entries()
}
