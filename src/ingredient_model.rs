//! # Ingredient and Grocery Data Model
//!
//! This module defines the value types that flow through the grocery pipeline:
//! the transient [`ParsedIngredient`] produced per ingredient line, the
//! [`GroceryCategory`] used to group the finished list, and the [`GroceryItem`]
//! record that is handed to the grocery-list store.
//!
//! ## Core Concepts
//!
//! - **ParsedIngredient**: quantity, unit and name pulled out of one raw line
//! - **Normalized name**: the singular, synonym-resolved dedupe key
//! - **GroceryItem**: one aggregated, formatted and categorised list entry
//!
//! ## Usage
//!
//! ```rust
//! use grocery_ingredients::ingredient_model::ParsedIngredient;
//! use grocery_ingredients::measurement_types::Unit;
//!
//! let cream = ParsedIngredient::new(2.0, Some(Unit::Deciliter), "vispgrädde", "grädde")
//!     .with_original_text("2 dl vispgrädde");
//!
//! assert_eq!(cream.key(), ("grädde", Some(Unit::Deciliter)));
//! ```

use crate::formatting::format_ingredient;
use crate::measurement_types::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One ingredient line after quantity, unit and name extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIngredient {
    /// Amount, always greater than zero; 1 when the line carried no number
    pub quantity: f64,

    /// Canonical unit, or `None` for count-only lines such as "2 ägg"
    pub unit: Option<Unit>,

    /// Cleaned name before plural and synonym folding (e.g. "morötter")
    pub name: String,

    /// Deduplication key (e.g. "morot")
    pub normalized_name: String,

    /// The untouched source line
    pub original_text: String,
}

impl ParsedIngredient {
    /// Create a parsed ingredient; non-positive quantities are clamped to 1
    pub fn new(quantity: f64, unit: Option<Unit>, name: &str, normalized_name: &str) -> Self {
        let quantity = if quantity.is_finite() && quantity > 0.0 {
            quantity
        } else {
            1.0
        };

        Self {
            quantity,
            unit,
            name: name.to_string(),
            normalized_name: normalized_name.to_string(),
            original_text: String::new(),
        }
    }

    /// Attach the source line
    pub fn with_original_text(mut self, original_text: &str) -> Self {
        self.original_text = original_text.to_string();
        self
    }

    /// Grouping key used by the aggregator
    pub fn key(&self) -> (&str, Option<Unit>) {
        (self.normalized_name.as_str(), self.unit)
    }

    /// Two entries are the same grocery item iff their keys match
    pub fn is_same_item(&self, other: &ParsedIngredient) -> bool {
        self.key() == other.key()
    }
}

impl fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_ingredient(self))
    }
}

/// Store section used to group the grocery list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroceryCategory {
    Produce,
    Meat,
    Fish,
    Dairy,
    Bakery,
    Pantry,
    Frozen,
    Beverages,
    Snacks,
    Other,
}

impl GroceryCategory {
    /// All categories in store-walk order
    pub const ALL: [GroceryCategory; 10] = [
        GroceryCategory::Produce,
        GroceryCategory::Meat,
        GroceryCategory::Fish,
        GroceryCategory::Dairy,
        GroceryCategory::Bakery,
        GroceryCategory::Pantry,
        GroceryCategory::Frozen,
        GroceryCategory::Beverages,
        GroceryCategory::Snacks,
        GroceryCategory::Other,
    ];

    /// Swedish section label shown in the list
    pub fn label(&self) -> &'static str {
        match self {
            GroceryCategory::Produce => "Frukt & grönt",
            GroceryCategory::Meat => "Kött & chark",
            GroceryCategory::Fish => "Fisk & skaldjur",
            GroceryCategory::Dairy => "Mejeri",
            GroceryCategory::Bakery => "Bröd",
            GroceryCategory::Pantry => "Skafferi",
            GroceryCategory::Frozen => "Fryst",
            GroceryCategory::Beverages => "Dryck",
            GroceryCategory::Snacks => "Snacks & godis",
            GroceryCategory::Other => "Övrigt",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GroceryCategory::Produce => "🥕",
            GroceryCategory::Meat => "🥩",
            GroceryCategory::Fish => "🐟",
            GroceryCategory::Dairy => "🥛",
            GroceryCategory::Bakery => "🍞",
            GroceryCategory::Pantry => "🥫",
            GroceryCategory::Frozen => "🧊",
            GroceryCategory::Beverages => "🧃",
            GroceryCategory::Snacks => "🍫",
            GroceryCategory::Other => "🛒",
        }
    }

    /// Position when walking through the store
    pub fn sort_order(&self) -> u8 {
        match self {
            GroceryCategory::Produce => 0,
            GroceryCategory::Meat => 1,
            GroceryCategory::Fish => 2,
            GroceryCategory::Dairy => 3,
            GroceryCategory::Bakery => 4,
            GroceryCategory::Pantry => 5,
            GroceryCategory::Frozen => 6,
            GroceryCategory::Beverages => 7,
            GroceryCategory::Snacks => 8,
            GroceryCategory::Other => 9,
        }
    }
}

impl fmt::Display for GroceryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

/// A finished grocery-list entry, ready for the store to persist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    /// Formatted display string, e.g. "3 dl grädde"
    pub name: String,

    /// Deduplication key carried over from parsing
    pub normalized_name: String,

    pub quantity: f64,

    pub unit: Option<Unit>,

    pub category: GroceryCategory,

    /// Ticked off by the shopper
    pub checked: bool,

    /// Titles of the recipes that contributed to this entry
    pub recipes: Vec<String>,
}

impl GroceryItem {
    /// Grouping key, identical to the one of the ingredients it came from
    pub fn key(&self) -> (&str, Option<Unit>) {
        (self.normalized_name.as_str(), self.unit)
    }
}
