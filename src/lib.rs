//! # Grocery Ingredients
//!
//! Turns free-text recipe ingredient lines (mostly Swedish) into structured
//! quantities, units and normalized names, filters out pantry staples, merges
//! duplicates across recipes and renders a categorized grocery list.
//!
//! ```rust
//! use grocery_ingredients::{aggregate_ingredients, format_ingredient, is_pantry_staple, parse_ingredient};
//!
//! let lines = ["2 morötter", "1 tsk salt", "1 morot"];
//! let parsed: Vec<_> = lines
//!     .iter()
//!     .filter(|line| !is_pantry_staple(line))
//!     .map(|line| parse_ingredient(line))
//!     .collect();
//!
//! let merged = aggregate_ingredients(&parsed);
//! assert_eq!(merged.len(), 1);
//! assert_eq!(format_ingredient(&merged[0]), "3 morötter");
//! ```

pub mod aggregation;
pub mod categorization;
pub mod config;
pub mod formatting;
pub mod grocery_list;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod measurement_patterns;
pub mod measurement_types;
pub mod staples;
pub mod text_processing;

pub use aggregation::aggregate_ingredients;
pub use formatting::format_ingredient;
pub use ingredient_parser::parse_ingredient;
pub use staples::is_pantry_staple;
