//! # Grocery List Pipeline
//!
//! Ties the pieces together: raw recipe lines go through the staple filter,
//! the parser and the aggregator, and come out as categorized
//! [`GroceryItem`]s ready to be shown or stored.
//!
//! The list is always rebuilt from scratch; [`GroceryListBuilder::regenerate`]
//! carries the shopper's ticks over from the previous version.

use crate::aggregation::Aggregator;
use crate::categorization::categorize;
use crate::config::GroceryConfig;
use crate::formatting::{format_ingredient, format_quantity};
use crate::ingredient_model::{GroceryCategory, GroceryItem, ParsedIngredient};
use crate::ingredient_parser::{ingredient_lines, parse_ingredient};
use crate::measurement_types::Unit;
use crate::staples::is_pantry_staple;
use crate::text_processing::truncate_name;
use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Recipe read from a plain-text file
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub title: String,
    pub lines: Vec<String>,
}

/// Read a recipe file: an optional `# Title` line followed by ingredient lines
///
/// Without a title line the file stem is used. Other lines starting with `#`
/// are comments.
pub fn read_recipe_file(path: &Path) -> Result<Recipe> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe file {}", path.display()))?;

    let mut title = None;
    let mut lines = Vec::new();
    for line in ingredient_lines(&content) {
        if let Some(heading) = line.strip_prefix('#') {
            if title.is_none() {
                title = Some(heading.trim_start_matches('#').trim().to_string());
            }
            continue;
        }
        lines.push(line.to_string());
    }

    let title = title.filter(|t| !t.is_empty()).unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    debug!("Read recipe '{}' with {} lines from {}", title, lines.len(), path.display());
    Ok(Recipe { title, lines })
}

/// Accumulates ingredient lines from any number of recipes
#[derive(Debug, Clone)]
pub struct GroceryListBuilder {
    config: GroceryConfig,
    aggregator: Aggregator,
    /// Contributing recipe titles, indexed like the aggregator's entries
    sources: Vec<Vec<String>>,
    skipped: Vec<String>,
}

impl GroceryListBuilder {
    pub fn new(config: GroceryConfig) -> Self {
        Self {
            config,
            aggregator: Aggregator::new(),
            sources: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Add every line of a recipe, remembering the recipe title on each entry
    pub fn add_recipe<I, S>(&mut self, title: &str, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref(), Some(title));
        }
    }

    /// Add a multi-line ingredient block; headers and blank lines are skipped
    pub fn add_text(&mut self, title: &str, text: &str) {
        for line in ingredient_lines(text) {
            self.push_line(line, Some(title));
        }
    }

    /// Add a single manually entered line
    pub fn add_line(&mut self, line: &str) {
        self.push_line(line, None);
    }

    /// Lines dropped as pantry staples, in input order
    pub fn skipped_staples(&self) -> &[String] {
        &self.skipped
    }

    fn push_line(&mut self, raw_line: &str, recipe: Option<&str>) {
        let line = raw_line.trim();
        if line.is_empty() {
            return;
        }
        if self.config.skip_staples && is_pantry_staple(line) {
            debug!("Skipping pantry staple '{}'", line);
            self.skipped.push(line.to_string());
            return;
        }

        let position = self.aggregator.add(parse_ingredient(line));
        if position == self.sources.len() {
            self.sources.push(Vec::new());
        }
        if let Some(title) = recipe {
            let sources = &mut self.sources[position];
            if !sources.iter().any(|existing| existing == title) {
                sources.push(title.to_string());
            }
        }
    }

    /// Produce the finished list
    ///
    /// With `group_by_category` the list is ordered by store section; items
    /// within a section keep their first-seen order.
    pub fn build(self) -> Vec<GroceryItem> {
        let max_name_length = self.config.max_name_length;
        let mut items: Vec<GroceryItem> = self
            .aggregator
            .into_entries()
            .into_iter()
            .zip(self.sources)
            .map(|(entry, recipes)| to_grocery_item(entry, recipes, max_name_length))
            .collect();

        if self.config.group_by_category {
            items.sort_by_key(|item| item.category.sort_order());
        }

        info!(
            "Built grocery list with {} items ({} staples skipped)",
            items.len(),
            self.skipped.len()
        );
        items
    }

    /// Rebuild the list, keeping items ticked in `previous` ticked
    pub fn regenerate(self, previous: &[GroceryItem]) -> Vec<GroceryItem> {
        let checked: HashMap<(String, Option<Unit>), bool> = previous
            .iter()
            .filter(|item| item.checked)
            .map(|item| ((item.normalized_name.clone(), item.unit), true))
            .collect();

        let mut items = self.build();
        for item in &mut items {
            let key = (item.normalized_name.clone(), item.unit);
            if checked.contains_key(&key) {
                item.checked = true;
            }
        }
        items
    }
}

fn to_grocery_item(
    mut entry: ParsedIngredient,
    recipes: Vec<String>,
    max_name_length: usize,
) -> GroceryItem {
    entry.name = truncate_name(&entry.name, max_name_length);
    GroceryItem {
        name: format_ingredient(&entry),
        category: categorize(&entry.normalized_name),
        normalized_name: entry.normalized_name,
        quantity: entry.quantity,
        unit: entry.unit,
        checked: false,
        recipes,
    }
}

/// Render the list as a plain-text checklist
///
/// A section heading is written whenever the category changes, so a grouped
/// list gets one heading per section.
pub fn render_text(items: &[GroceryItem]) -> String {
    let mut output = String::new();
    let mut current: Option<GroceryCategory> = None;

    for item in items {
        if current != Some(item.category) {
            if current.is_some() {
                output.push('\n');
            }
            output.push_str(&format!("{}\n", item.category));
            current = Some(item.category);
        }
        let mark = if item.checked { "x" } else { " " };
        output.push_str(&format!("  [{}] {}\n", mark, item.name));
    }

    output
}

/// One-line tally of the list by measurement kind
pub fn summary_line(items: &[GroceryItem]) -> String {
    let mut volume = 0;
    let mut weight = 0;
    let mut count = 0;
    let mut total_grams = 0.0;

    for item in items {
        match item.unit {
            Some(unit) if unit.is_volume() => volume += 1,
            Some(unit) if unit.is_weight() => {
                weight += 1;
                total_grams += match unit {
                    Unit::Kilogram => item.quantity * 1000.0,
                    _ => item.quantity,
                };
            }
            _ => count += 1,
        }
    }

    format!(
        "{} varor: {} volym, {} vikt ({} g), {} antal",
        items.len(),
        volume,
        weight,
        format_quantity(total_grams),
        count
    )
}
