//! # Formatting
//!
//! The inverse of parsing: renders a [`ParsedIngredient`] as the single display
//! string stored as the grocery item's name.

use crate::ingredient_model::ParsedIngredient;

/// Render a quantity without trailing zeros, rounded to two decimals
///
/// Positive amounts too small for two decimals keep their two leading
/// significant digits instead of printing as "0". Whole numbers are written
/// out in full at any magnitude.
///
/// # Examples
///
/// ```rust
/// use grocery_ingredients::formatting::format_quantity;
///
/// assert_eq!(format_quantity(3.0), "3");
/// assert_eq!(format_quantity(1.5), "1.5");
/// assert_eq!(format_quantity(1.0 / 3.0), "0.33");
/// assert_eq!(format_quantity(0.001), "0.001");
/// ```
pub fn format_quantity(quantity: f64) -> String {
    if quantity.is_nan() {
        return "1".to_string();
    }
    let quantity = quantity.clamp(-f64::MAX, f64::MAX);
    if quantity.fract() == 0.0 {
        return format!("{:.0}", quantity);
    }

    let rounded = (quantity * 100.0).round() / 100.0;
    if rounded == 0.0 {
        let precision = (-quantity.abs().log10().floor()) as usize + 1;
        return trim_decimals(format!("{:.*}", precision, quantity));
    }
    if rounded.fract() == 0.0 {
        return format!("{:.0}", rounded);
    }
    trim_decimals(format!("{:.2}", rounded))
}

fn trim_decimals(text: String) -> String {
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Render an ingredient as "quantity unit name"
///
/// The quantity is left out for a single unit-less item, so one egg shows
/// as "ägg" rather than "1 ägg".
pub fn format_ingredient(item: &ParsedIngredient) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);

    if !(item.quantity == 1.0 && item.unit.is_none()) {
        parts.push(format_quantity(item.quantity));
    }
    if let Some(unit) = item.unit {
        parts.push(unit.as_str().to_string());
    }
    if !item.name.is_empty() {
        parts.push(item.name.clone());
    }

    parts.join(" ")
}
