//! # Ingredient Parser
//!
//! This module turns one free-text ingredient line into a [`ParsedIngredient`].
//! Lines are mostly Swedish, sometimes English, and come from manual entry,
//! scraped recipe markup or OCR of a photographed recipe page.
//!
//! ## Features
//!
//! - Leading quantities: integers, decimals with `.` or `,`, mixed fractions
//!   (`1 1/2`), vulgar fractions (`1½`) and ranges (`2-3`)
//! - Leading units from the Swedish unit table, longest spelling first
//! - Trailing "name quantity unit" lines such as `Mjöl 3dl`
//! - Bullets, list numbers ("1. "), "ca" and descriptors in front of the amount
//!   are skipped
//! - Never fails: unknown input degrades to quantity 1, no unit, raw name
//!
//! ## Usage
//!
//! ```rust
//! use grocery_ingredients::ingredient_parser::parse_ingredient;
//! use grocery_ingredients::measurement_types::Unit;
//!
//! let cream = parse_ingredient("1 1/2 dl vispgrädde");
//! assert_eq!(cream.quantity, 1.5);
//! assert_eq!(cream.unit, Some(Unit::Deciliter));
//! assert_eq!(cream.name, "vispgrädde");
//! assert_eq!(cream.normalized_name, "grädde");
//! ```

use crate::ingredient_model::ParsedIngredient;
use crate::measurement_patterns::{
    APPROXIMATION_REGEX, BULLET_REGEX, DECIMAL_REGEX, FRACTION_REGEX, INTEGER_REGEX,
    LIST_MARKER_REGEX, RANGE_REGEX, TRAILING_QUANTITY_REGEX, UNIT_REGEX, VULGAR_FRACTION_REGEX,
};
use crate::measurement_types::Unit;
use crate::text_processing::{clean_name, fallback_name, fold_name, skip_leading_descriptors};
use log::{debug, trace};

fn parse_number(text: &str) -> f64 {
    text.replace(',', ".").parse().unwrap_or(f64::NAN)
}

fn vulgar_value(fraction: &str) -> f64 {
    match fraction {
        "½" => 0.5,
        "⅓" => 1.0 / 3.0,
        "⅔" => 2.0 / 3.0,
        "¼" => 0.25,
        "¾" => 0.75,
        "⅛" => 0.125,
        _ => f64::NAN,
    }
}

fn positive_or_one(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}

/// Leading quantity and the text after it, if the text starts with a number
fn leading_quantity(input: &str) -> Option<(f64, &str)> {
    let (value, end) = if let Some(captures) = FRACTION_REGEX.captures(input) {
        let whole = captures.name("whole").map_or(0.0, |m| parse_number(m.as_str()));
        let numerator = parse_number(&captures["num"]);
        let denominator = parse_number(&captures["den"]);
        (whole + numerator / denominator, captures[0].len())
    } else if let Some(captures) = VULGAR_FRACTION_REGEX.captures(input) {
        let whole = captures.name("whole").map_or(0.0, |m| parse_number(m.as_str()));
        (whole + vulgar_value(&captures["frac"]), captures[0].len())
    } else if let Some(captures) = RANGE_REGEX.captures(input) {
        // Buy for the upper end of the range
        (parse_number(&captures["high"]), captures[0].len())
    } else if let Some(m) = DECIMAL_REGEX.find(input) {
        (parse_number(m.as_str()), m.end())
    } else if let Some(m) = INTEGER_REGEX.find(input) {
        (parse_number(m.as_str()), m.end())
    } else {
        return None;
    };

    trace!("Leading quantity '{}' -> {}", &input[..end], value);
    Some((positive_or_one(value), input[end..].trim_start()))
}

/// Strip a leading quantity from a trimmed ingredient line
///
/// Patterns are tried in priority order: fraction, vulgar fraction, range,
/// decimal, integer. Whitespace after the number is consumed. Without a
/// number the quantity defaults to 1 and the trimmed input is returned.
///
/// # Examples
///
/// ```rust
/// use grocery_ingredients::ingredient_parser::extract_quantity;
///
/// assert_eq!(extract_quantity("1/2 dl mjölk"), (0.5, "dl mjölk"));
/// assert_eq!(extract_quantity("2,5 kg potatis"), (2.5, "kg potatis"));
/// assert_eq!(extract_quantity("salt"), (1.0, "salt"));
/// ```
pub fn extract_quantity(input: &str) -> (f64, &str) {
    let input = input.trim();
    leading_quantity(input).unwrap_or((1.0, input))
}

/// Strip a leading unit token from the text after the quantity
///
/// Matching is case-insensitive and only accepts whole words, so "l" never
/// eats the start of "lök". A trailing period and the following whitespace
/// are consumed with the unit. Without a unit the input is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use grocery_ingredients::ingredient_parser::extract_unit;
/// use grocery_ingredients::measurement_types::Unit;
///
/// assert_eq!(extract_unit("Matskedar olja"), (Some(Unit::Tablespoon), "olja"));
/// assert_eq!(extract_unit("st. ägg"), (Some(Unit::Piece), "ägg"));
/// assert_eq!(extract_unit("lök"), (None, "lök"));
/// ```
pub fn extract_unit(input: &str) -> (Option<Unit>, &str) {
    let trimmed = input.trim_start();
    match UNIT_REGEX.captures(trimmed) {
        Some(captures) => {
            let unit = Unit::from_spelling(&captures["unit"]);
            let end = captures[0].len();
            trace!("Leading unit '{}' -> {:?}", &trimmed[..end], unit);
            match unit {
                Some(unit) => (Some(unit), &trimmed[end..]),
                None => (None, input),
            }
        }
        None => (None, input),
    }
}

fn strip_approximation(line: &str) -> &str {
    match APPROXIMATION_REGEX.captures(line) {
        Some(captures) => captures.name("rest").map_or(line, |m| m.as_str()),
        None => line,
    }
}

/// Remove bullets, list numbers, approximation markers and descriptors in
/// front of the quantity
///
/// Descriptors are only skipped when an amount follows them ("färsk 2 dl
/// mjölk"), so a line like "Hackad" keeps its text.
fn strip_line_noise(line: &str) -> &str {
    let mut line = line.trim();
    if let Some(m) = BULLET_REGEX.find(line) {
        line = &line[m.end()..];
    }
    if let Some(m) = LIST_MARKER_REGEX.find(line) {
        line = &line[m.end()..];
    }
    let line = strip_approximation(line);

    let after_descriptors = strip_approximation(skip_leading_descriptors(line));
    if after_descriptors.len() < line.len() && leading_quantity(after_descriptors).is_some() {
        after_descriptors
    } else {
        line
    }
}

/// Quantity, unit and name text for a line where the amount trails the name
fn trailing_quantity(line: &str) -> Option<(f64, Option<Unit>, &str)> {
    let captures = TRAILING_QUANTITY_REGEX.captures(line)?;
    let name = captures.name("name")?.as_str();
    let (quantity, _) = extract_quantity(&captures["qty"]);
    let unit = Unit::from_spelling(&captures["unit"]);
    Some((quantity, unit, name))
}

/// Parse one raw ingredient line
///
/// The quantity is expected before the name ("3 dl mjöl"). When the line does
/// not start with a number but ends in a quantity with a unit ("Mjöl 3dl"),
/// that trailing amount is used instead.
///
/// The returned `name` is the cleaned name; `normalized_name` is its dedupe
/// key. Neither is empty for a line with any visible character.
pub fn parse_ingredient(raw_line: &str) -> ParsedIngredient {
    let (quantity, mut unit, name_text) = split_amount(strip_line_noise(raw_line));
    let mut quantity = quantity.unwrap_or(1.0);

    let mut name = clean_name(name_text);
    settle_name(&mut quantity, &mut unit, &mut name);
    if name.is_empty() {
        name = fallback_name(name_text);
    }
    if name.is_empty() {
        name = fallback_name(raw_line);
    }
    let normalized_name = fold_name(&name);

    debug!(
        "Parsed ingredient '{}' -> quantity={}, unit={:?}, name='{}', key='{}'",
        raw_line, quantity, unit, name, normalized_name
    );

    ParsedIngredient::new(quantity, unit, &name, &normalized_name).with_original_text(raw_line)
}

/// Quantity, unit and name text of a line; the quantity is `None` when the
/// line carries no number
fn split_amount(line: &str) -> (Option<f64>, Option<Unit>, &str) {
    match leading_quantity(line) {
        Some((quantity, rest)) => {
            let (unit, rest) = extract_unit(rest);
            (Some(quantity), unit, rest)
        }
        None => match trailing_quantity(line) {
            Some((quantity, unit, name)) => (Some(quantity), unit, name),
            None => {
                let (unit, rest) = extract_unit(line);
                (None, unit, rest)
            }
        },
    }
}

/// Move amounts left at the front of a cleaned name into quantity and unit
///
/// A formatted ingredient prints the name right after the quantity and unit,
/// so the name must not start with anything that reads as an amount.
/// Without a unit and with quantity 1 nothing is printed before the name and
/// it is read like a whole line. After a quantity, a second number is
/// dropped and a bare unit word becomes the unit.
fn settle_name(quantity: &mut f64, unit: &mut Option<Unit>, name: &mut String) {
    while unit.is_none() {
        let text = strip_line_noise(name.as_str());
        let rest = if *quantity == 1.0 {
            let (found_quantity, found_unit, rest) = split_amount(text);
            if found_quantity.is_none() && found_unit.is_none() {
                return;
            }
            *quantity = found_quantity.unwrap_or(1.0);
            *unit = found_unit;
            rest
        } else if let Some((_, rest)) = leading_quantity(text) {
            rest
        } else {
            let (found_unit, rest) = extract_unit(text);
            if found_unit.is_none() {
                return;
            }
            *unit = found_unit;
            rest
        };

        trace!("Settled amount out of name '{}' -> '{}'", name, rest);
        *name = clean_name(rest);
    }
}

/// Split a multi-line block into ingredient lines
///
/// Blank lines and section headers ending in a colon ("Till såsen:") are
/// skipped.
pub fn ingredient_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.ends_with(':'))
}

/// Parse a multi-line ingredient block, one ingredient per [`ingredient_lines`] entry
pub fn parse_ingredient_list(text: &str) -> Vec<ParsedIngredient> {
    let ingredients: Vec<ParsedIngredient> = ingredient_lines(text).map(parse_ingredient).collect();

    debug!("Parsed {} ingredient lines", ingredients.len());
    ingredients
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::format_ingredient;

    #[test]
    fn test_parse_mixed_fraction() {
        let result = parse_ingredient("1 1/2 dl grädde");
        assert_eq!(result.quantity, 1.5);
        assert_eq!(result.unit, Some(Unit::Deciliter));
        assert_eq!(result.name, "grädde");
        assert_eq!(result.original_text, "1 1/2 dl grädde");
    }

    #[test]
    fn test_fraction_takes_priority_over_integer() {
        let result = parse_ingredient("1/2 dl mjölk");
        assert_eq!(result.quantity, 0.5);
        assert_eq!(result.unit, Some(Unit::Deciliter));
        assert_eq!(result.name, "mjölk");
    }

    #[test]
    fn test_parse_count_only() {
        let result = parse_ingredient("2 ägg");
        assert_eq!(result.quantity, 2.0);
        assert_eq!(result.unit, None);
        assert_eq!(result.name, "ägg");
        assert_eq!(result.normalized_name, "ägg");
    }

    #[test]
    fn test_parse_trailing_quantity() {
        let result = parse_ingredient("Mjöl 3dl");
        assert_eq!(result.quantity, 3.0);
        assert_eq!(result.unit, Some(Unit::Deciliter));
        assert_eq!(result.name, "mjöl");
    }

    #[test]
    fn test_trailing_number_without_unit_stays_in_name() {
        let result = parse_ingredient("Tomater 2");
        assert_eq!(result.quantity, 1.0);
        assert_eq!(result.unit, None);
        assert_eq!(result.name, "tomater 2");
    }

    #[test]
    fn test_decimal_separators() {
        assert_eq!(parse_ingredient("2,5 dl mjölk").quantity, 2.5);
        assert_eq!(parse_ingredient("2.5 dl mjölk").quantity, 2.5);
        assert_eq!(parse_ingredient("0,75 l vatten").unit, Some(Unit::Liter));
    }

    #[test]
    fn test_unit_without_space() {
        let result = parse_ingredient("500g nötfärs");
        assert_eq!(result.quantity, 500.0);
        assert_eq!(result.unit, Some(Unit::Gram));
        assert_eq!(result.normalized_name, "köttfärs");
    }

    #[test]
    fn test_unit_spellings_collapse() {
        for line in ["2 matskedar olja", "2 matsked olja", "2 msk olja", "2 MSK. olja"] {
            let result = parse_ingredient(line);
            assert_eq!(result.unit, Some(Unit::Tablespoon), "line '{}'", line);
            assert_eq!(result.name, "olja", "line '{}'", line);
        }
    }

    #[test]
    fn test_unit_is_not_a_prefix_match() {
        let result = parse_ingredient("2 gula lökar");
        assert_eq!(result.unit, None);
        assert_eq!(result.name, "gula lökar");

        let result = parse_ingredient("1 liten bit ingefära");
        assert_eq!(result.unit, None);
        assert_eq!(result.name, "liten bit ingefära");
    }

    #[test]
    fn test_vulgar_fraction_and_range() {
        let result = parse_ingredient("1½ tsk salt");
        assert_eq!(result.quantity, 1.5);
        assert_eq!(result.unit, Some(Unit::Teaspoon));

        let result = parse_ingredient("2-3 klyftor vitlök");
        assert_eq!(result.quantity, 3.0);
        assert_eq!(result.unit, Some(Unit::Clove));
        assert_eq!(result.normalized_name, "vitlök");
    }

    #[test]
    fn test_zero_and_division_by_zero_default_to_one() {
        let result = parse_ingredient("0 dl mjölk");
        assert_eq!(result.quantity, 1.0);
        assert_eq!(result.name, "mjölk");

        let result = parse_ingredient("1/0 dl mjölk");
        assert_eq!(result.quantity, 1.0);
        assert_eq!(result.unit, Some(Unit::Deciliter));
    }

    #[test]
    fn test_line_noise_is_ignored() {
        let result = parse_ingredient("- ca 500 g potatis");
        assert_eq!(result.quantity, 500.0);
        assert_eq!(result.unit, Some(Unit::Gram));
        assert_eq!(result.name, "potatis");
        assert_eq!(result.original_text, "- ca 500 g potatis");

        let result = parse_ingredient("Cashewnötter");
        assert_eq!(result.name, "cashewnötter");
    }

    #[test]
    fn test_amount_behind_descriptor_or_list_number() {
        for line in ["färsk 2 dl mjölk", "1. 2 dl mjölk", "3) Färsk 2 dl mjölk"] {
            let result = parse_ingredient(line);
            assert_eq!(result.quantity, 2.0, "line '{}'", line);
            assert_eq!(result.unit, Some(Unit::Deciliter), "line '{}'", line);
            assert_eq!(result.name, "mjölk", "line '{}'", line);
        }

        // The decimal comma survives because descriptors are skipped before cleaning
        let result = parse_ingredient("Hackad 2,5 dl persilja");
        assert_eq!(result.quantity, 2.5);
        assert_eq!(result.name, "persilja");

        let result = parse_ingredient("1 hackad 1/2 citron");
        assert_eq!(result.quantity, 0.5);
        assert_eq!(result.name, "citron");
    }

    #[test]
    fn test_amount_left_in_name_is_settled() {
        let result = parse_ingredient("2 hackade g");
        assert_eq!(result.quantity, 2.0);
        assert_eq!(result.unit, Some(Unit::Gram));

        let result = parse_ingredient("1 mjöl 3 dl");
        assert_eq!(result.quantity, 3.0);
        assert_eq!(result.unit, Some(Unit::Deciliter));
        assert_eq!(result.name, "mjöl");
    }

    #[test]
    fn test_formatted_line_parses_back() {
        for line in [
            "färsk 2 dl mjölk",
            "1. 2 dl mjölk",
            "2 hackade g",
            "1 mjöl 3 dl",
            "1 hackad 1/2 citron",
            "2 st. hackade 3 ägg",
            "1 2",
            "Tomater 2",
        ] {
            let parsed = parse_ingredient(line);
            let reparsed = parse_ingredient(&format_ingredient(&parsed));
            assert_eq!(reparsed.quantity, parsed.quantity, "line '{}'", line);
            assert_eq!(reparsed.unit, parsed.unit, "line '{}'", line);
        }
    }

    #[test]
    fn test_empty_name_falls_back() {
        let result = parse_ingredient("2 dl");
        assert_eq!(result.unit, Some(Unit::Deciliter));
        assert_eq!(result.name, "2 dl");
        assert!(!result.normalized_name.is_empty());

        let result = parse_ingredient("3 hackade");
        assert_eq!(result.name, "hackade");
    }

    #[test]
    fn test_empty_input() {
        let result = parse_ingredient("");
        assert_eq!(result.quantity, 1.0);
        assert_eq!(result.unit, None);
        assert_eq!(result.normalized_name, "");
    }

    #[test]
    fn test_extract_quantity_consumes_whitespace() {
        assert_eq!(extract_quantity("  3   dl"), (3.0, "dl"));
        assert_eq!(extract_quantity("1 1/2"), (1.5, ""));
        assert_eq!(extract_quantity(""), (1.0, ""));
    }

    #[test]
    fn test_extract_unit_unchanged_without_match() {
        assert_eq!(extract_unit("ägg"), (None, "ägg"));
        assert_eq!(extract_unit("kg"), (Some(Unit::Kilogram), ""));
        assert_eq!(extract_unit("Förpackningar jäst"), (Some(Unit::Package), "jäst"));
    }

    #[test]
    fn test_parse_ingredient_list() {
        let text = "Ingredienser:\n3 morötter\n\n2 dl vispgrädde\nTill såsen:\n1 burk krossade tomater";
        let list = parse_ingredient_list(text);

        assert_eq!(list.len(), 3);
        assert_eq!(list[0].normalized_name, "morot");
        assert_eq!(list[1].normalized_name, "grädde");
        assert_eq!(list[2].unit, Some(Unit::Can));
        assert_eq!(list[2].normalized_name, "tomat");
    }
}
