//! # Pantry Staples
//!
//! Recognises ingredient lines naming something assumed to always be at home
//! (salt, pepper, water, cooking fat, ...) so they never reach the grocery list.
//! The check runs on the raw line and needs nothing from the parser, so it can
//! reject lines before any parsing happens.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

/// Staple ingredients, matched as whole words
pub const STAPLE_TERMS: &[&str] = &[
    // Salt and pepper
    "salt",
    "flingsalt",
    "havssalt",
    "peppar",
    "svartpeppar",
    "vitpeppar",
    "pepper",
    "black pepper",
    "white pepper",
    // Water and ice
    "vatten",
    "kranvatten",
    "isbitar",
    "water",
    "ice cubes",
    // Sugar
    "socker",
    "strösocker",
    "sugar",
    // Cooking fats
    "olja",
    "olivolja",
    "rapsolja",
    "matolja",
    "solrosolja",
    "neutral olja",
    "smör",
    "margarin",
    "olive oil",
    "vegetable oil",
    "cooking oil",
    "butter",
    "margarine",
];

/// Phrases that contain a staple word but name something else; removed from
/// the line before staple terms are matched
pub const NON_STAPLE_PHRASES: &[&str] = &[
    "bell pepper",
    "sweet pepper",
    "red pepper",
    "green pepper",
    "yellow pepper",
    "chili pepper",
    "chilli pepper",
    "cayenne pepper",
    "jalapeño pepper",
    "pepper jack",
    "peanut butter",
    "almond butter",
    "cashew butter",
    "nut butter",
    "cocoa butter",
    "apple butter",
    "butter beans",
];

/// Usage phrases that make any line a staple regardless of the ingredient
pub const FRYING_PHRASES: &[&str] = &[
    "till stekning",
    "för stekning",
    "att steka i",
    "till att steka i",
    "till formen",
    "att smörja formen",
    "till fritering",
    "for frying",
    "for cooking",
    "for greasing",
];

fn word_alternation(terms: &[&str]) -> String {
    let mut terms: Vec<&str> = terms.to_vec();
    terms.sort_by(|a, b| b.len().cmp(&a.len()));
    terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|")
}

lazy_static! {
    static ref STAPLE_REGEX: Regex =
        Regex::new(&format!(r"\b(?:{})\b", word_alternation(STAPLE_TERMS)))
            .expect("Staple pattern should be valid");
    static ref NON_STAPLE_REGEX: Regex =
        Regex::new(&format!(r"\b(?:{})\b", word_alternation(NON_STAPLE_PHRASES)))
            .expect("Non-staple phrase pattern should be valid");
    static ref FRYING_REGEX: Regex =
        Regex::new(&format!(r"\b(?:{})\b", word_alternation(FRYING_PHRASES)))
            .expect("Frying phrase pattern should be valid");
}

/// Check whether a raw ingredient line names a pantry staple
///
/// Matching is word-based over the lowercased line, so "salt" matches
/// "1 tsk salt" but not "saltgurka", and "olja" does not match "sesamolja".
///
/// # Examples
///
/// ```rust
/// use grocery_ingredients::staples::is_pantry_staple;
///
/// assert!(is_pantry_staple("Peppar"));
/// assert!(is_pantry_staple("2 msk olivolja för stekning"));
/// assert!(!is_pantry_staple("2 dl mjölk"));
/// ```
pub fn is_pantry_staple(raw_line: &str) -> bool {
    let line = raw_line.to_lowercase();

    if FRYING_REGEX.is_match(&line) {
        trace!("Frying phrase marks '{}' as staple", raw_line);
        return true;
    }

    let line = NON_STAPLE_REGEX.replace_all(&line, " ");
    let is_staple = STAPLE_REGEX.is_match(&line);
    if is_staple {
        trace!("Staple term found in '{}'", raw_line);
    }
    is_staple
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_staples() {
        assert!(is_pantry_staple("salt"));
        assert!(is_pantry_staple("Peppar"));
        assert!(is_pantry_staple("1 krm svartpeppar"));
        assert!(is_pantry_staple("Salt och peppar"));
        assert!(is_pantry_staple("3 dl vatten"));
        assert!(is_pantry_staple("25 g smör"));
        assert!(is_pantry_staple("1 msk Rapsolja"));
    }

    #[test]
    fn test_frying_phrase_overrides_ingredient() {
        assert!(is_pantry_staple("2 msk olivolja för stekning"));
        assert!(is_pantry_staple("Kokosfett till stekning"));
        assert!(is_pantry_staple("ströbröd till formen"));
        assert!(is_pantry_staple("ghee, for frying"));
    }

    #[test]
    fn test_non_staples() {
        assert!(!is_pantry_staple("2 dl mjölk"));
        assert!(!is_pantry_staple("3 saltgurkor"));
        assert!(!is_pantry_staple("1 msk sesamolja"));
        assert!(!is_pantry_staple("1 chilipeppar"));
        assert!(!is_pantry_staple("500 g smörgåsgurka"));
        assert!(!is_pantry_staple(""));
    }

    #[test]
    fn test_english_terms() {
        assert!(is_pantry_staple("1 tbsp olive oil"));
        assert!(is_pantry_staple("Black pepper"));
        assert!(!is_pantry_staple("1 red bell pepper"));
        assert!(!is_pantry_staple("2 dl peanut butter"));
        assert!(!is_pantry_staple("1 l ice cream"));
    }

    #[test]
    fn test_plain_english_pepper_and_butter() {
        assert!(is_pantry_staple("1 tsp pepper"));
        assert!(is_pantry_staple("2 tbsp butter"));
        assert!(is_pantry_staple("Salt and pepper"));
        assert!(is_pantry_staple("50 g salted butter"));
        assert!(!is_pantry_staple("2 green peppers"));
        assert!(!is_pantry_staple("1 cayenne pepper"));
        assert!(!is_pantry_staple("400 g butter beans"));
        assert!(!is_pantry_staple("1 butternut squash"));
    }
}
