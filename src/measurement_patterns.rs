//! # Measurement Patterns Module
//!
//! This module contains the regex patterns used to pull quantities and units
//! off the front (or, for some scraped sources, the back) of an ingredient line.

use crate::measurement_types::UNIT_SPELLINGS;
use lazy_static::lazy_static;
use regex::Regex;

/// Mixed or plain fraction: "1 1/2", "1/2", "3⁄4"
pub const FRACTION_PATTERN: &str = r"^(?:(?P<whole>\d+)\s+)?(?P<num>\d+)\s*[⁄/]\s*(?P<den>\d+)";

/// Unicode vulgar fraction, optionally after a whole number: "½", "1½", "1 ¼"
pub const VULGAR_FRACTION_PATTERN: &str = r"^(?:(?P<whole>\d+)\s*)?(?P<frac>[½⅓⅔¼¾⅛])";

/// Numeric range: "2-3", "1,5–2"
pub const RANGE_PATTERN: &str =
    r"^(?P<low>\d+(?:[.,]\d+)?)\s*[-–—]\s*(?P<high>\d+(?:[.,]\d+)?)";

/// Decimal with either separator: "2.5", "0,75"
pub const DECIMAL_PATTERN: &str = r"^\d+[.,]\d+";

/// Plain integer
pub const INTEGER_PATTERN: &str = r"^\d+";

/// Builds the unit alternation with the longest spellings first so that
/// "matskedar" wins over "msk"-style prefixes and "liter" over "l".
pub fn unit_alternation() -> String {
    let mut spellings: Vec<&str> = UNIT_SPELLINGS.iter().map(|(s, _)| *s).collect();
    spellings.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    spellings
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|")
}

lazy_static! {
    pub static ref FRACTION_REGEX: Regex =
        Regex::new(FRACTION_PATTERN).expect("Fraction pattern should be valid");
    pub static ref VULGAR_FRACTION_REGEX: Regex =
        Regex::new(VULGAR_FRACTION_PATTERN).expect("Vulgar fraction pattern should be valid");
    pub static ref RANGE_REGEX: Regex =
        Regex::new(RANGE_PATTERN).expect("Range pattern should be valid");
    pub static ref DECIMAL_REGEX: Regex =
        Regex::new(DECIMAL_PATTERN).expect("Decimal pattern should be valid");
    pub static ref INTEGER_REGEX: Regex =
        Regex::new(INTEGER_PATTERN).expect("Integer pattern should be valid");

    /// Leading unit token at a word boundary, with optional period and spacing
    pub static ref UNIT_REGEX: Regex = Regex::new(&format!(
        r"(?i)^(?P<unit>{})\b\.?\s*",
        unit_alternation()
    ))
    .expect("Unit pattern should be valid");

    /// List bullets left behind by OCR or copy-paste: "- ", "• ", "* "
    pub static ref BULLET_REGEX: Regex =
        Regex::new(r"^[-•*·]+\s*").expect("Bullet pattern should be valid");

    /// Numbered-list marker: "1. ", "2) "
    pub static ref LIST_MARKER_REGEX: Regex =
        Regex::new(r"^\d+[.)]\s+").expect("List marker pattern should be valid");

    /// Approximation marker in front of a number: "ca 500 g", "cirka 2 dl"
    pub static ref APPROXIMATION_REGEX: Regex =
        Regex::new(r"(?i)^(?:ca\.?|cirka|ungefär|about|approx\.?)\s*(?P<rest>[\d½⅓⅔¼¾⅛].*)$")
            .expect("Approximation pattern should be valid");

    /// Name followed by a quantity and unit at the end of the line: "Mjöl 3dl"
    pub static ref TRAILING_QUANTITY_REGEX: Regex = Regex::new(&format!(
        r"(?i)^(?P<name>.*?\S)\s*(?P<qty>\d+(?:\s+\d+/\d+|/\d+|[.,]\d+)?)\s*(?P<unit>{})\.?$",
        unit_alternation()
    ))
    .expect("Trailing quantity pattern should be valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_is_longest_first() {
        let alternation = unit_alternation();
        let position = |s: &str| {
            alternation
                .split('|')
                .position(|candidate| candidate == s)
                .unwrap()
        };

        assert!(position("matskedar") < position("matsked"));
        assert!(position("matsked") < position("msk"));
        assert!(position("liter") < position("l"));
        assert!(position("stycken") < position("st"));
    }

    #[test]
    fn test_unit_regex_respects_word_boundaries() {
        assert!(UNIT_REGEX.is_match("dl mjölk"));
        assert!(UNIT_REGEX.is_match("dl"));
        assert!(UNIT_REGEX.is_match("st. ägg"));
        assert!(!UNIT_REGEX.is_match("lök"));
        assert!(!UNIT_REGEX.is_match("gul lök"));
        assert!(!UNIT_REGEX.is_match("bitter choklad"));
    }

    #[test]
    fn test_trailing_quantity_regex() {
        let captures = TRAILING_QUANTITY_REGEX.captures("Mjöl 3dl").unwrap();
        assert_eq!(&captures["name"], "Mjöl");
        assert_eq!(&captures["qty"], "3");
        assert_eq!(&captures["unit"], "dl");

        let captures = TRAILING_QUANTITY_REGEX.captures("Socker 1,5 dl").unwrap();
        assert_eq!(&captures["name"], "Socker");
        assert_eq!(&captures["qty"], "1,5");

        assert!(TRAILING_QUANTITY_REGEX.captures("Ägg 2").is_none());
    }

    #[test]
    fn test_list_marker_needs_trailing_space() {
        assert_eq!(LIST_MARKER_REGEX.find("1. 2 dl mjölk").map(|m| m.end()), Some(3));
        assert!(LIST_MARKER_REGEX.is_match("12) ägg"));
        assert!(!LIST_MARKER_REGEX.is_match("1.5 dl mjölk"));
        assert!(!LIST_MARKER_REGEX.is_match("2 ägg"));
    }
}
