//! # Measurement Types Module
//!
//! This module defines the canonical cooking units recognised in Swedish recipe
//! text, together with every spelling that collapses onto each of them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical cooking unit
///
/// Every spelling found in recipe text ("matskedar", "matsked", "msk") maps to
/// exactly one variant, and each variant renders as a single abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Unit {
    // Count units
    /// Styck
    #[serde(rename = "st")]
    Piece,

    // Weight units
    /// Gram
    #[serde(rename = "g")]
    Gram,
    /// Kilogram
    #[serde(rename = "kg")]
    Kilogram,

    // Volume units
    /// Deciliter
    #[serde(rename = "dl")]
    Deciliter,
    /// Liter
    #[serde(rename = "l")]
    Liter,
    /// Milliliter
    #[serde(rename = "ml")]
    Milliliter,
    /// Centiliter
    #[serde(rename = "cl")]
    Centiliter,
    /// Matsked
    #[serde(rename = "msk")]
    Tablespoon,
    /// Tesked
    #[serde(rename = "tsk")]
    Teaspoon,
    /// Kryddmått
    #[serde(rename = "krm")]
    SpiceMeasure,

    // Package units
    /// Förpackning / paket
    #[serde(rename = "förp")]
    Package,
    /// Burk
    #[serde(rename = "burk")]
    Can,
    /// Flaska
    #[serde(rename = "flaska")]
    Bottle,
    /// Knippe
    #[serde(rename = "knippe")]
    Bunch,
    /// Näve
    #[serde(rename = "näve")]
    Handful,
    /// Skiva
    #[serde(rename = "skiva")]
    Slice,
    /// Klyfta
    #[serde(rename = "klyfta")]
    Clove,
    /// Bit
    #[serde(rename = "bit")]
    Chunk,
}

/// Every recognised spelling and the unit it collapses to.
///
/// Order is irrelevant here; the unit pattern sorts spellings longest-first.
pub const UNIT_SPELLINGS: &[(&str, Unit)] = &[
    ("stycken", Unit::Piece),
    ("styck", Unit::Piece),
    ("st", Unit::Piece),
    ("gram", Unit::Gram),
    ("grams", Unit::Gram),
    ("gr", Unit::Gram),
    ("g", Unit::Gram),
    ("kilogram", Unit::Kilogram),
    ("kilo", Unit::Kilogram),
    ("kg", Unit::Kilogram),
    ("deciliter", Unit::Deciliter),
    ("dl", Unit::Deciliter),
    ("liter", Unit::Liter),
    ("l", Unit::Liter),
    ("milliliter", Unit::Milliliter),
    ("ml", Unit::Milliliter),
    ("centiliter", Unit::Centiliter),
    ("cl", Unit::Centiliter),
    ("matskedar", Unit::Tablespoon),
    ("matsked", Unit::Tablespoon),
    ("msk", Unit::Tablespoon),
    ("tbsp", Unit::Tablespoon),
    ("teskedar", Unit::Teaspoon),
    ("tesked", Unit::Teaspoon),
    ("tsk", Unit::Teaspoon),
    ("tsp", Unit::Teaspoon),
    ("kryddmått", Unit::SpiceMeasure),
    ("krm", Unit::SpiceMeasure),
    ("förpackningar", Unit::Package),
    ("förpackning", Unit::Package),
    ("förp", Unit::Package),
    ("paket", Unit::Package),
    ("burkar", Unit::Can),
    ("burk", Unit::Can),
    ("flaskor", Unit::Bottle),
    ("flaska", Unit::Bottle),
    ("knippor", Unit::Bunch),
    ("knippe", Unit::Bunch),
    ("nävar", Unit::Handful),
    ("näve", Unit::Handful),
    ("skivor", Unit::Slice),
    ("skiva", Unit::Slice),
    ("klyftor", Unit::Clove),
    ("klyfta", Unit::Clove),
    ("bitar", Unit::Chunk),
    ("bit", Unit::Chunk),
];

impl Unit {
    /// Canonical abbreviation used for display and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Piece => "st",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Deciliter => "dl",
            Unit::Liter => "l",
            Unit::Milliliter => "ml",
            Unit::Centiliter => "cl",
            Unit::Tablespoon => "msk",
            Unit::Teaspoon => "tsk",
            Unit::SpiceMeasure => "krm",
            Unit::Package => "förp",
            Unit::Can => "burk",
            Unit::Bottle => "flaska",
            Unit::Bunch => "knippe",
            Unit::Handful => "näve",
            Unit::Slice => "skiva",
            Unit::Clove => "klyfta",
            Unit::Chunk => "bit",
        }
    }

    /// Look up a unit by any of its spellings, ignoring case and a trailing period
    pub fn from_spelling(spelling: &str) -> Option<Unit> {
        let spelling = spelling.trim().trim_end_matches('.').to_lowercase();
        UNIT_SPELLINGS
            .iter()
            .find(|(candidate, _)| *candidate == spelling)
            .map(|(_, unit)| *unit)
    }

    /// Check if this is a volume unit
    pub fn is_volume(&self) -> bool {
        matches!(
            self,
            Unit::Deciliter
                | Unit::Liter
                | Unit::Milliliter
                | Unit::Centiliter
                | Unit::Tablespoon
                | Unit::Teaspoon
                | Unit::SpiceMeasure
        )
    }

    /// Check if this is a weight unit
    pub fn is_weight(&self) -> bool {
        matches!(self, Unit::Gram | Unit::Kilogram)
    }

    /// Check if this is a count or package unit
    pub fn is_count(&self) -> bool {
        !self.is_volume() && !self.is_weight()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_spelling_resolves() {
        for (spelling, unit) in UNIT_SPELLINGS {
            assert_eq!(Unit::from_spelling(spelling), Some(*unit), "spelling '{}'", spelling);
        }
    }

    #[test]
    fn test_canonical_abbreviation_is_a_spelling() {
        for (_, unit) in UNIT_SPELLINGS {
            assert_eq!(Unit::from_spelling(unit.as_str()), Some(*unit));
        }
    }

    #[test]
    fn test_from_spelling_is_case_insensitive() {
        assert_eq!(Unit::from_spelling("Matskedar"), Some(Unit::Tablespoon));
        assert_eq!(Unit::from_spelling("DL"), Some(Unit::Deciliter));
        assert_eq!(Unit::from_spelling("st."), Some(Unit::Piece));
        assert_eq!(Unit::from_spelling("Förpackningar"), Some(Unit::Package));
        assert_eq!(Unit::from_spelling("kopp"), None);
    }

    #[test]
    fn test_unit_families() {
        assert!(Unit::Deciliter.is_volume());
        assert!(Unit::SpiceMeasure.is_volume());
        assert!(!Unit::Deciliter.is_weight());

        assert!(Unit::Kilogram.is_weight());
        assert!(!Unit::Kilogram.is_count());

        assert!(Unit::Can.is_count());
        assert!(Unit::Piece.is_count());
        assert!(!Unit::Clove.is_volume());
    }

    #[test]
    fn test_serializes_as_abbreviation() {
        assert_eq!(serde_json::to_string(&Unit::Tablespoon).unwrap(), "\"msk\"");
        assert_eq!(serde_json::to_string(&Unit::Package).unwrap(), "\"förp\"");
        let unit: Unit = serde_json::from_str("\"klyfta\"").unwrap();
        assert_eq!(unit, Unit::Clove);
    }
}
