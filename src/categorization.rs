//! # Grocery Categorization
//!
//! Assigns a store section to a grocery entry by keyword containment over its
//! normalized name. Keywords are tried longest first, so "kokosmjölk" is found
//! before "mjölk" and "potatismjöl" before "potatis"; substring matching lets
//! Swedish compounds such as "kycklingfilé" hit "kyckling".

use crate::ingredient_model::GroceryCategory;
use log::trace;
use std::sync::LazyLock;

/// Markers that put any item in the freezer section
const FROZEN_MARKERS: &[&str] = &["djupfryst", "fryst", "frozen"];

const CATEGORY_KEYWORDS: &[(&str, GroceryCategory)] = &[
    // Produce
    ("lök", GroceryCategory::Produce),
    ("morot", GroceryCategory::Produce),
    ("tomat", GroceryCategory::Produce),
    ("potatis", GroceryCategory::Produce),
    ("paprika", GroceryCategory::Produce),
    ("gurka", GroceryCategory::Produce),
    ("sallad", GroceryCategory::Produce),
    ("spenat", GroceryCategory::Produce),
    ("broccoli", GroceryCategory::Produce),
    ("kål", GroceryCategory::Produce),
    ("zucchini", GroceryCategory::Produce),
    ("aubergine", GroceryCategory::Produce),
    ("avokado", GroceryCategory::Produce),
    ("ingefära", GroceryCategory::Produce),
    ("chili", GroceryCategory::Produce),
    ("persilja", GroceryCategory::Produce),
    ("dill", GroceryCategory::Produce),
    ("basilika", GroceryCategory::Produce),
    ("koriander", GroceryCategory::Produce),
    ("timjan", GroceryCategory::Produce),
    ("rosmarin", GroceryCategory::Produce),
    ("mynta", GroceryCategory::Produce),
    ("citron", GroceryCategory::Produce),
    ("lime", GroceryCategory::Produce),
    ("äpple", GroceryCategory::Produce),
    ("banan", GroceryCategory::Produce),
    ("apelsin", GroceryCategory::Produce),
    ("päron", GroceryCategory::Produce),
    ("bär", GroceryCategory::Produce),
    ("jordgubbe", GroceryCategory::Produce),
    ("hallon", GroceryCategory::Produce),
    ("vindruv", GroceryCategory::Produce),
    ("svamp", GroceryCategory::Produce),
    ("champinjon", GroceryCategory::Produce),
    ("selleri", GroceryCategory::Produce),
    ("rödbeta", GroceryCategory::Produce),
    ("palsternacka", GroceryCategory::Produce),
    ("rädisa", GroceryCategory::Produce),
    // Meat
    ("kyckling", GroceryCategory::Meat),
    ("fläsk", GroceryCategory::Meat),
    ("nötkött", GroceryCategory::Meat),
    ("köttfärs", GroceryCategory::Meat),
    ("färs", GroceryCategory::Meat),
    ("bacon", GroceryCategory::Meat),
    ("korv", GroceryCategory::Meat),
    ("skinka", GroceryCategory::Meat),
    ("lamm", GroceryCategory::Meat),
    ("biff", GroceryCategory::Meat),
    ("rostbiff", GroceryCategory::Meat),
    ("entrecote", GroceryCategory::Meat),
    ("högrev", GroceryCategory::Meat),
    ("kassler", GroceryCategory::Meat),
    ("salami", GroceryCategory::Meat),
    ("chorizo", GroceryCategory::Meat),
    ("köttbulle", GroceryCategory::Meat),
    // Fish
    ("lax", GroceryCategory::Fish),
    ("torsk", GroceryCategory::Fish),
    ("sej", GroceryCategory::Fish),
    ("räka", GroceryCategory::Fish),
    ("tonfisk", GroceryCategory::Pantry),
    ("sill", GroceryCategory::Fish),
    ("makrill", GroceryCategory::Fish),
    ("fisk", GroceryCategory::Fish),
    ("mussl", GroceryCategory::Fish),
    ("ostron", GroceryCategory::Fish),
    // Dairy
    ("mjölk", GroceryCategory::Dairy),
    ("grädde", GroceryCategory::Dairy),
    ("ost", GroceryCategory::Dairy),
    ("smör", GroceryCategory::Dairy),
    ("yoghurt", GroceryCategory::Dairy),
    ("filmjölk", GroceryCategory::Dairy),
    ("crème fraiche", GroceryCategory::Dairy),
    ("kvarg", GroceryCategory::Dairy),
    ("keso", GroceryCategory::Dairy),
    ("parmesan", GroceryCategory::Dairy),
    ("mozzarella", GroceryCategory::Dairy),
    ("halloumi", GroceryCategory::Dairy),
    ("ägg", GroceryCategory::Dairy),
    // Bakery
    ("bröd", GroceryCategory::Bakery),
    ("tortilla", GroceryCategory::Bakery),
    ("baguette", GroceryCategory::Bakery),
    ("bulle", GroceryCategory::Bakery),
    ("knäcke", GroceryCategory::Bakery),
    // Pantry
    ("mjöl", GroceryCategory::Pantry),
    ("potatismjöl", GroceryCategory::Pantry),
    ("kokosmjölk", GroceryCategory::Pantry),
    ("socker", GroceryCategory::Pantry),
    ("ris", GroceryCategory::Pantry),
    ("pasta", GroceryCategory::Pantry),
    ("spaghetti", GroceryCategory::Pantry),
    ("makaroner", GroceryCategory::Pantry),
    ("nudlar", GroceryCategory::Pantry),
    ("buljong", GroceryCategory::Pantry),
    ("fond", GroceryCategory::Pantry),
    ("böna", GroceryCategory::Pantry),
    ("lins", GroceryCategory::Pantry),
    ("kikärt", GroceryCategory::Pantry),
    ("tomatpuré", GroceryCategory::Pantry),
    ("passerade tomat", GroceryCategory::Pantry),
    ("olja", GroceryCategory::Pantry),
    ("vinäger", GroceryCategory::Pantry),
    ("soja", GroceryCategory::Pantry),
    ("senap", GroceryCategory::Pantry),
    ("ketchup", GroceryCategory::Pantry),
    ("kryddor", GroceryCategory::Pantry),
    ("curry", GroceryCategory::Pantry),
    ("paprikapulver", GroceryCategory::Pantry),
    ("kanel", GroceryCategory::Pantry),
    ("jäst", GroceryCategory::Pantry),
    ("bakpulver", GroceryCategory::Pantry),
    ("havregryn", GroceryCategory::Pantry),
    ("nöt", GroceryCategory::Pantry),
    ("mandel", GroceryCategory::Pantry),
    ("honung", GroceryCategory::Pantry),
    // Frozen
    ("glass", GroceryCategory::Frozen),
    ("fiskpinne", GroceryCategory::Frozen),
    // Beverages
    ("juice", GroceryCategory::Beverages),
    ("läsk", GroceryCategory::Beverages),
    ("kaffe", GroceryCategory::Beverages),
    ("rödvin", GroceryCategory::Beverages),
    ("vitt vin", GroceryCategory::Beverages),
    ("mineralvatten", GroceryCategory::Beverages),
    // Snacks
    ("choklad", GroceryCategory::Snacks),
    ("chips", GroceryCategory::Snacks),
    ("godis", GroceryCategory::Snacks),
    ("popcorn", GroceryCategory::Snacks),
    ("kex", GroceryCategory::Snacks),
];

/// Keyword table sorted longest first, then alphabetically for determinism
static KEYWORDS_BY_LENGTH: LazyLock<Vec<(&'static str, GroceryCategory)>> = LazyLock::new(|| {
    let mut keywords = CATEGORY_KEYWORDS.to_vec();
    keywords.sort_by(|a, b| {
        b.0.chars()
            .count()
            .cmp(&a.0.chars().count())
            .then_with(|| a.0.cmp(b.0))
    });
    keywords
});

/// Categorize an ingredient by its (normalized) name
///
/// Falls back to [`GroceryCategory::Other`] when no keyword is contained in
/// the name.
///
/// # Examples
///
/// ```rust
/// use grocery_ingredients::categorization::categorize;
/// use grocery_ingredients::ingredient_model::GroceryCategory;
///
/// assert_eq!(categorize("kycklingfilé"), GroceryCategory::Meat);
/// assert_eq!(categorize("kokosmjölk"), GroceryCategory::Pantry);
/// assert_eq!(categorize("mjölk"), GroceryCategory::Dairy);
/// ```
pub fn categorize(name: &str) -> GroceryCategory {
    let lower = name.to_lowercase();

    if FROZEN_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return GroceryCategory::Frozen;
    }

    let category = KEYWORDS_BY_LENGTH
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(GroceryCategory::Other, |(_, category)| *category);

    trace!("Categorized '{}' as {:?}", name, category);
    category
}
