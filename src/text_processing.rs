//! # Text Processing Module
//!
//! This module turns the name part of an ingredient line into the key used to
//! deduplicate grocery entries.
//!
//! ## Features
//!
//! - Descriptor stripping: leading/trailing preparation words such as "hackad",
//!   "riven" or "färsk" are dropped when they stand alone as a word
//! - Parenthetical asides are removed: "lök (gul)" -> "lök"
//! - Per-word plural folding through an irregular-plural table: "morötter" -> "morot"
//! - Whole-phrase synonym folding: "vispgrädde", "heavy cream" -> "grädde"
//!
//! The steps run in a fixed order (descriptors, parentheticals, punctuation,
//! whitespace, plurals, synonyms); reordering them changes the resulting keys.

use lazy_static::lazy_static;
use log::{debug, trace, warn};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Standalone preparation words dropped from the start or end of a name
static DESCRIPTORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Swedish
        "färsk", "färska", "färskt",
        "finhackad", "finhackade", "finhackat",
        "grovhackad", "grovhackade", "grovhackat",
        "hackad", "hackade", "hackat",
        "riven", "rivet", "rivna", "finriven", "finrivet", "finrivna",
        "skivad", "skivade", "skivat",
        "tärnad", "tärnade", "tärnat",
        "strimlad", "strimlade", "strimlat",
        "krossad", "krossade", "krossat",
        "mosad", "mosade", "mosat",
        "kokt", "kokta",
        "stekt", "stekta",
        "grillad", "grillade", "grillat",
        "rökt", "rökta",
        "saltad", "saltade", "saltat",
        // English
        "fresh", "chopped", "grated", "sliced", "diced", "shredded", "crushed",
        "mashed", "cooked", "fried", "grilled", "smoked", "salted", "minced",
    ]
    .into_iter()
    .collect()
});

/// Irregular plural -> singular, applied word by word
static PLURALS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Vegetables
    map.insert("morötter", "morot");
    map.insert("tomater", "tomat");
    map.insert("körsbärstomater", "körsbärstomat");
    map.insert("lökar", "lök");
    map.insert("gullökar", "gullök");
    map.insert("rödlökar", "rödlök");
    map.insert("schalottenlökar", "schalottenlök");
    map.insert("salladslökar", "salladslök");
    map.insert("purjolökar", "purjolök");
    map.insert("potatisar", "potatis");
    map.insert("sötpotatisar", "sötpotatis");
    map.insert("paprikor", "paprika");
    map.insert("gurkor", "gurka");
    map.insert("champinjoner", "champinjon");
    map.insert("svampar", "svamp");
    map.insert("auberginer", "aubergine");
    map.insert("zucchinis", "zucchini");
    map.insert("avokador", "avokado");
    map.insert("bönor", "böna");
    map.insert("ärtor", "ärta");
    map.insert("linser", "lins");
    map.insert("rädisor", "rädisa");
    map.insert("rödbetor", "rödbeta");
    map.insert("palsternackor", "palsternacka");
    map.insert("kålrötter", "kålrot");
    map.insert("selleristjälkar", "selleristjälk");
    map.insert("vitlöksklyftor", "vitlöksklyfta");
    map.insert("chilifrukter", "chilifrukt");
    map.insert("oliver", "oliv");

    // Fruit, nuts and berries
    map.insert("äpplen", "äpple");
    map.insert("citroner", "citron");
    map.insert("limefrukter", "limefrukt");
    map.insert("apelsiner", "apelsin");
    map.insert("bananer", "banan");
    map.insert("persikor", "persika");
    map.insert("jordgubbar", "jordgubbe");
    map.insert("dadlar", "dadel");
    map.insert("nötter", "nöt");
    map.insert("valnötter", "valnöt");
    map.insert("hasselnötter", "hasselnöt");
    map.insert("jordnötter", "jordnöt");
    map.insert("mandlar", "mandel");

    // Meat, fish and the rest
    map.insert("kycklingfiléer", "kycklingfilé");
    map.insert("kycklinglår", "kycklinglår");
    map.insert("laxfiléer", "laxfilé");
    map.insert("torskfiléer", "torskfilé");
    map.insert("korvar", "korv");
    map.insert("wienerkorvar", "wienerkorv");
    map.insert("köttbullar", "köttbulle");
    map.insert("fiskpinnar", "fiskpinne");
    map.insert("räkor", "räka");
    map.insert("ägg", "ägg");
    map.insert("tortillas", "tortilla");
    map.insert("brödskivor", "brödskiva");

    // English
    map.insert("tomatoes", "tomato");
    map.insert("potatoes", "potato");
    map.insert("onions", "onion");
    map.insert("carrots", "carrot");
    map.insert("eggs", "egg");

    map
});

/// Closely related spellings folded to one canonical ingredient
static SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert("vispgrädde", "grädde");
    map.insert("matlagningsgrädde", "grädde");
    map.insert("visp grädde", "grädde");
    map.insert("heavy cream", "grädde");
    map.insert("cream", "grädde");

    map.insert("standardmjölk", "mjölk");
    map.insert("mellanmjölk", "mjölk");
    map.insert("lättmjölk", "mjölk");
    map.insert("milk", "mjölk");

    map.insert("gul lök", "lök");
    map.insert("gullök", "lök");
    map.insert("onion", "lök");
    map.insert("yellow onion", "lök");
    map.insert("red onion", "rödlök");

    map.insert("vitlöksklyfta", "vitlök");
    map.insert("garlic", "vitlök");

    map.insert("mjöl", "vetemjöl");
    map.insert("flour", "vetemjöl");

    map.insert("strösocker", "socker");
    map.insert("sugar", "socker");

    map.insert("creme fraiche", "crème fraiche");
    map.insert("crème fraîche", "crème fraiche");
    map.insert("butter", "smör");
    map.insert("egg", "ägg");
    map.insert("potato", "potatis");
    map.insert("carrot", "morot");
    map.insert("tomato", "tomat");

    map.insert("kycklingbröstfilé", "kycklingfilé");
    map.insert("kycklingbröst", "kycklingfilé");
    map.insert("chicken breast", "kycklingfilé");
    map.insert("nötfärs", "köttfärs");
    map.insert("ground beef", "köttfärs");
    map.insert("parmesanost", "parmesan");

    map
});

lazy_static! {
    static ref PARENTHETICAL_REGEX: Regex =
        Regex::new(r"\([^()]*\)").expect("Parenthetical pattern should be valid");
    static ref UNCLOSED_PARENTHETICAL_REGEX: Regex =
        Regex::new(r"\([^)]*$").expect("Unclosed parenthetical pattern should be valid");
}

const PUNCTUATION: &[char] = &[',', '.', ':', ';', '!', '?'];

fn is_descriptor(token: &str) -> bool {
    DESCRIPTORS.contains(token.trim_matches(PUNCTUATION))
}

/// Drop descriptor words standing alone at either end of the name
fn strip_descriptors(text: &str) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let start = tokens
        .iter()
        .position(|t| !is_descriptor(t))
        .unwrap_or(tokens.len());
    let end = tokens
        .iter()
        .rposition(|t| !is_descriptor(t))
        .map_or(start, |last| last + 1);

    tokens[start..end.max(start)].join(" ")
}

/// Text following any standalone descriptor words at the start
///
/// Works on raw text, so "Färsk 2,5 dl mjölk" gives "2,5 dl mjölk" with the
/// number untouched.
pub fn skip_leading_descriptors(text: &str) -> &str {
    let mut rest = text.trim_start();
    while let Some(token) = rest.split_whitespace().next() {
        if !is_descriptor(&token.to_lowercase()) {
            break;
        }
        rest = rest[token.len()..].trim_start();
    }
    rest
}

fn strip_parentheticals(text: &str) -> String {
    let mut text = text.to_string();
    // Nested asides come out innermost first
    loop {
        let stripped = PARENTHETICAL_REGEX.replace_all(&text, " ").into_owned();
        if stripped == text {
            break;
        }
        text = stripped;
    }
    UNCLOSED_PARENTHETICAL_REGEX
        .replace(&text, " ")
        .replace(')', " ")
}

/// Clean the name part of an ingredient line
///
/// Lowercases, strips standalone descriptors at either end, removes
/// parenthetical asides and punctuation, and collapses whitespace. The result
/// may be empty when the text consisted only of descriptors or asides.
///
/// # Examples
///
/// ```rust
/// use grocery_ingredients::text_processing::clean_name;
///
/// assert_eq!(clean_name("Lök (gul), hackad"), "lök");
/// assert_eq!(clean_name("färsk  basilika!"), "basilika");
/// ```
pub fn clean_name(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_descriptors = strip_descriptors(&lowered);
    let without_asides = strip_parentheticals(&without_descriptors);
    let without_punctuation: String = without_asides
        .chars()
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();
    let cleaned = without_punctuation
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ");

    trace!("Cleaned ingredient name: '{}' -> '{}'", text, cleaned);
    cleaned
}

/// Fold every word of the phrase through the irregular-plural table
pub fn fold_plurals(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| PLURALS.get(word).copied().unwrap_or(word))
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Map the whole phrase to its canonical ingredient, if it has one
pub fn fold_synonym(phrase: &str) -> String {
    match SYNONYMS.get(phrase) {
        Some(canonical) => {
            debug!("Folded synonym '{}' -> '{}'", phrase, canonical);
            canonical.to_string()
        }
        None => phrase.to_string(),
    }
}

/// Fold an already cleaned name into its dedupe key
pub fn fold_name(cleaned: &str) -> String {
    fold_synonym(&fold_plurals(cleaned))
}

/// Full normalization of a name: clean, fold plurals, fold synonyms
///
/// Never returns an empty key for text with any visible character: when
/// cleaning strips everything, the lowercased, whitespace-collapsed input is
/// folded instead.
///
/// # Examples
///
/// ```rust
/// use grocery_ingredients::text_processing::normalize_name;
///
/// assert_eq!(normalize_name("morötter"), "morot");
/// assert_eq!(normalize_name("Vispgrädde"), "grädde");
/// assert_eq!(normalize_name("Hackad"), "hackad");
/// ```
pub fn normalize_name(text: &str) -> String {
    let cleaned = clean_name(text);
    if cleaned.is_empty() {
        return fold_name(&fallback_name(text));
    }
    fold_name(&cleaned)
}

/// Lowercased, whitespace-collapsed text used when cleaning leaves nothing
pub fn fallback_name(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Cut an overly long name at the last word boundary within `max_length` bytes
pub fn truncate_name(name: &str, max_length: usize) -> String {
    if name.len() <= max_length {
        return name.to_string();
    }

    let mut cut = max_length;
    while !name.is_char_boundary(cut) {
        cut -= 1;
    }
    let truncated = &name[..cut];
    let result = match truncated.rfind(' ') {
        Some(last_space) if last_space > 0 => &truncated[..last_space],
        _ => truncated,
    };

    warn!(
        "Ingredient name truncated due to length limit ({} > {}): '{}' -> '{}'",
        name.len(),
        max_length,
        name,
        result
    );
    result.trim_end().to_string()
}
