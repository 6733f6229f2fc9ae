//! # Integration Tests
//!
//! End-to-end tests for the grocery list pipeline: raw recipe lines in,
//! categorized and merged grocery items out.

use grocery_ingredients::config::GroceryConfig;
use grocery_ingredients::grocery_list::{read_recipe_file, render_text, GroceryListBuilder};
use grocery_ingredients::ingredient_model::{GroceryCategory, GroceryItem};
use grocery_ingredients::measurement_types::Unit;
use grocery_ingredients::{aggregate_ingredients, format_ingredient, is_pantry_staple, parse_ingredient};
use std::fs;

#[test]
fn test_two_recipes_merge_into_one_list() {
    let lasagne = r#"
    # Lasagne

    Köttfärssås:
    500 g nötfärs
    1 gul lök, hackad
    2 vitlöksklyftor
    1 burk krossade tomater
    1 tsk salt
    Ostsås:
    5 dl mjölk
    3 msk vetemjöl
    2 dl riven ost
    "#;

    let tacos = ["400 g köttfärs", "1 lök", "8 tortillabröd", "Olja till stekning"];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lasagne.txt");
    fs::write(&path, lasagne).unwrap();
    let recipe = read_recipe_file(&path).unwrap();
    assert_eq!(recipe.title, "Lasagne");

    let mut builder = GroceryListBuilder::new(GroceryConfig::default());
    builder.add_recipe(&recipe.title, &recipe.lines);
    builder.add_recipe("Tacos", tacos);
    assert_eq!(builder.skipped_staples(), ["1 tsk salt", "Olja till stekning"]);

    let items = builder.build();

    let mince = find(&items, "köttfärs", Some(Unit::Gram));
    assert_eq!(mince.quantity, 900.0);
    assert_eq!(mince.name, "900 g nötfärs");
    assert_eq!(mince.category, GroceryCategory::Meat);
    assert_eq!(mince.recipes, vec!["Lasagne", "Tacos"]);

    let onion = find(&items, "lök", None);
    assert_eq!(onion.quantity, 2.0);
    assert_eq!(onion.category, GroceryCategory::Produce);

    let garlic = find(&items, "vitlök", None);
    assert_eq!(garlic.name, "2 vitlöksklyftor");

    let cheese = find(&items, "ost", Some(Unit::Deciliter));
    assert_eq!(cheese.category, GroceryCategory::Dairy);

    // Sections come in store order
    let orders: Vec<u8> = items.iter().map(|item| item.category.sort_order()).collect();
    let mut sorted = orders.clone();
    sorted.sort();
    assert_eq!(orders, sorted);
}

#[test]
fn test_public_operations_compose() {
    let lines = ["2 dl vispgrädde", "Salt och peppar", "1 dl matlagningsgrädde", "3 morötter"];

    let parsed: Vec<_> = lines
        .iter()
        .filter(|line| !is_pantry_staple(line))
        .map(|line| parse_ingredient(line))
        .collect();
    assert_eq!(parsed.len(), 3);

    let merged = aggregate_ingredients(&parsed);
    let rendered: Vec<String> = merged.iter().map(format_ingredient).collect();
    assert_eq!(rendered, vec!["3 dl vispgrädde", "3 morötter"]);
}

#[test]
fn test_json_round_trip_and_regenerate() {
    let mut builder = GroceryListBuilder::new(GroceryConfig::default());
    builder.add_recipe("Gröt", ["2 dl havregryn", "4 dl mjölk"]);
    let mut items = builder.build();
    items[0].checked = true;

    let json = serde_json::to_string(&items).unwrap();
    assert!(json.contains("\"normalizedName\":\"mjölk\""));
    assert!(json.contains("\"unit\":\"dl\""));
    assert!(json.contains("\"category\":\"dairy\""));

    let stored: Vec<GroceryItem> = serde_json::from_str(&json).unwrap();
    assert_eq!(stored, items);

    let mut builder = GroceryListBuilder::new(GroceryConfig::default());
    builder.add_recipe("Gröt", ["2 dl havregryn", "4 dl mjölk"]);
    builder.add_line("1 dl mjölk");
    let refreshed = builder.regenerate(&stored);

    assert_eq!(refreshed[0].normalized_name, "mjölk");
    assert_eq!(refreshed[0].quantity, 5.0);
    assert!(refreshed[0].checked);
    assert!(!refreshed[1].checked);
}

#[test]
fn test_render_text_groups_sections() {
    let mut builder = GroceryListBuilder::new(GroceryConfig::default());
    builder.add_recipe("Sallad", ["1 gurka", "200 g fetaost", "2 tomater"]);

    let text = render_text(&builder.build());
    assert_eq!(
        text,
        "🥕 Frukt & grönt\n  [ ] gurka\n  [ ] 2 tomater\n\n🥛 Mejeri\n  [ ] 200 g fetaost\n"
    );
}

fn find<'a>(items: &'a [GroceryItem], key: &str, unit: Option<Unit>) -> &'a GroceryItem {
    items
        .iter()
        .find(|item| item.key() == (key, unit))
        .unwrap_or_else(|| panic!("no item with key ({key}, {unit:?}) in {items:#?}"))
}
