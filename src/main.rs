use anyhow::{Context, Result};
use grocery_ingredients::config::{GroceryConfig, OutputFormat};
use grocery_ingredients::grocery_list::{read_recipe_file, render_text, summary_line, GroceryListBuilder};
use grocery_ingredients::ingredient_model::GroceryItem;
use log::{info, warn};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

const USAGE: &str = "Usage: grocery-list [--previous LIST.json] [RECIPE.txt ...]\n\
Reads ingredient lines from each recipe file, or from stdin when none are given.";

struct Args {
    previous: Option<PathBuf>,
    recipes: Vec<PathBuf>,
}

fn parse_args() -> Result<Option<Args>> {
    let mut previous = None;
    let mut recipes = Vec::new();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--previous" => {
                let path = args
                    .next()
                    .context("--previous needs a path to an earlier JSON list")?;
                previous = Some(PathBuf::from(path));
            }
            _ => recipes.push(PathBuf::from(arg)),
        }
    }

    Ok(Some(Args { previous, recipes }))
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = GroceryConfig::from_env()?;
    info!("Starting grocery list generation with {:?}", config);

    let Some(args) = parse_args()? else {
        println!("{USAGE}");
        return Ok(());
    };

    let output_format = config.output_format;
    let mut builder = GroceryListBuilder::new(config);

    if args.recipes.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read ingredient lines from stdin")?;
        builder.add_text("stdin", &text);
    } else {
        for path in &args.recipes {
            let recipe = read_recipe_file(path)?;
            info!("Adding recipe '{}' ({} lines)", recipe.title, recipe.lines.len());
            builder.add_recipe(&recipe.title, &recipe.lines);
        }
    }

    if !builder.skipped_staples().is_empty() {
        info!("Skipped pantry staples: {}", builder.skipped_staples().join(", "));
    }

    let items = match &args.previous {
        Some(path) => {
            let previous = read_previous_list(path)?;
            builder.regenerate(&previous)
        }
        None => builder.build(),
    };

    if items.is_empty() {
        warn!("No grocery items left after filtering");
    }

    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&items)?),
        OutputFormat::Text => {
            print!("{}", render_text(&items));
            println!("\n{}", summary_line(&items));
        }
    }

    Ok(())
}

fn read_previous_list(path: &Path) -> Result<Vec<GroceryItem>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read previous list {}", path.display()))?;
    let items = serde_json::from_str(&content)
        .with_context(|| format!("Invalid grocery list JSON in {}", path.display()))?;
    Ok(items)
}
