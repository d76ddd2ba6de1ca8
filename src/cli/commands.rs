use crate::api::handlers::catalog_stats;
use crate::catalog::{Catalog, LoadOutcome};
use crate::tools::{ToolResponse, ToolService};
use crate::Result;
use std::path::Path;

/// Render a tool envelope the way the assistant receives it
pub fn render_response(response: &ToolResponse) -> Result<String> {
    Ok(serde_json::to_string_pretty(response)?)
}

fn print_response(response: &ToolResponse) -> Result<()> {
    println!("{}", render_response(response)?);
    Ok(())
}

/// Look up one cocktail by name
pub fn recipe(tools: &ToolService, name: &str) -> Result<()> {
    print_response(&tools.get_cocktail_recipe(name)?)
}

/// Suggest cocktails from available ingredients
pub fn ingredients(tools: &ToolService, ingredients: &[String]) -> Result<()> {
    print_response(&tools.suggest_by_ingredients(ingredients)?)
}

/// Suggest cocktails carrying every given tag
pub fn tags(tools: &ToolService, tags: &[String]) -> Result<()> {
    print_response(&tools.suggest_by_preference(tags)?)
}

/// Load the dataset and print a short report
pub fn check(path: &Path) -> Result<()> {
    match Catalog::load(path)? {
        LoadOutcome::Loaded(catalog) => {
            let stats = catalog_stats(&catalog);
            println!("\x1b[32m\u{2713}\x1b[0m Dataset loaded: {}", path.display());
            println!("  Cocktails: {}", stats.total_cocktails);
            println!("  Categories: {}", stats.distinct_categories);
            println!("  Tags: {}", stats.distinct_tags);
            println!("  Ingredients (normalized): {}", stats.distinct_ingredients);
        }
        LoadOutcome::Failed(failure) => {
            println!("\x1b[31m\u{2717}\x1b[0m {failure}");
            println!("  The server would start with an empty catalog");
        }
    }

    Ok(())
}
