use crate::catalog::{RawIngredient, RawRecipe};
use serde::{Deserialize, Serialize};

/// Display-ready projection of a raw record, returned by every query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedRecipe {
    pub name: String,
    pub category: Option<String>,
    pub glass: Option<String>,
    pub instructions: Option<String>,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
}

/// Format an ingredient as "<measure> <name>", dropping the space when a part is empty
pub fn format_ingredient(ingredient: &RawIngredient) -> String {
    let measure = ingredient.measure.as_deref().unwrap_or_default().trim();
    let name = ingredient.name.trim();

    format!("{measure} {name}").trim().to_string()
}

impl From<&RawRecipe> for SimplifiedRecipe {
    fn from(recipe: &RawRecipe) -> Self {
        Self {
            name: recipe.name.clone(),
            category: recipe.category.clone(),
            glass: recipe.glass.clone(),
            instructions: recipe.instructions.clone(),
            tags: recipe.tags().to_vec(),
            ingredients: recipe.ingredients().iter().map(format_ingredient).collect(),
        }
    }
}
