use serde::{Deserialize, Serialize};

/// A cocktail record exactly as it appears in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecipe {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub glass: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub ingredients: Option<Vec<RawIngredient>>,
}

/// One ingredient line of a raw record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIngredient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub measure: Option<String>,
}

impl RawRecipe {
    /// Tags, treating a missing or null list as empty
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Ingredients, treating a missing or null list as empty
    pub fn ingredients(&self) -> &[RawIngredient] {
        self.ingredients.as_deref().unwrap_or_default()
    }
}
