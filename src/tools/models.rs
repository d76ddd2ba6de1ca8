use crate::retriever::{MatchResult, SimplifiedRecipe};
use serde::{Deserialize, Serialize};

/// Envelope wrapped around every tool result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolResponse {
    Success(ToolPayload),
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolPayload {
    Recipe {
        data: SimplifiedRecipe,
    },
    SuggestionByIngredient {
        perfect_matches: Vec<PerfectMatchSummary>,
        partial_matches: Vec<PartialMatchSummary>,
    },
    SuggestionByPreference {
        count: usize,
        data: Vec<SimplifiedRecipe>,
    },
}

/// Perfect match as presented to the assistant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerfectMatchSummary {
    pub name: String,
    pub matched_ingredients: Vec<String>,
    pub all_ingredients_in_recipe: Vec<String>,
}

/// Partial match as presented to the assistant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialMatchSummary {
    pub name: String,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients_count: usize,
}

impl ToolResponse {
    pub fn error(message: impl Into<String>) -> Self {
        ToolResponse::Error {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToolResponse::Success(_))
    }
}

impl From<&MatchResult> for PerfectMatchSummary {
    fn from(m: &MatchResult) -> Self {
        Self {
            name: m.cocktail.name.clone(),
            matched_ingredients: m.matched_ingredients.clone(),
            all_ingredients_in_recipe: m.cocktail.ingredients.clone(),
        }
    }
}

impl From<&MatchResult> for PartialMatchSummary {
    fn from(m: &MatchResult) -> Self {
        Self {
            name: m.cocktail.name.clone(),
            matched_ingredients: m.matched_ingredients.clone(),
            // The synthetic rum label can push match_count past the user's count
            missing_ingredients_count: m.total_user_ingredients.saturating_sub(m.match_count),
        }
    }
}

/// Arguments of `get_cocktail_recipe`
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeArgs {
    pub cocktail_name: String,
}

/// Arguments of `suggest_cocktails_by_ingredients`
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientsArgs {
    pub ingredients: Vec<String>,
}

/// Arguments of `suggest_cocktails_by_preference`
#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesArgs {
    pub preferences: Vec<String>,
}
