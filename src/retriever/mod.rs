//! Cocktail retrieval over an in-memory catalog.
//!
//! The [`Retriever`] answers three kinds of query with linear scans:
//! lookup by name, suggestion by available ingredients, and suggestion by
//! tags. Every query returns [`SimplifiedRecipe`] values with no reference
//! back into the catalog, and an empty catalog short-circuits to an empty
//! result of the right shape.

pub mod normalize;
pub mod recipe;

pub use normalize::{normalize_ingredient, NORMALIZATION_RULES};
pub use recipe::SimplifiedRecipe;

use crate::catalog::{Catalog, RawRecipe};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Upper bound on the partial bucket of an ingredient query
pub const MAX_PARTIAL_MATCHES: usize = 5;

/// Upper bound on the results of a tag query
pub const MAX_TAG_MATCHES: usize = 5;

/// Extra matched label recorded when the user asked for rum and the recipe uses light rum
pub const SYNTHETIC_RUM_LABEL: &str = "rum (as light rum)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Perfect,
    Partial,
}

/// One recipe that shares at least one normalized ingredient with the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub cocktail: SimplifiedRecipe,
    pub match_count: usize,
    pub total_user_ingredients: usize,
    pub match_type: MatchType,
    /// Sorted normalized labels, possibly including [`SYNTHETIC_RUM_LABEL`]
    pub matched_ingredients: Vec<String>,
    pub total_ingredients_in_cocktail: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientMatches {
    pub perfect: Vec<MatchResult>,
    pub partial: Vec<MatchResult>,
}

impl IngredientMatches {
    pub fn is_empty(&self) -> bool {
        self.perfect.is_empty() && self.partial.is_empty()
    }
}

/// Read-only query engine that owns the catalog
#[derive(Debug, Clone, Default)]
pub struct Retriever {
    catalog: Catalog,
}

fn normalized_set<'a>(names: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    names.into_iter().map(normalize_ingredient).collect()
}

impl Retriever {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Retriever with no data; every query returns an empty result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the dataset at `path`, running with an empty catalog if the
    /// file is missing or unparseable
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let outcome = Catalog::load(path)?;
        Ok(Self::new(outcome.into_catalog()))
    }

    pub fn is_loaded(&self) -> bool {
        !self.catalog.is_empty()
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Find a cocktail by name.
    ///
    /// Exact (case-insensitive) matches win over substring matches, even when
    /// a substring match comes earlier in the catalog.
    pub fn find_by_name(&self, name: &str) -> Option<SimplifiedRecipe> {
        if self.catalog.is_empty() {
            return None;
        }

        let query = name.to_lowercase();
        debug!("Name lookup: {}", query);

        self.catalog
            .iter()
            .find(|recipe| recipe.name.to_lowercase() == query)
            .or_else(|| {
                self.catalog
                    .iter()
                    .find(|recipe| recipe.name.to_lowercase().contains(&query))
            })
            .map(SimplifiedRecipe::from)
    }

    /// Partition the catalog into perfect and partial matches for the given ingredients.
    ///
    /// Both buckets are ordered by descending match count, ties in catalog
    /// order. The partial bucket holds at most [`MAX_PARTIAL_MATCHES`] entries.
    pub fn find_by_ingredients<S: AsRef<str>>(&self, ingredients: &[S]) -> IngredientMatches {
        if self.catalog.is_empty() {
            return IngredientMatches::default();
        }

        let user_set = normalized_set(ingredients.iter().map(|s| s.as_ref()));
        debug!("Ingredient query (normalized): {:?}", user_set);

        let mut matches: Vec<MatchResult> = self
            .catalog
            .iter()
            .filter_map(|recipe| match_recipe(recipe, &user_set))
            .collect();

        // sort_by is stable: equal counts keep catalog order
        matches.sort_by(|a, b| b.match_count.cmp(&a.match_count));

        let perfect: Vec<MatchResult> = matches
            .iter()
            .filter(|m| m.match_type == MatchType::Perfect)
            .cloned()
            .collect();

        let partial: Vec<MatchResult> = matches
            .into_iter()
            .filter(|m| m.match_type == MatchType::Partial && !perfect.contains(m))
            .take(MAX_PARTIAL_MATCHES)
            .collect();

        debug!(
            "Ingredient query matched {} perfect, {} partial",
            perfect.len(),
            partial.len()
        );

        IngredientMatches { perfect, partial }
    }

    /// Cocktails carrying every requested tag (case-insensitive), in catalog
    /// order. Scanning stops after [`MAX_TAG_MATCHES`] hits.
    pub fn find_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<SimplifiedRecipe> {
        if self.catalog.is_empty() {
            return Vec::new();
        }

        let wanted: BTreeSet<String> = tags.iter().map(|t| t.as_ref().to_lowercase()).collect();
        debug!("Tag query: {:?}", wanted);

        self.catalog
            .iter()
            .filter(|recipe| {
                let recipe_tags: BTreeSet<String> =
                    recipe.tags().iter().map(|t| t.to_lowercase()).collect();
                wanted.is_subset(&recipe_tags)
            })
            .take(MAX_TAG_MATCHES)
            .map(SimplifiedRecipe::from)
            .collect()
    }
}

fn match_recipe(recipe: &RawRecipe, user_set: &BTreeSet<String>) -> Option<MatchResult> {
    let cocktail_set = normalized_set(recipe.ingredients().iter().map(|i| i.name.as_str()));

    let mut matched: BTreeSet<String> = user_set.intersection(&cocktail_set).cloned().collect();

    // Counted on top of the real overlap; the subset test below still needs "rum" itself
    if user_set.contains("rum") && cocktail_set.contains("light rum") {
        matched.insert(SYNTHETIC_RUM_LABEL.to_string());
    }

    if matched.is_empty() {
        return None;
    }

    let match_type = if user_set.is_subset(&cocktail_set) {
        MatchType::Perfect
    } else {
        MatchType::Partial
    };

    Some(MatchResult {
        cocktail: SimplifiedRecipe::from(recipe),
        match_count: matched.len(),
        total_user_ingredients: user_set.len(),
        match_type,
        matched_ingredients: matched.into_iter().collect(),
        total_ingredients_in_cocktail: cocktail_set.len(),
    })
}
