// Cocktail catalog: raw dataset records and the one-shot loader

pub mod models;

pub use models::{RawIngredient, RawRecipe};

use crate::error::Result;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Ordered, immutable sequence of raw records loaded at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    recipes: Vec<RawRecipe>,
}

/// Anticipated reasons a dataset could not be loaded
#[derive(Debug, Clone, PartialEq)]
pub enum LoadFailure {
    NotFound(PathBuf),
    Unparseable { path: PathBuf, reason: String },
}

/// Result of a load attempt; the caller decides whether to run with an empty catalog
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Catalog),
    Failed(LoadFailure),
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailure::NotFound(path) => {
                write!(f, "Database file not found: {}", path.display())
            }
            LoadFailure::Unparseable { path, reason } => {
                write!(f, "Could not decode JSON file {}: {reason}", path.display())
            }
        }
    }
}

impl Catalog {
    pub fn new(recipes: Vec<RawRecipe>) -> Self {
        Self { recipes }
    }

    /// Parse a catalog from a JSON array of records
    pub fn from_json_str(content: &str) -> std::result::Result<Self, serde_json::Error> {
        let recipes: Vec<RawRecipe> = serde_json::from_str(content)?;
        Ok(Self::new(recipes))
    }

    /// Load the dataset at `path`.
    ///
    /// A missing file or content that is not a JSON array of records yields
    /// `LoadOutcome::Failed`. Any other I/O fault is returned as an error.
    pub fn load(path: impl AsRef<Path>) -> Result<LoadOutcome> {
        let path = path.as_ref();

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Ok(LoadOutcome::Failed(LoadFailure::NotFound(path.to_path_buf())));
            }
            // read_to_string reports non UTF-8 content as InvalidData
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Ok(LoadOutcome::Failed(LoadFailure::Unparseable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }));
            }
            Err(e) => return Err(e.into()),
        };

        match Self::from_json_str(&content) {
            Ok(catalog) => {
                info!(
                    "Successfully loaded {} cocktails from {}",
                    catalog.len(),
                    path.display()
                );
                Ok(LoadOutcome::Loaded(catalog))
            }
            Err(e) => Ok(LoadOutcome::Failed(LoadFailure::Unparseable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })),
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawRecipe> {
        self.recipes.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a RawRecipe;
    type IntoIter = std::slice::Iter<'a, RawRecipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl LoadOutcome {
    /// Degrade a failed load to an empty catalog, logging the reason
    pub fn into_catalog(self) -> Catalog {
        match self {
            LoadOutcome::Loaded(catalog) => catalog,
            LoadOutcome::Failed(failure) => {
                error!("{}", failure);
                Catalog::default()
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}
