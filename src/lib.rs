pub mod config;
pub mod error;

// Dataset and retrieval core
pub mod catalog;
pub mod retriever;

// Tool layer and transports
pub mod api;
pub mod jsonrpc;
pub mod tools;

pub mod cli;

// Utilities
pub mod utils;

// Re-exports
pub use catalog::{Catalog, LoadFailure, LoadOutcome};
pub use config::Settings;
pub use error::{Error, Result};
pub use retriever::{IngredientMatches, MatchResult, MatchType, Retriever, SimplifiedRecipe};
