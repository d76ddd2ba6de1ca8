// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cocktail-rag")]
#[command(about = "Cocktail RAG - tool server for a bartender assistant", long_about = None)]
pub struct Cli {
    /// Path to the cocktail dataset (JSON array)
    #[arg(long, global = true, env = "DATASET_PATH")]
    pub dataset: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the tool server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Look up a cocktail recipe by name
    Recipe {
        /// Cocktail name (exact or partial)
        name: String,
    },

    /// Suggest cocktails from the ingredients you have
    Ingredients {
        /// Comma-separated ingredient names
        #[arg(value_delimiter = ',', required = true)]
        ingredients: Vec<String>,
    },

    /// Suggest cocktails carrying all the given tags
    Tags {
        /// Comma-separated tags
        #[arg(value_delimiter = ',', required = true)]
        tags: Vec<String>,
    },

    /// Load the dataset and report what was found
    Check,
}
