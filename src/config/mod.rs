use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub dataset: DatasetConfig,
    pub server: ServerConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_rate_limit: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_request_body_size: usize,
    pub max_list_items: usize, // Per tool argument list (ingredients, preferences)
}

fn env_or<T: std::str::FromStr>(key: &str, default: &str) -> Result<T> {
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {key} value")))
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let dataset_path = std::env::var("DATASET_PATH")
            .unwrap_or_else(|_| "dataset/cocktail_dataset.json".to_string())
            .into();

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env_or("PORT", "8001")?;
        let api_rate_limit = env_or("API_RATE_LIMIT", "100")?;
        let max_request_body_size = env_or("MAX_REQUEST_BODY_SIZE", "1048576")?;
        let max_list_items = env_or("MAX_LIST_ITEMS", "50")?;

        Ok(Settings {
            dataset: DatasetConfig { path: dataset_path },
            server: ServerConfig {
                host,
                port,
                api_rate_limit,
            },
            limits: LimitsConfig {
                max_request_body_size,
                max_list_items,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.server.api_rate_limit == 0 {
            return Err(Error::Config("API rate limit must be non-zero".to_string()));
        }

        if self.limits.max_list_items == 0 {
            return Err(Error::Config(
                "Maximum list items must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
pub(crate) fn test_settings() -> Settings {
    Settings {
        dataset: DatasetConfig {
            path: "dataset/cocktail_dataset.json".into(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8001,
            api_rate_limit: 100,
        },
        limits: LimitsConfig {
            max_request_body_size: 1048576,
            max_list_items: 50,
        },
    }
}
