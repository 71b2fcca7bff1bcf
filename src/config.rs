// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::path::PathBuf;

/// Default directory of the file-backed credential store.
const DEFAULT_CREDENTIALS_DIR: &str = ".catalog";

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// API origin, without a trailing slash (e.g. `https://api.example.com`)
    pub api_url: String,
    /// Directory the file-backed credential store keeps its entries in
    pub credentials_dir: PathBuf,
    /// Optional JSON file (`[{"id": 1, "name": "..."}]`) seeding the category store
    pub categories_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_url = env::var("API_URL").map_err(|_| ConfigError::Missing("API_URL"))?;
        let api_url = normalize_api_url(&api_url)?;

        Ok(Self {
            api_url,
            credentials_dir: env::var("CATALOG_CREDENTIALS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CREDENTIALS_DIR)),
            categories_file: env::var("CATALOG_CATEGORIES_FILE").ok().map(PathBuf::from),
        })
    }

    /// Fixed configuration for tests.
    pub fn test_default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            credentials_dir: PathBuf::from(DEFAULT_CREDENTIALS_DIR),
            categories_file: None,
        }
    }

    /// Same as [`Config::test_default`] but pointed at another origin,
    /// typically a mock server.
    pub fn with_api_url(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            ..Self::test_default()
        }
    }
}

fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid {
            name: "API_URL",
            reason: "must not be empty".to_string(),
        });
    }
    url::Url::parse(trimmed).map_err(|e| ConfigError::Invalid {
        name: "API_URL",
        reason: e.to_string(),
    })?;
    Ok(trimmed.to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
