// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{RecommendError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub vectorizer: VectorizerConfig,
    pub recommend: RecommendConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub path: PathBuf,
    pub max_line_len: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VectorizerConfig {
    pub lowercase: bool,
    pub remove_stop_words: bool,
    pub sublinear_tf: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendConfig {
    pub limit: usize,
    pub min_score: f64,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("WATCH_NEXT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| RecommendError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| RecommendError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            catalog: CatalogConfig {
                path: PathBuf::from("movies.txt"),
                max_line_len: 10_000,
            },
            vectorizer: VectorizerConfig {
                lowercase: true,
                remove_stop_words: true,
                sublinear_tf: false,
            },
            recommend: RecommendConfig {
                limit: 1,
                min_score: 0.0,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        self.recommend.validate()?;

        if self.catalog.max_line_len == 0 {
            return Err(RecommendError::Config(
                "max_line_len must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl RecommendConfig {
    /// Shared with the CLI, which can override these values per invocation.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(RecommendError::Config(
                "limit must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(RecommendError::Config(
                "min_score must be between 0.0 and 1.0".to_string(),
            ));
        }

        Ok(())
    }
}
