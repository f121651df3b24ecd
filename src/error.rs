// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecommendError>;

#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog file '{path}' not found")]
    CatalogNotFound { path: PathBuf },

    #[error("Unable to decode catalog file '{path}'. Please ensure it's encoded as UTF-8")]
    CatalogDecode { path: PathBuf },

    #[error("No movie descriptions loaded")]
    EmptyCatalog,

    #[error("Vectorization error: {0}")]
    Vectorize(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
