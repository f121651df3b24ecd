// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod recommender;
pub mod text;
pub mod utils;

pub use catalog::CatalogLoader;
pub use config::{CatalogConfig, Config, RecommendConfig, VectorizerConfig};
pub use error::{RecommendError, Result};
pub use exporter::{ExportManifest, JsonExporter};
pub use models::{Movie, Recommendation};
pub use recommender::Recommender;
pub use text::{
    ENGLISH_STOP_WORDS, StopWordsFilter, TfidfVectorizer, WordTokenizer, cosine_similarity,
    rank_by_similarity,
};
pub use utils::Validator;
