// file: src/recommender.rs
// description: query-against-catalog ranking built on TF-IDF and cosine similarity

use crate::config::{RecommendConfig, VectorizerConfig};
use crate::error::{RecommendError, Result};
use crate::models::{Movie, Recommendation};
use crate::text::{TfidfVectorizer, WordTokenizer, rank_by_similarity};
use crate::utils::Validator;
use tracing::debug;

pub struct Recommender {
    vectorizer_config: VectorizerConfig,
    recommend_config: RecommendConfig,
}

impl Recommender {
    pub fn new(vectorizer_config: VectorizerConfig, recommend_config: RecommendConfig) -> Self {
        Self {
            vectorizer_config,
            recommend_config,
        }
    }

    fn build_vectorizer(&self) -> TfidfVectorizer {
        let tokenizer = WordTokenizer::new().with_lowercase(self.vectorizer_config.lowercase);
        let mut vectorizer = TfidfVectorizer::new()
            .with_tokenizer(tokenizer)
            .with_sublinear_tf(self.vectorizer_config.sublinear_tf);

        if self.vectorizer_config.remove_stop_words {
            vectorizer = vectorizer.with_stop_words_english();
        }

        vectorizer
    }

    /// Rank the catalog against `query`, best match first.
    ///
    /// The vectorizer is fitted over all descriptions plus the query in one
    /// pass, so query terms absent from the catalog still shape the
    /// vocabulary. Ties keep catalog order.
    pub fn recommend(&self, query: &str, movies: &[Movie]) -> Result<Vec<Recommendation>> {
        if movies.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }

        Validator::validate_query(query)?;

        let mut corpus: Vec<&str> = movies.iter().map(|m| m.description.as_str()).collect();
        corpus.push(query);

        let mut vectorizer = self.build_vectorizer();
        let mut rows = vectorizer.fit_transform(&corpus)?;
        debug!(
            "Vectorized {} descriptions over a vocabulary of {} terms",
            movies.len(),
            vectorizer.vocabulary_size()
        );

        // Last row is the query
        let query_row = rows.pop().ok_or_else(|| {
            RecommendError::Vectorize("vectorizer produced no rows".to_string())
        })?;

        let ranked = rank_by_similarity(&query_row, &rows, self.recommend_config.limit)?;

        Ok(ranked
            .into_iter()
            .filter(|(_, score)| *score >= self.recommend_config.min_score)
            .map(|(idx, score)| {
                Recommendation::new(idx, movies[idx].description.clone(), score)
            })
            .collect())
    }

    /// Vocabulary size of the fitted catalog, for the stats report.
    pub fn catalog_vocabulary_size(&self, movies: &[Movie]) -> Result<usize> {
        if movies.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }

        let corpus: Vec<&str> = movies.iter().map(|m| m.description.as_str()).collect();
        let mut vectorizer = self.build_vectorizer();
        vectorizer.fit(&corpus)?;
        Ok(vectorizer.vocabulary_size())
    }
}
