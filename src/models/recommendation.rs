// file: src/models/recommendation.rs
// description: Ranked recommendation model with similarity scores
// reference: Used for cosine similarity ranking results

use crate::utils::Validator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// 0-based catalog index of the matched movie
    pub index: usize,

    /// Matched movie description
    pub description: String,

    /// Cosine similarity against the query (higher is more similar, 0.0-1.0)
    pub score: f64,
}

impl Recommendation {
    pub fn new(index: usize, description: String, score: f64) -> Self {
        Self {
            index,
            description,
            score,
        }
    }

    /// Format as a summary string for display
    pub fn format_summary(&self, max_content_len: usize) -> String {
        let preview = Validator::truncate_text(&self.description, max_content_len);
        format!("Score: {:.4} | #{} {}", self.score, self.index, preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_creation() {
        let rec = Recommendation::new(2, "A gladiator on an alien world".to_string(), 0.95);

        assert_eq!(rec.index, 2);
        assert_eq!(rec.score, 0.95);
    }

    #[test]
    fn test_format_summary() {
        let rec = Recommendation::new(
            0,
            "This is a very long description that will be truncated".to_string(),
            0.87,
        );

        let summary = rec.format_summary(20);
        assert!(summary.contains("0.8700"));
        assert!(summary.contains("#0"));
        assert!(summary.contains("..."));
    }

    #[test]
    fn test_format_summary_short_description() {
        let rec = Recommendation::new(1, "Short".to_string(), 0.5);
        let summary = rec.format_summary(20);
        assert!(summary.contains("Short"));
        assert!(!summary.contains("..."));
    }
}
