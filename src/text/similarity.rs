// file: src/text/similarity.rs
// description: cosine similarity and similarity-based ranking

use crate::error::{RecommendError, Result};
use std::cmp::Ordering;

/// Compute cosine similarity between two vectors.
///
/// Returns a value in [-1, 1] for general vectors; TF-IDF rows are
/// non-negative, so scores land in [0, 1]. A zero vector scores 0.0 against
/// everything.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RecommendError::Vectorize(format!(
            "vector dimension mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    if a.is_empty() {
        return Err(RecommendError::Vectorize(
            "vectors cannot be empty".to_string(),
        ));
    }

    let dot_product: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();

    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot_product / (norm_a * norm_b))
}

/// Rank document vectors by cosine similarity against a query vector.
///
/// Returns up to `k` (index, score) pairs sorted by score descending. Ties
/// keep catalog order, so the earliest matching document wins.
pub fn rank_by_similarity(
    query: &[f64],
    documents: &[Vec<f64>],
    k: usize,
) -> Result<Vec<(usize, f64)>> {
    let mut scores = Vec::with_capacity(documents.len());
    for (idx, doc) in documents.iter().enumerate() {
        scores.push((idx, cosine_similarity(query, doc)?));
    }

    // Stable sort preserves index order for equal scores
    scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scores.truncate(k);

    Ok(scores)
}
