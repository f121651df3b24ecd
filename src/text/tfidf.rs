// file: src/text/tfidf.rs
// description: TF-IDF vectorization with smoothed IDF and L2 row normalization

use crate::error::{RecommendError, Result};
use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenizer::WordTokenizer;
use std::collections::{HashMap, HashSet};

/// Converts documents into TF-IDF weighted vectors.
///
/// Weighting follows the common smoothed formulation:
///
/// ```text
/// tfidf(t, d) = tf(t, d) * idf(t)
/// idf(t) = ln((1 + n) / (1 + df(t))) + 1
/// ```
///
/// Rows are L2-normalized, so cosine similarity between two rows reduces to
/// their dot product.
pub struct TfidfVectorizer {
    tokenizer: WordTokenizer,
    stop_words: Option<StopWordsFilter>,
    sublinear_tf: bool,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self {
            tokenizer: WordTokenizer::new(),
            stop_words: None,
            sublinear_tf: false,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
        }
    }

    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    pub fn with_stop_words(mut self, filter: StopWordsFilter) -> Self {
        self.stop_words = Some(filter);
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: WordTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Use sublinear TF scaling: tf = 1 + ln(tf) for tf > 0.
    pub fn with_sublinear_tf(mut self, sublinear_tf: bool) -> Self {
        self.sublinear_tf = sublinear_tf;
        self
    }

    fn terms_of(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(text);
        match &self.stop_words {
            Some(filter) => filter.filter(tokens),
            None => tokens,
        }
    }

    /// Learn the vocabulary and document frequencies from `documents`.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(RecommendError::Vectorize(
                "cannot fit on empty document collection".to_string(),
            ));
        }

        let n_docs = documents.len();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let doc_terms: HashSet<String> = self.terms_of(doc.as_ref()).into_iter().collect();
            for term in doc_terms {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(RecommendError::Vectorize(
                "empty vocabulary; documents contain only stop words".to_string(),
            ));
        }

        // Deterministic column order
        let mut terms: Vec<String> = doc_freq.keys().cloned().collect();
        terms.sort();

        self.idf = terms
            .iter()
            .map(|term| {
                let df = doc_freq[term] as f64;
                ((1.0 + n_docs as f64) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        self.vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term, idx))
            .collect();

        Ok(())
    }

    /// Transform documents into TF-IDF rows using the learned vocabulary.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<Vec<f64>>> {
        if self.vocabulary.is_empty() {
            return Err(RecommendError::Vectorize(
                "vocabulary is empty; call fit() first".to_string(),
            ));
        }

        let vocab_size = self.vocabulary.len();
        let mut rows = Vec::with_capacity(documents.len());

        for doc in documents {
            let mut row: Vec<f64> = vec![0.0; vocab_size];

            for term in self.terms_of(doc.as_ref()) {
                if let Some(&idx) = self.vocabulary.get(&term) {
                    row[idx] += 1.0;
                }
            }

            if self.sublinear_tf {
                for value in &mut row {
                    if *value > 0.0 {
                        *value = 1.0 + value.ln();
                    }
                }
            }

            for (idx, value) in row.iter_mut().enumerate() {
                *value *= self.idf[idx];
            }

            l2_normalize(&mut row);
            rows.push(row);
        }

        Ok(rows)
    }

    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<Vec<f64>>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for value in row.iter_mut() {
            *value /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fit_builds_sorted_vocabulary() {
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer
            .fit(&["cat dog", "dog bird"])
            .expect("fit succeeds");

        let vocab = vectorizer.vocabulary();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab["bird"], 0);
        assert_eq!(vocab["cat"], 1);
        assert_eq!(vocab["dog"], 2);
    }

    #[test]
    fn test_rows_are_unit_norm() {
        let mut vectorizer = TfidfVectorizer::new();
        let rows = vectorizer
            .fit_transform(&["the cat sat", "the dog ran far away"])
            .expect("fit_transform succeeds");

        for row in rows {
            let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_ubiquitous_terms_get_minimum_idf() {
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer
            .fit(&["shared alpha", "shared beta", "shared gamma"])
            .expect("fit succeeds");

        let vocab = vectorizer.vocabulary();
        let shared_idf = vectorizer.idf[vocab["shared"]];
        let alpha_idf = vectorizer.idf[vocab["alpha"]];

        // df = n gives ln(1) + 1 = 1, the smallest possible weight
        assert!((shared_idf - 1.0).abs() < 1e-9);
        assert!(alpha_idf > shared_idf);
    }

    #[test]
    fn test_fit_on_empty_collection_fails() {
        let mut vectorizer = TfidfVectorizer::new();
        let docs: Vec<&str> = vec![];
        assert!(vectorizer.fit(&docs).is_err());
    }

    #[test]
    fn test_fit_on_stop_words_only_fails() {
        let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
        assert!(vectorizer.fit(&["the and but", "is was"]).is_err());
    }

    #[test]
    fn test_transform_before_fit_fails() {
        let vectorizer = TfidfVectorizer::new();
        assert!(vectorizer.transform(&["anything"]).is_err());
    }

    #[test]
    fn test_unknown_terms_are_ignored() {
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit(&["cat dog"]).expect("fit succeeds");

        let rows = vectorizer
            .transform(&["zebra elephant"])
            .expect("transform succeeds");
        assert!(rows[0].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_stop_words_excluded_from_vocabulary() {
        let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
        vectorizer
            .fit(&["the hulk is dangerous"])
            .expect("fit succeeds");

        let vocab = vectorizer.vocabulary();
        assert!(vocab.contains_key("hulk"));
        assert!(vocab.contains_key("dangerous"));
        assert!(!vocab.contains_key("the"));
        assert!(!vocab.contains_key("is"));
    }

    #[test]
    fn test_sublinear_tf_dampens_repeats() {
        let mut plain = TfidfVectorizer::new();
        let plain_rows = plain
            .fit_transform(&["spam spam spam eggs", "eggs toast"])
            .expect("fit_transform succeeds");

        let mut sublinear = TfidfVectorizer::new().with_sublinear_tf(true);
        let sublinear_rows = sublinear
            .fit_transform(&["spam spam spam eggs", "eggs toast"])
            .expect("fit_transform succeeds");

        let vocab = sublinear.vocabulary();
        let spam = vocab["spam"];
        let eggs = vocab["eggs"];

        let plain_ratio = plain_rows[0][spam] / plain_rows[0][eggs];
        let sublinear_ratio = sublinear_rows[0][spam] / sublinear_rows[0][eggs];
        assert!(sublinear_ratio < plain_ratio);
    }
}
