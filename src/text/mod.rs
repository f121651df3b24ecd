// file: src/text/mod.rs
// description: text processing module exports

pub mod similarity;
pub mod stopwords;
pub mod tfidf;
pub mod tokenizer;

pub use similarity::{cosine_similarity, rank_by_similarity};
pub use stopwords::{ENGLISH_STOP_WORDS, StopWordsFilter};
pub use tfidf::TfidfVectorizer;
pub use tokenizer::WordTokenizer;
