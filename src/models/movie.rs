// file: src/models/movie.rs
// description: catalog entry model with content hashing
// reference: internal data structures

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// 0-based line index in the catalog file
    pub index: usize,
    pub description: String,
    pub content_hash: String,
    pub char_len: usize,
}

impl Movie {
    pub fn new(index: usize, description: String) -> Self {
        let content_hash = Self::compute_hash(&description);
        let char_len = description.chars().count();

        Self {
            index,
            description,
            content_hash,
            char_len,
        }
    }

    fn compute_hash(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Rough whitespace-delimited token count, used for catalog statistics.
    pub fn token_estimate(&self) -> usize {
        self.description.split_whitespace().count()
    }

    pub fn is_blank(&self) -> bool {
        self.description.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_creation() {
        let movie = Movie::new(3, "A hero rises against an empire".to_string());

        assert_eq!(movie.index, 3);
        assert!(!movie.content_hash.is_empty());
        assert_eq!(movie.char_len, 30);
        assert_eq!(movie.token_estimate(), 6);
        assert!(!movie.is_blank());
    }

    #[test]
    fn test_hash_consistency() {
        let a = Movie::new(0, "Same description".to_string());
        let b = Movie::new(1, "Same description".to_string());
        assert_eq!(a.content_hash, b.content_hash);
    }

    #[test]
    fn test_blank_detection() {
        let movie = Movie::new(0, "   ".to_string());
        assert!(movie.is_blank());
        assert_eq!(movie.token_estimate(), 0);
    }
}
