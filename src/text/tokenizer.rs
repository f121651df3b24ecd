// file: src/text/tokenizer.rs
// description: regex word tokenizer for description text
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Words of at least two word characters
    pub static ref WORD_TOKEN: Regex =
        Regex::new(r"\b\w\w+\b").expect("WORD_TOKEN regex is valid");
}

#[derive(Debug, Clone, Copy)]
pub struct WordTokenizer {
    lowercase: bool,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self { lowercase: true }
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        WORD_TOKEN
            .find_iter(text)
            .map(|m| {
                if self.lowercase {
                    m.as_str().to_lowercase()
                } else {
                    m.as_str().to_string()
                }
            })
            .collect()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
