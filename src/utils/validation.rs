// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{RecommendError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_catalog_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(RecommendError::Validation(format!(
                "Catalog path does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(RecommendError::Validation(format!(
                "Catalog path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(RecommendError::Validation("Content is empty".to_string()));
        }
        Ok(())
    }

    pub fn validate_query(query: &str) -> Result<()> {
        Self::validate_content_not_empty(query).map_err(|_| {
            RecommendError::Validation("Query description is empty".to_string())
        })
    }

    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.chars().count() <= max_length {
            text.to_string()
        } else {
            let truncated: String = text.chars().take(max_length).collect();
            format!("{}...", truncated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_catalog_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("movies.txt");
        fs::write(&file_path, "test").unwrap();

        assert!(Validator::validate_catalog_path(&file_path).is_ok());
        assert!(Validator::validate_catalog_path(Path::new("/nonexistent")).is_err());
        assert!(Validator::validate_catalog_path(temp.path()).is_err());
    }

    #[test]
    fn test_validate_content_not_empty() {
        assert!(Validator::validate_content_not_empty("content").is_ok());
        assert!(Validator::validate_content_not_empty("").is_err());
        assert!(Validator::validate_content_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_query() {
        assert!(Validator::validate_query("a hero rises").is_ok());
        assert!(Validator::validate_query("").is_err());
        assert!(Validator::validate_query("\t\n").is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
    }
}
