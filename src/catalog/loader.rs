// file: src/catalog/loader.rs
// description: line-oriented catalog file loading with typed failure modes

use crate::config::CatalogConfig;
use crate::error::{RecommendError, Result};
use crate::models::Movie;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

pub struct CatalogLoader {
    config: CatalogConfig,
}

impl CatalogLoader {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Load movie descriptions from the catalog file, one per line.
    ///
    /// Line order is preserved and blank lines are kept so that the 0-based
    /// index of every entry matches its line number in the file.
    pub fn load(&self, path: &Path) -> Result<Vec<Movie>> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RecommendError::CatalogNotFound {
                path: path.to_path_buf(),
            },
            _ => RecommendError::Io(e),
        })?;

        let content = String::from_utf8(bytes).map_err(|_| RecommendError::CatalogDecode {
            path: path.to_path_buf(),
        })?;

        let movies: Vec<Movie> = content
            .lines()
            .enumerate()
            .map(|(index, line)| {
                let line = if line.chars().count() > self.config.max_line_len {
                    debug!("Truncating oversized line {}", index);
                    line.chars().take(self.config.max_line_len).collect()
                } else {
                    line.to_string()
                };
                Movie::new(index, line)
            })
            .collect();

        info!("Loaded {} descriptions from {}", movies.len(), path.display());
        Ok(movies)
    }

    /// Load the catalog, treating a missing file or undecodable content as an
    /// empty catalog after logging a diagnostic. Other IO failures propagate.
    pub fn load_or_empty(&self, path: &Path) -> Result<Vec<Movie>> {
        match self.load(path) {
            Ok(movies) => Ok(movies),
            Err(e @ RecommendError::CatalogNotFound { .. })
            | Err(e @ RecommendError::CatalogDecode { .. }) => {
                warn!("{}", e);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_config() -> CatalogConfig {
        CatalogConfig {
            path: "movies.txt".into(),
            max_line_len: 10_000,
        }
    }

    #[test]
    fn test_load_preserves_order_and_indices() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("movies.txt");
        fs::write(&path, "First movie\n\nThird movie\n").unwrap();

        let loader = CatalogLoader::new(test_config());
        let movies = loader.load(&path).unwrap();

        assert_eq!(movies.len(), 3);
        assert_eq!(movies[0].description, "First movie");
        assert!(movies[1].is_blank());
        assert_eq!(movies[2].index, 2);
        assert_eq!(movies[2].description, "Third movie");
    }

    #[test]
    fn test_load_missing_file_is_typed() {
        let loader = CatalogLoader::new(test_config());
        let err = loader.load(Path::new("/nonexistent/movies.txt")).unwrap_err();

        assert!(matches!(err, RecommendError::CatalogNotFound { .. }));
    }

    #[test]
    fn test_load_invalid_utf8_is_typed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("movies.txt");
        fs::write(&path, [0xff, 0xfe, 0x41]).unwrap();

        let loader = CatalogLoader::new(test_config());
        let err = loader.load(&path).unwrap_err();

        assert!(matches!(err, RecommendError::CatalogDecode { .. }));
    }

    #[test]
    fn test_load_or_empty_swallows_handled_failures() {
        let loader = CatalogLoader::new(test_config());
        let movies = loader
            .load_or_empty(Path::new("/nonexistent/movies.txt"))
            .unwrap();
        assert!(movies.is_empty());

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("movies.txt");
        fs::write(&path, [0xff, 0xfe]).unwrap();
        let movies = loader.load_or_empty(&path).unwrap();
        assert!(movies.is_empty());
    }

    #[test]
    fn test_oversized_lines_are_truncated() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("movies.txt");
        fs::write(&path, "abcdef\n").unwrap();

        let mut config = test_config();
        config.max_line_len = 3;

        let loader = CatalogLoader::new(config);
        let movies = loader.load(&path).unwrap();
        assert_eq!(movies[0].description, "abc");
    }
}
