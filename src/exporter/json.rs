// file: src/exporter/json.rs
// description: json export utilities for catalogs and recommendation reports

use crate::error::{RecommendError, Result};
use crate::models::{Movie, Recommendation};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_entries: usize,
    pub file: String,
}

#[derive(Debug, Serialize)]
struct RecommendationReport<'a> {
    exported_at: String,
    query: &'a str,
    results: &'a [Recommendation],
}

#[derive(Debug, Serialize)]
struct CatalogReport<'a> {
    exported_at: String,
    total_movies: usize,
    movies: &'a [Movie],
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn export_recommendations(
        &self,
        query: &str,
        recommendations: &[Recommendation],
        pretty: bool,
    ) -> Result<ExportManifest> {
        let report = RecommendationReport {
            exported_at: Utc::now().to_rfc3339(),
            query,
            results: recommendations,
        };

        let path = self.output_dir.join("recommendations.json");
        self.write_json(&path, &report, pretty)?;

        info!(
            "Exported {} recommendation(s) to {}",
            recommendations.len(),
            path.display()
        );

        Ok(ExportManifest {
            exported_at: report.exported_at,
            total_entries: recommendations.len(),
            file: path.display().to_string(),
        })
    }

    pub fn export_catalog(&self, movies: &[Movie], pretty: bool) -> Result<ExportManifest> {
        let report = CatalogReport {
            exported_at: Utc::now().to_rfc3339(),
            total_movies: movies.len(),
            movies,
        };

        let path = self.output_dir.join("catalog.json");
        self.write_json(&path, &report, pretty)?;

        info!("Exported {} movie(s) to {}", movies.len(), path.display());

        Ok(ExportManifest {
            exported_at: report.exported_at,
            total_entries: movies.len(),
            file: path.display().to_string(),
        })
    }

    fn write_json<T: Serialize>(&self, path: &PathBuf, value: &T, pretty: bool) -> Result<()> {
        let json = if pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(|e| RecommendError::Serialization(e.to_string()))?;

        fs::write(path, json)?;
        Ok(())
    }
}
