//! Indexer type definitions.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::MatcherError;
use crate::parser::ParseError;

/// Outcome of parsing one catalog file found in the workspace.
#[derive(Debug)]
pub struct IndexedCatalog {
    pub path: PathBuf,
    pub result: Result<Catalog, ParseError>,
}

impl IndexedCatalog {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Serializable view used for reports.
    #[must_use]
    pub fn report(&self) -> CatalogReport<'_> {
        match &self.result {
            Ok(catalog) => CatalogReport { path: &self.path, catalog: Some(catalog), error: None },
            Err(e) => CatalogReport { path: &self.path, catalog: None, error: Some(e.to_string()) },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CatalogReport<'a> {
    pub path: &'a std::path::Path,
    #[serde(skip_serializing_if = "Option::is_none", flatten)]
    pub catalog: Option<&'a Catalog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Error, Debug)]
pub enum IndexerError {
    /// The configured patterns could not be compiled
    #[error("Invalid catalog file patterns: {0}")]
    Patterns(#[from] MatcherError),
    /// A parse task panicked or was cancelled
    #[error("Parse task failed for {}: {message}", .path.display())]
    Task { path: PathBuf, message: String },
}
