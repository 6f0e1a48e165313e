//! Discovers and parses every catalog file in a workspace.

use std::path::{
    Path,
    PathBuf,
};
use std::sync::Arc;

use ignore::WalkBuilder;
use tokio::sync::Semaphore;

use crate::config::{
    ConfigManager,
    FileMatcher,
};
use crate::indexer::types::{
    IndexedCatalog,
    IndexerError,
};
use crate::input::source::FileSource;
use crate::parser::{
    Parser,
    ParserOptions,
};

/// Parses the catalog files of a workspace concurrently.
#[derive(Clone, Copy, Debug, Default)]
pub struct WorkspaceIndexer;

impl WorkspaceIndexer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Finds and parses every catalog file under the workspace root.
    ///
    /// Results are sorted by path. A file that fails to parse is reported in its
    /// [`IndexedCatalog`] and does not stop the scan.
    ///
    /// # Errors
    /// - Invalid include/exclude patterns
    /// - A parse task panicked
    pub async fn index_workspace(
        &self,
        workspace_path: &Path,
        config_manager: &ConfigManager,
    ) -> Result<Vec<IndexedCatalog>, IndexerError> {
        tracing::debug!(workspace_path = %workspace_path.display(), "Indexing workspace");
        let settings = config_manager.settings();
        let matcher = FileMatcher::new(workspace_path.to_path_buf(), settings)?;
        let files = Self::find_catalog_files(&matcher);

        let num_threads = settings.indexing.effective_num_threads();
        tracing::debug!(files = files.len(), num_threads, "Parsing catalog files");

        let semaphore = Arc::new(Semaphore::new(num_threads));
        let options = settings.parser;
        let futures: Vec<_> = files
            .into_iter()
            .map(|file| Self::index_file(file, options, Arc::clone(&semaphore)))
            .collect();

        let mut results = futures::future::join_all(futures)
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        results.sort_by(|a, b| a.path.cmp(&b.path));

        let failed = results.iter().filter(|indexed| !indexed.is_ok()).count();
        tracing::debug!(catalogs = results.len(), failed, "Workspace indexed");

        Ok(results)
    }

    /// Parses a single file on the blocking pool once a permit is available.
    async fn index_file(
        file_path: PathBuf,
        options: ParserOptions,
        semaphore: Arc<Semaphore>,
    ) -> Result<IndexedCatalog, IndexerError> {
        let _permit = semaphore.acquire_owned().await.map_err(|e| IndexerError::Task {
            path: file_path.clone(),
            message: e.to_string(),
        })?;

        let path = file_path.clone();
        let result = tokio::task::spawn_blocking(move || {
            FileSource::open(&path)
                .map_err(Into::into)
                .and_then(|source| Parser::with_options(source, options).parse())
        })
        .await
        .map_err(|e| IndexerError::Task { path: file_path.clone(), message: e.to_string() })?;

        if let Err(e) = &result {
            tracing::warn!("Failed to parse catalog {:?}: {}", file_path, e);
        }

        Ok(IndexedCatalog { path: file_path, result })
    }

    /// Walks the workspace and returns the files accepted by the matcher.
    fn find_catalog_files(matcher: &FileMatcher) -> Vec<PathBuf> {
        let mut found_files = Vec::new();

        for result in WalkBuilder::new(matcher.workspace_root())
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false)
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            if matcher.is_catalog_file(entry.path()) {
                found_files.push(entry.path().to_path_buf());
            }
        }

        found_files
    }
}
