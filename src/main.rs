//! Scans a workspace for PO catalogs and prints a JSON report.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use po_catalog::config::ConfigManager;
use po_catalog::indexer::{
    CatalogReport,
    IndexedCatalog,
    WorkspaceIndexer,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .init();

    let workspace_root =
        std::env::args_os().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);

    let config_manager = match ConfigManager::load(&workspace_root) {
        Ok(config_manager) => config_manager,
        Err(error) => {
            tracing::error!("Configuration error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let indexer = WorkspaceIndexer::new();
    let catalogs = match indexer.index_workspace(&workspace_root, &config_manager).await {
        Ok(catalogs) => catalogs,
        Err(error) => {
            tracing::error!("Indexing failed: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let reports: Vec<CatalogReport<'_>> = catalogs.iter().map(IndexedCatalog::report).collect();
    let mut stdout = std::io::stdout().lock();
    if let Err(error) = serde_json::to_writer_pretty(&mut stdout, &reports)
        .map_err(std::io::Error::from)
        .and_then(|()| writeln!(stdout))
    {
        tracing::error!("Failed to write report: {}", error);
        return ExitCode::FAILURE;
    }

    if catalogs.iter().all(IndexedCatalog::is_ok) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
