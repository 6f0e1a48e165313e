//! Workspace-wide catalog discovery and parsing.

pub mod types;
pub mod workspace;

pub use types::{
    CatalogReport,
    IndexedCatalog,
    IndexerError,
};
pub use workspace::WorkspaceIndexer;
