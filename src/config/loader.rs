//! Reads `.po-catalog.json` from a workspace root.

use std::io::ErrorKind;
use std::path::Path;

use super::{
    CatalogSettings,
    ConfigError,
};

/// Name of the configuration file looked up at the workspace root.
pub const CONFIG_FILE_NAME: &str = ".po-catalog.json";

/// Parses the workspace configuration file, or returns `None` when there is none.
///
/// The settings are not validated here.
pub(super) fn read_settings(workspace_root: &Path) -> Result<Option<CatalogSettings>, ConfigError> {
    let path = workspace_root.join(CONFIG_FILE_NAME);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let settings = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), ?settings, "Read configuration file");
    Ok(Some(settings))
}
