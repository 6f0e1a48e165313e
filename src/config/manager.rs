//! Validated settings for one workspace.

use std::path::Path;

use super::{
    CatalogSettings,
    ConfigError,
    loader,
};

/// Settings that passed [`CatalogSettings::validate`].
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    settings: CatalogSettings,
}

impl ConfigManager {
    /// Reads `.po-catalog.json` under `workspace_root`, falling back to defaults.
    ///
    /// # Errors
    /// - The file exists but cannot be read or is not valid JSON
    /// - The settings fail validation
    pub fn load(workspace_root: &Path) -> Result<Self, ConfigError> {
        let settings = loader::read_settings(workspace_root)?.unwrap_or_default();
        Self::from_settings(settings)
    }

    /// # Errors
    /// - The settings fail validation
    pub fn from_settings(settings: CatalogSettings) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(Self { settings })
    }

    #[must_use]
    pub const fn settings(&self) -> &CatalogSettings {
        &self.settings
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use tempfile::TempDir;

    use super::*;
    use crate::config::{
        CONFIG_FILE_NAME,
        ValidationError,
    };

    #[googletest::test]
    fn test_load_without_config_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let manager = ConfigManager::load(temp_dir.path()).unwrap();

        expect_that!(manager.settings().include_patterns.as_slice(), elements_are![eq("**/*.po")]);
        expect_that!(manager.settings().indexing.num_threads, none());
    }

    #[googletest::test]
    fn test_load_applies_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"{"parser": {"closeOnRepeatedMsgid": true}, "indexing": {"numThreads": 2}}"#,
        )
        .unwrap();

        let manager = ConfigManager::load(temp_dir.path()).unwrap();

        expect_that!(manager.settings().parser.close_on_repeated_msgid, eq(true));
        expect_that!(manager.settings().indexing.effective_num_threads(), eq(2));
    }

    #[googletest::test]
    fn test_load_rejects_settings_that_fail_validation() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"indexing": {"numThreads": 0}}"#)
            .unwrap();

        let result = ConfigManager::load(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        if let Err(ConfigError::ValidationErrors(errors)) = result {
            expect_that!(
                errors,
                elements_are![field!(ValidationError.field_path, eq("indexing.numThreads"))]
            );
        }
    }

    #[googletest::test]
    fn test_from_settings_rejects_empty_include_list() {
        let settings = CatalogSettings { include_patterns: Vec::new(), ..CatalogSettings::default() };

        assert!(matches!(
            ConfigManager::from_settings(settings),
            Err(ConfigError::ValidationErrors(_))
        ));
    }
}
