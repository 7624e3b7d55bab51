//! Loadout configuration loader.

use std::path::Path;

use loadout_core::LoadoutConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for loadout configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<LoadoutConfig> {
        let content = read_file(path)?;
        let config: LoadoutConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }

    /// Like [`ConfigLoader::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<LoadoutConfig> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(LoadoutConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "default_skill_level = 6\n\n[inventory]\nrelic = 20\n",
        )
        .unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.default_skill_level, 6);
        assert_eq!(config.catalog_file, LoadoutConfig::DEFAULT_CATALOG_FILE);
        assert_eq!(config.inventory.relic, 20);
        assert_eq!(config.inventory.equipment, 1500);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, LoadoutConfig::default());
    }
}
