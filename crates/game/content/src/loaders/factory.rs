//! Content factory for loading everything from a data directory.

use std::path::{Path, PathBuf};

use loadout_core::{BuildCatalog, LoadoutConfig};

use crate::loaders::{
    AvatarCatalog, AvatarLoader, BuildCatalogLoader, ConfigLoader, ItemCatalog, ItemLoader,
    LoadResult,
};

/// Content factory that loads all build content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml          (optional)
/// ├── BuildDetails.json    (name set by config.catalog_file)
/// ├── items.ron
/// └── avatars.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load configuration from `config.toml`, or the defaults if absent.
    pub fn load_config(&self) -> LoadResult<LoadoutConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join("config.toml"))
    }

    /// Load the build catalog named by `config.catalog_file`.
    pub fn load_build_catalog(&self, config: &LoadoutConfig) -> LoadResult<BuildCatalog> {
        BuildCatalogLoader::load(&self.catalog_path(config))
    }

    /// Load item templates from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load avatar templates from `avatars.ron`.
    pub fn load_avatars(&self) -> LoadResult<AvatarCatalog> {
        AvatarLoader::load(&self.data_dir.join("avatars.ron"))
    }

    /// Path of the build catalog document.
    pub fn catalog_path(&self, config: &LoadoutConfig) -> PathBuf {
        self.data_dir.join(&config.catalog_file)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.catalog_path(&LoadoutConfig::default()),
            Path::new("/tmp/data/BuildDetails.json")
        );
    }

    #[test]
    fn bundled_data_loads_and_is_consistent() {
        let factory = ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"));
        let config = factory.load_config().unwrap();
        let catalog = factory.load_build_catalog(&config).unwrap();
        let items = factory.load_items().unwrap();
        let avatars = factory.load_avatars().unwrap();

        assert!(avatars.dangling_skill_points().is_empty());
        for entry in catalog.iter() {
            assert!(
                avatars
                    .avatars
                    .iter()
                    .any(|avatar| avatar.avatar_id == entry.avatar_id()),
                "no template for {}",
                entry.full_name()
            );
            for variant in entry.builds() {
                let referenced = variant
                    .relics
                    .iter()
                    .map(|relic| relic.item_id)
                    .chain(variant.equipment.as_ref().map(|cone| cone.item_id));
                for item_id in referenced {
                    assert!(
                        items.items.iter().any(|item| item.id == item_id),
                        "unknown item {} in {}",
                        item_id,
                        entry.full_name()
                    );
                }
            }
        }
    }
}
