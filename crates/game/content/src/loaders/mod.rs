//! Content loaders for reading build and host data from files.
//!
//! - build catalog: JSON (`BuildDetails.json`)
//! - host item and avatar catalogs: RON
//! - loadout configuration: TOML

pub mod avatars;
pub mod catalog;
pub mod config;
pub mod factory;
pub mod item;

pub use avatars::{AvatarCatalog, AvatarLoader};
pub use catalog::BuildCatalogLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
