//! Build catalog loader.
//!
//! The catalog document is a JSON array of character records:
//!
//! ```json
//! [
//!   {
//!     "avatarId": 1001,
//!     "avatarName": "March7th",
//!     "fullName": "March 7th",
//!     "skillLevel": 10,
//!     "builds": [
//!       {
//!         "buildName": "normal",
//!         "eidolonLevel": 0,
//!         "equipment": { "itemId": 21000, "enhancementLevel": 5 },
//!         "relics": [{ "itemId": 61011, "primaryAffixId": 1, "subAffixes": "5:3 8:2" }]
//!       }
//!     ]
//!   }
//! ]
//! ```
//!
//! Deserialization validates the catalog: every record needs at least one
//! build and avatar ids must be unique.

use std::path::Path;

use loadout_core::BuildCatalog;

use crate::loaders::{LoadResult, read_file};

/// Loader for the build catalog from JSON files.
pub struct BuildCatalogLoader;

impl BuildCatalogLoader {
    /// Load and validate a build catalog from a JSON file.
    pub fn load(path: &Path) -> LoadResult<BuildCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse and validate a build catalog from JSON text.
    pub fn parse(content: &str) -> LoadResult<BuildCatalog> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse build catalog JSON: {}", e))
    }
}
