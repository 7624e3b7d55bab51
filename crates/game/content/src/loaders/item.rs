//! Item catalog loader.

use std::path::Path;

use loadout_core::{ItemTemplate, SubAffixDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
///
/// ```ron
/// (
///     items: [
///         (id: 21000, rarity: 4, kind: Equipment),
///         (id: 61011, rarity: 5, kind: Relic((slot: Head, sub_affix_group: 5, max_sub_affix_count: 9))),
///     ],
///     sub_affixes: [
///         (group: 5, affix_id: 1, step_num: 2),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemTemplate>,
    #[serde(default)]
    pub sub_affixes: Vec<SubAffixDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item templates and sub-affix groups from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        ron::from_str(&content).map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))
    }
}
