//! Avatar catalog loader.
//!
//! Loads character templates and the skill tree points they reference.

use std::path::Path;

use loadout_core::{AvatarTemplate, SkillPointDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Avatar catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvatarCatalog {
    pub avatars: Vec<AvatarTemplate>,
    #[serde(default)]
    pub skill_points: Vec<SkillPointDefinition>,
}

impl AvatarCatalog {
    /// Skill points referenced by a template but missing from the catalog.
    pub fn dangling_skill_points(&self) -> Vec<u32> {
        let known: std::collections::HashSet<u32> =
            self.skill_points.iter().map(|point| point.point_id).collect();
        self.avatars
            .iter()
            .flat_map(|avatar| avatar.skill_tree_ids.iter().copied())
            .filter(|id| !known.contains(id))
            .collect()
    }
}

/// Loader for avatar catalog from RON files.
pub struct AvatarLoader;

impl AvatarLoader {
    /// Load avatar templates and skill points from a RON file.
    pub fn load(path: &Path) -> LoadResult<AvatarCatalog> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse avatar catalog RON: {}", e))
    }
}
