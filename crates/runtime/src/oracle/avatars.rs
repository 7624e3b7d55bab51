//! Static avatar template oracle.
use std::collections::HashMap;

use loadout_content::AvatarCatalog;
use loadout_core::{AvatarId, AvatarOracle, AvatarTemplate, SkillPointDefinition};

pub struct AvatarOracleImpl {
    templates: HashMap<AvatarId, AvatarTemplate>,
    skill_points: HashMap<u32, SkillPointDefinition>,
}

impl AvatarOracleImpl {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
            skill_points: HashMap::new(),
        }
    }

    pub fn from_catalog(catalog: AvatarCatalog) -> Self {
        let mut oracle = Self::new();
        for template in catalog.avatars {
            oracle.add_template(template);
        }
        for point in catalog.skill_points {
            oracle.add_skill_point(point);
        }
        oracle
    }

    pub fn add_template(&mut self, template: AvatarTemplate) {
        self.templates.insert(template.avatar_id, template);
    }

    pub fn add_skill_point(&mut self, point: SkillPointDefinition) {
        self.skill_points.insert(point.point_id, point);
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}

impl Default for AvatarOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarOracle for AvatarOracleImpl {
    fn template(&self, avatar_id: AvatarId) -> Option<AvatarTemplate> {
        self.templates.get(&avatar_id).cloned()
    }

    fn skill_point(&self, point_id: u32) -> Option<SkillPointDefinition> {
        self.skill_points.get(&point_id).copied()
    }
}
