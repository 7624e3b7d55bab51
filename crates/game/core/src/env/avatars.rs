//! Avatar template definitions and oracle interface.
//!
//! Templates describe the static side of a playable character: which skill
//! tree points it owns. Skill point limits are looked up per point, since
//! points can be shared between templates.

use crate::state::AvatarId;

/// Read-only access to the host character catalog.
pub trait AvatarOracle: Send + Sync {
    /// Looks up a character template by avatar id.
    fn template(&self, avatar_id: AvatarId) -> Option<AvatarTemplate>;

    /// Looks up the level-1 definition of a skill tree point.
    fn skill_point(&self, point_id: u32) -> Option<SkillPointDefinition>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvatarTemplate {
    pub avatar_id: AvatarId,
    pub skill_tree_ids: Vec<u32>,
}

impl AvatarTemplate {
    pub fn new(avatar_id: AvatarId, skill_tree_ids: Vec<u32>) -> Self {
        Self {
            avatar_id,
            skill_tree_ids,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillPointDefinition {
    pub point_id: u32,
    pub max_level: u32,
    /// Unlocked on a fresh avatar; such points never drop below level 1.
    pub default_unlock: bool,
}

impl SkillPointDefinition {
    /// Clamps a requested level to this point's valid range.
    pub fn clamp_level(&self, requested: u32) -> u32 {
        let floor = if self.default_unlock { 1 } else { 0 };
        requested.min(self.max_level).max(floor)
    }
}
