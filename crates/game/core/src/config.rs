use crate::state::{InventoryLimits, RewardMask};

/// Build application constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadoutConfig {
    /// Skill level requested for catalog entries that do not specify one.
    pub default_skill_level: u32,

    /// File name of the build catalog inside the data directory.
    pub catalog_file: String,

    /// Capacity of the inventory tabs for newly created players.
    pub inventory: InventoryLimits,
}

impl LoadoutConfig {
    // ===== fixed targets written by every build =====
    pub const MAX_LEVEL: u32 = 80;
    pub const MAX_PROMOTION: u32 = 6;
    pub const MAX_RELIC_LEVEL: u32 = 15;
    pub const EMPTY_EXP: u32 = 0;
    /// Reward claim mask marking every promotion reward as already taken.
    pub const NO_REWARDS: RewardMask = RewardMask(0b0010_1010);

    // ===== sub-affix bounds =====
    /// Upper bound for an explicitly requested sub-affix step count.
    pub const MAX_SUB_AFFIX_STEPS: u32 = 6;
    /// Lines a default fill may open on a relic.
    pub const MAX_SUB_AFFIX_LINES: usize = 4;
    /// Storage for explicit lines: one per affix of a relic sub-affix group.
    pub const MAX_SUB_AFFIX_SLOTS: usize = 12;
    /// Main affix used when a relic spec does not name one.
    pub const DEFAULT_MAIN_AFFIX: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BUILD_NAME: &'static str = "normal";
    pub const DEFAULT_SKILL_LEVEL: u32 = 10;
    pub const DEFAULT_CATALOG_FILE: &'static str = "BuildDetails.json";

    pub fn new() -> Self {
        Self {
            default_skill_level: Self::DEFAULT_SKILL_LEVEL,
            catalog_file: Self::DEFAULT_CATALOG_FILE.to_string(),
            inventory: InventoryLimits::default(),
        }
    }
}

impl Default for LoadoutConfig {
    fn default() -> Self {
        Self::new()
    }
}
