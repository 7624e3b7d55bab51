//! Equip slots and inventory tabs.
//!
//! Every item instance occupies exactly one equip slot on an avatar and is
//! counted against exactly one inventory tab.

use strum::{Display, EnumIter};

/// Slot an item occupies when equipped on an avatar.
///
/// Equipping into an occupied slot replaces the previous item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipSlot {
    /// Weapon-like equipment (light cone).
    LightCone,

    // Cavern relics
    Head,
    Hands,
    Body,
    Feet,

    // Planar ornaments
    Sphere,
    Rope,
}

impl EquipSlot {
    /// Returns true for relic slots (everything except the equipment slot).
    pub const fn is_relic(self) -> bool {
        !matches!(self, Self::LightCone)
    }

    /// Inventory tab that stores items for this slot.
    pub const fn tab(self) -> InventoryTab {
        if self.is_relic() {
            InventoryTab::Relic
        } else {
            InventoryTab::Equipment
        }
    }
}

/// Inventory category with its own capacity limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryTab {
    Equipment,
    Relic,
}
