use crate::state::{AffixId, EquipSlot, ItemId};

/// Read-only access to the host item catalog.
pub trait ItemOracle: Send + Sync {
    /// Looks up an item template by id.
    fn template(&self, id: ItemId) -> Option<ItemTemplate>;

    /// Looks up one sub-affix of a relic sub-affix group.
    fn sub_affix(&self, group: u32, affix_id: AffixId) -> Option<SubAffixDefinition>;

    /// Returns every sub-affix of a group, ordered by affix id.
    fn sub_affix_group(&self, group: u32) -> Vec<SubAffixDefinition>;
}

/// Item template with common fields and kind-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub id: ItemId,
    pub rarity: u32,
    pub kind: ItemKind,
}

impl ItemTemplate {
    pub fn new(id: ItemId, rarity: u32, kind: ItemKind) -> Self {
        Self { id, rarity, kind }
    }

    /// Relic data, or `None` for equipment.
    pub fn relic(&self) -> Option<&RelicData> {
        match &self.kind {
            ItemKind::Relic(relic) => Some(relic),
            ItemKind::Equipment => None,
        }
    }

    /// Slot the generated item occupies when equipped.
    pub fn slot(&self) -> EquipSlot {
        match &self.kind {
            ItemKind::Equipment => EquipSlot::LightCone,
            ItemKind::Relic(relic) => relic.slot,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Light cone equipment. Enhancement level is stored as rank.
    Equipment,

    /// Relic with a primary affix and sub-affix lines.
    Relic(RelicData),
}

/// Relic-specific template data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelicData {
    pub slot: EquipSlot,
    /// Group used to resolve sub-affix ids.
    pub sub_affix_group: u32,
    /// Maximum normal sub-affix rolls for a max-level relic of this template.
    pub max_sub_affix_count: u32,
}

/// One entry of a relic sub-affix group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubAffixDefinition {
    pub group: u32,
    pub affix_id: AffixId,
    /// Number of quality steps a single roll can land on.
    pub step_num: u32,
}
