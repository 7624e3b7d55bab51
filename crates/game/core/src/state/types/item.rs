//! Item instance state.
//!
//! This module contains the mutable item types handed to the host inventory:
//! - SubAffix: one secondary stat line on a relic
//! - SubAffixes: bounded collection of sub-affix lines
//! - ItemInstance: a generated equipment or relic

use arrayvec::ArrayVec;

use super::{AffixId, EquipSlot, InventoryTab, ItemId};
use crate::config::LoadoutConfig;

/// One secondary stat line on a relic.
///
/// `step_count` is the number of upgrade units applied to the line. Perfect
/// rolls double it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubAffix {
    pub affix_id: AffixId,
    pub step_count: u32,
}

impl SubAffix {
    pub fn new(affix_id: AffixId, step_count: u32) -> Self {
        Self {
            affix_id,
            step_count,
        }
    }
}

/// Sub-affix lines of a relic, bounded by [`LoadoutConfig::MAX_SUB_AFFIX_SLOTS`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SubAffixes(ArrayVec<SubAffix, { LoadoutConfig::MAX_SUB_AFFIX_SLOTS }>);

impl SubAffixes {
    pub fn new() -> Self {
        Self(ArrayVec::new())
    }

    /// Appends a line, returning it back if all lines are taken.
    pub fn push(&mut self, sub_affix: SubAffix) -> Result<(), SubAffix> {
        self.0.try_push(sub_affix).map_err(|err| err.element())
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.is_full()
    }

    pub fn contains(&self, affix_id: AffixId) -> bool {
        self.0.iter().any(|line| line.affix_id == affix_id)
    }

    pub fn get(&self, affix_id: AffixId) -> Option<&SubAffix> {
        self.0.iter().find(|line| line.affix_id == affix_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubAffix> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SubAffix> {
        self.0.iter_mut()
    }

    /// Total upgrade units across all lines.
    pub fn total_steps(&self) -> u32 {
        self.0.iter().map(|line| line.step_count).sum()
    }
}

/// A generated equipment or relic.
///
/// Created per build application and handed to the inventory, which owns it
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemInstance {
    pub template_id: ItemId,
    pub slot: EquipSlot,
    pub level: u32,
    pub exp: u32,
    pub promotion: u32,
    pub rank: u32,
    /// Primary stat of a relic; `None` for equipment.
    pub main_affix_id: Option<u32>,
    pub sub_affixes: SubAffixes,
}

impl ItemInstance {
    /// Creates a level-1 item for the given template and slot.
    pub fn new(template_id: ItemId, slot: EquipSlot) -> Self {
        Self {
            template_id,
            slot,
            level: 1,
            exp: 0,
            promotion: 0,
            rank: 1,
            main_affix_id: None,
            sub_affixes: SubAffixes::new(),
        }
    }

    pub fn tab(&self) -> InventoryTab {
        self.slot.tab()
    }

    /// Drops every sub-affix line.
    pub fn reset_sub_affixes(&mut self) {
        self.sub_affixes.clear();
    }

    /// Number of sub-affix rolls currently on the item, as the host counts them.
    pub fn current_sub_affix_count(&self) -> u32 {
        self.sub_affixes.total_steps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_affix_lines_are_bounded() {
        let mut lines = SubAffixes::new();
        for id in 0..LoadoutConfig::MAX_SUB_AFFIX_SLOTS as u32 {
            assert!(lines.push(SubAffix::new(AffixId(id), 1)).is_ok());
        }
        let rejected = lines.push(SubAffix::new(AffixId(99), 3));
        assert_eq!(rejected, Err(SubAffix::new(AffixId(99), 3)));
        assert!(lines.is_full());
    }

    #[test]
    fn current_count_sums_steps() {
        let mut relic = ItemInstance::new(ItemId(61011), EquipSlot::Head);
        relic.sub_affixes.push(SubAffix::new(AffixId(5), 3)).unwrap();
        relic.sub_affixes.push(SubAffix::new(AffixId(8), 2)).unwrap();
        assert_eq!(relic.current_sub_affix_count(), 5);

        relic.reset_sub_affixes();
        assert_eq!(relic.current_sub_affix_count(), 0);
    }
}
