//! Avatar (playable character) state.

use std::collections::BTreeMap;

use super::{AvatarId, EquipSlot, ItemUid, RewardMask};

/// Progression and equipment of one avatar owned by a player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvatarState {
    pub avatar_id: AvatarId,
    pub level: u32,
    pub exp: u32,
    pub promotion: u32,
    /// Eidolon level.
    pub rank: u32,
    pub rewards: RewardMask,
    /// Skill-tree point id → point level.
    pub skills: BTreeMap<u32, u32>,
    equips: BTreeMap<EquipSlot, ItemUid>,
}

impl AvatarState {
    /// Creates a fresh level-1 avatar with nothing equipped.
    pub fn new(avatar_id: AvatarId) -> Self {
        Self {
            avatar_id,
            level: 1,
            exp: 0,
            promotion: 0,
            rank: 0,
            rewards: RewardMask::default(),
            skills: BTreeMap::new(),
            equips: BTreeMap::new(),
        }
    }

    /// Records an item in a slot, returning the item it replaced.
    pub fn equip(&mut self, slot: EquipSlot, uid: ItemUid) -> Option<ItemUid> {
        self.equips.insert(slot, uid)
    }

    /// Clears a slot, returning the item that was in it.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<ItemUid> {
        self.equips.remove(&slot)
    }

    pub fn equipped(&self, slot: EquipSlot) -> Option<ItemUid> {
        self.equips.get(&slot).copied()
    }

    /// Slots that currently hold an item.
    pub fn equipped_slots(&self) -> Vec<EquipSlot> {
        self.equips.keys().copied().collect()
    }

    pub fn equips(&self) -> impl Iterator<Item = (EquipSlot, ItemUid)> + '_ {
        self.equips.iter().map(|(slot, uid)| (*slot, *uid))
    }
}
