//! Player-owned state: avatar roster and inventory.

use std::collections::BTreeMap;

use super::{AvatarId, AvatarState, InventoryLimits, InventoryState, ItemUid, PlayerId};

/// Everything a build application may mutate for one target player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub id: PlayerId,
    avatars: BTreeMap<AvatarId, AvatarState>,
    pub inventory: InventoryState,
}

impl PlayerState {
    pub fn new(id: PlayerId, limits: InventoryLimits) -> Self {
        Self {
            id,
            avatars: BTreeMap::new(),
            inventory: InventoryState::new(limits),
        }
    }

    pub fn avatar(&self, avatar_id: AvatarId) -> Option<&AvatarState> {
        self.avatars.get(&avatar_id)
    }

    pub fn avatar_mut(&mut self, avatar_id: AvatarId) -> Option<&mut AvatarState> {
        self.avatars.get_mut(&avatar_id)
    }

    pub fn has_avatar(&self, avatar_id: AvatarId) -> bool {
        self.avatars.contains_key(&avatar_id)
    }

    /// Adds an avatar to the roster, replacing any avatar with the same id.
    pub fn add_avatar(&mut self, avatar: AvatarState) {
        self.avatars.insert(avatar.avatar_id, avatar);
    }

    pub fn avatars(&self) -> impl Iterator<Item = &AvatarState> {
        self.avatars.values()
    }

    /// Equips an inventory item on an avatar in the item's own slot.
    ///
    /// Returns `false` if the avatar or the item does not exist. An item
    /// previously occupying the slot stays in the inventory, unequipped.
    pub fn equip_item(&mut self, avatar_id: AvatarId, uid: ItemUid) -> bool {
        let Some(item) = self.inventory.get(uid) else {
            return false;
        };
        let slot = item.slot;
        match self.avatars.get_mut(&avatar_id) {
            Some(avatar) => {
                avatar.equip(slot, uid);
                true
            }
            None => false,
        }
    }

    /// Unequips every slot of an avatar and returns the removed item uids.
    pub fn unequip_all(&mut self, avatar_id: AvatarId) -> Vec<ItemUid> {
        let Some(avatar) = self.avatars.get_mut(&avatar_id) else {
            return Vec::new();
        };
        avatar
            .equipped_slots()
            .into_iter()
            .filter_map(|slot| avatar.unequip(slot))
            .collect()
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(PlayerId::default(), InventoryLimits::default())
    }
}
