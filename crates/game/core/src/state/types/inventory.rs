//! Owner inventory.
//!
//! Stores item instances by uid and tracks per-tab capacity. The inventory
//! owns every item added to it; equipping only records the uid on an avatar.

use std::collections::BTreeMap;

use super::{InventoryTab, ItemInstance, ItemUid};

/// Maximum number of items per inventory tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InventoryLimits {
    pub equipment: u32,
    pub relic: u32,
}

impl InventoryLimits {
    pub const DEFAULT_EQUIPMENT: u32 = 1500;
    pub const DEFAULT_RELIC: u32 = 1500;

    pub fn limit(&self, tab: InventoryTab) -> u32 {
        match tab {
            InventoryTab::Equipment => self.equipment,
            InventoryTab::Relic => self.relic,
        }
    }
}

impl Default for InventoryLimits {
    fn default() -> Self {
        Self {
            equipment: Self::DEFAULT_EQUIPMENT,
            relic: Self::DEFAULT_RELIC,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    items: BTreeMap<ItemUid, ItemInstance>,
    next_uid: u64,
    pub limits: InventoryLimits,
}

impl InventoryState {
    pub fn new(limits: InventoryLimits) -> Self {
        Self {
            items: BTreeMap::new(),
            next_uid: 1,
            limits,
        }
    }

    /// Takes ownership of an item and returns its freshly allocated uid.
    pub fn add_item(&mut self, item: ItemInstance) -> ItemUid {
        let uid = ItemUid(self.next_uid);
        self.next_uid += 1;
        self.items.insert(uid, item);
        uid
    }

    /// Deletes the given items, returning how many were actually present.
    pub fn remove_items(&mut self, uids: &[ItemUid]) -> usize {
        uids.iter()
            .filter(|uid| self.items.remove(uid).is_some())
            .count()
    }

    pub fn get(&self, uid: ItemUid) -> Option<&ItemInstance> {
        self.items.get(&uid)
    }

    pub fn contains(&self, uid: ItemUid) -> bool {
        self.items.contains_key(&uid)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemUid, &ItemInstance)> {
        self.items.iter().map(|(uid, item)| (*uid, item))
    }

    /// Number of items stored in a tab.
    pub fn count(&self, tab: InventoryTab) -> u32 {
        self.items.values().filter(|item| item.tab() == tab).count() as u32
    }

    /// Free space left in a tab.
    pub fn available_capacity(&self, tab: InventoryTab) -> u32 {
        self.limits.limit(tab).saturating_sub(self.count(tab))
    }
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new(InventoryLimits::default())
    }
}
