//! Host-side mutable state touched by a build application.
//!
//! The host game server owns these values; this crate models them so that
//! build resolution and provisioning can be expressed and tested without a
//! live server. Runtime layers pass `&mut PlayerState` explicitly; there is no
//! global registry.
pub mod types;

pub use types::{
    AffixId, AvatarId, AvatarState, EquipSlot, InventoryLimits, InventoryState, InventoryTab,
    ItemId, ItemInstance, ItemUid, PlayerId, PlayerState, RewardMask, SubAffix, SubAffixes,
};
