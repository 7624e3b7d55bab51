pub mod avatar;
pub mod common;
pub mod equipment;
pub mod inventory;
pub mod item;
pub mod player;

pub use avatar::AvatarState;
pub use common::{AffixId, AvatarId, ItemId, ItemUid, PlayerId, RewardMask};
pub use equipment::{EquipSlot, InventoryTab};
pub use inventory::{InventoryLimits, InventoryState};
pub use item::{ItemInstance, SubAffix, SubAffixes};
pub use player::PlayerState;
