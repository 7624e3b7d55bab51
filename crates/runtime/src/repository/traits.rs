//! Repository contracts for saving and loading mutable player state.

use loadout_core::{AvatarId, PlayerId, PlayerState};

use crate::repository::Result;

/// Save interface the build applier hands each finished avatar to.
///
/// The owning player is passed alongside the avatar id because equipped
/// slots reference inventory uids; an avatar is only meaningful together
/// with the inventory that holds its items.
pub trait AvatarRepository: Send + Sync {
    fn save_avatar(&self, player: &PlayerState, avatar_id: AvatarId) -> Result<()>;
}

/// Repository for whole-player persistence.
pub trait PlayerRepository: Send + Sync {
    /// Save a player, replacing any previous snapshot
    fn save(&self, player: &PlayerState) -> Result<()>;

    /// Load a player by id
    fn load(&self, id: PlayerId) -> Result<Option<PlayerState>>;
}
