//! In-memory player repository for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use loadout_core::{AvatarId, AvatarState, PlayerId, PlayerState};

use crate::repository::{AvatarRepository, PlayerRepository, RepositoryError, Result};

/// In-memory implementation of both player and avatar repositories.
///
/// Saved avatars are kept as separate snapshots so tests can observe exactly
/// what the build applier handed off.
#[derive(Default)]
pub struct InMemoryPlayerRepo {
    players: RwLock<HashMap<PlayerId, PlayerState>>,
    avatars: RwLock<HashMap<(PlayerId, AvatarId), AvatarState>>,
}

impl InMemoryPlayerRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last avatar snapshot saved for a player.
    pub fn saved_avatar(&self, player: PlayerId, avatar: AvatarId) -> Option<AvatarState> {
        self.avatars
            .read()
            .ok()
            .and_then(|avatars| avatars.get(&(player, avatar)).cloned())
    }

    /// Number of distinct avatars saved so far.
    pub fn saved_avatar_count(&self) -> usize {
        self.avatars.read().map(|avatars| avatars.len()).unwrap_or(0)
    }
}

impl AvatarRepository for InMemoryPlayerRepo {
    fn save_avatar(&self, player: &PlayerState, avatar_id: AvatarId) -> Result<()> {
        let avatar = player
            .avatar(avatar_id)
            .ok_or(RepositoryError::AvatarNotOwned {
                player: player.id,
                avatar: avatar_id,
            })?;
        let mut avatars = self
            .avatars
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        avatars.insert((player.id, avatar_id), avatar.clone());
        Ok(())
    }
}

impl PlayerRepository for InMemoryPlayerRepo {
    fn save(&self, player: &PlayerState) -> Result<()> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        players.insert(player.id, player.clone());
        Ok(())
    }

    fn load(&self, id: PlayerId) -> Result<Option<PlayerState>> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(players.get(&id).cloned())
    }
}
