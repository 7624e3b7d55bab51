//! File-based player repository.

use std::fs;
use std::path::{Path, PathBuf};

use loadout_core::{AvatarId, PlayerId, PlayerState};

use crate::repository::{AvatarRepository, PlayerRepository, RepositoryError, Result};

/// File-based implementation of PlayerRepository.
///
/// Stores each player as `player_{id}.json`. Writes go to a temp file first
/// and are moved into place with a rename, so a crash never leaves a
/// half-written snapshot behind.
///
/// Saving an avatar rewrites its owner's snapshot: equipped slots refer to
/// inventory uids and are only consistent together with the inventory.
pub struct FilePlayerRepository {
    base_dir: PathBuf,
}

impl FilePlayerRepository {
    /// Create a new file-based player repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Get the path to a player file.
    fn player_path(&self, id: PlayerId) -> PathBuf {
        self.base_dir.join(format!("player_{}.json", id.0))
    }
}

impl AvatarRepository for FilePlayerRepository {
    fn save_avatar(&self, player: &PlayerState, avatar_id: AvatarId) -> Result<()> {
        if !player.has_avatar(avatar_id) {
            return Err(RepositoryError::AvatarNotOwned {
                player: player.id,
                avatar: avatar_id,
            });
        }
        self.save(player)
    }
}

impl PlayerRepository for FilePlayerRepository {
    fn save(&self, player: &PlayerState) -> Result<()> {
        let path = self.player_path(player.id);
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(player)?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved player[{}] to {}", player.id.0, path.display());

        Ok(())
    }

    fn load(&self, id: PlayerId) -> Result<Option<PlayerState>> {
        let path = self.player_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let player: PlayerState = serde_json::from_slice(&bytes)?;

        tracing::debug!("Loaded player[{}] from {}", id.0, path.display());

        Ok(Some(player))
    }
}
