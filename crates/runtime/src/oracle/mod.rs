//! Runtime wrappers around static host content.
//!
//! These implementations expose `loadout-core` oracle traits and bundle them
//! into an [`OracleManager`] so the runtime can build [`loadout_core::Env`]
//! snapshots on demand. The data is immutable at runtime; player state lives
//! in repositories.
mod avatars;
mod items;
mod roller;

use std::sync::Arc;

use loadout_content::{AvatarCatalog, ItemCatalog};
use loadout_core::{Env, ItemOracle, LoadoutEnv};

pub use avatars::AvatarOracleImpl;
pub use items::ItemOracleImpl;
pub use roller::PcgSubAffixRoller;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) avatars: Arc<AvatarOracleImpl>,
    pub(crate) roller: Arc<PcgSubAffixRoller>,
}

impl OracleManager {
    /// Creates a new oracle manager; the roller shares the item oracle.
    pub fn new(items: Arc<ItemOracleImpl>, avatars: Arc<AvatarOracleImpl>, seed: u64) -> Self {
        let shared: Arc<dyn ItemOracle> = items.clone();
        Self {
            items,
            avatars,
            roller: Arc::new(PcgSubAffixRoller::new(shared, seed)),
        }
    }

    /// Creates a manager from loaded content catalogs.
    pub fn from_catalogs(items: ItemCatalog, avatars: AvatarCatalog, seed: u64) -> Self {
        Self::new(
            Arc::new(ItemOracleImpl::from_catalog(items)),
            Arc::new(AvatarOracleImpl::from_catalog(avatars)),
            seed,
        )
    }

    /// Converts oracle manager into LoadoutEnv for loadout-core
    pub fn as_loadout_env(&self) -> LoadoutEnv<'_> {
        Env::with_all(
            self.items.as_ref(),
            self.avatars.as_ref(),
            self.roller.as_ref(),
        )
        .into_loadout_env()
    }

    pub fn items(&self) -> &ItemOracleImpl {
        &self.items
    }

    pub fn avatars(&self) -> &AvatarOracleImpl {
        &self.avatars
    }
}
