//! Traits describing the host game server.
//!
//! Oracles expose the item catalog, character templates and the default
//! sub-affix fill policy. The [`Env`] aggregate bundles them so the build
//! engine can reach everything it needs without hard coupling to a concrete
//! server.
mod avatars;
mod error;
mod items;
mod rng;
mod roller;

pub use avatars::{AvatarOracle, AvatarTemplate, SkillPointDefinition};
pub use error::OracleError;
pub use items::{ItemKind, ItemOracle, ItemTemplate, RelicData, SubAffixDefinition};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use roller::SubAffixRoller;

/// Aggregates the host interfaces used while applying builds.
pub struct Env<'a, I, A, R>
where
    I: ItemOracle + ?Sized,
    A: AvatarOracle + ?Sized,
    R: SubAffixRoller + ?Sized,
{
    items: Option<&'a I>,
    avatars: Option<&'a A>,
    roller: Option<&'a R>,
}

impl<I, A, R> Clone for Env<'_, I, A, R>
where
    I: ItemOracle + ?Sized,
    A: AvatarOracle + ?Sized,
    R: SubAffixRoller + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, A, R> Copy for Env<'_, I, A, R>
where
    I: ItemOracle + ?Sized,
    A: AvatarOracle + ?Sized,
    R: SubAffixRoller + ?Sized,
{
}

pub type LoadoutEnv<'a> =
    Env<'a, dyn ItemOracle + 'a, dyn AvatarOracle + 'a, dyn SubAffixRoller + 'a>;

impl<'a, I, A, R> Env<'a, I, A, R>
where
    I: ItemOracle + ?Sized,
    A: AvatarOracle + ?Sized,
    R: SubAffixRoller + ?Sized,
{
    pub fn new(items: Option<&'a I>, avatars: Option<&'a A>, roller: Option<&'a R>) -> Self {
        Self {
            items,
            avatars,
            roller,
        }
    }

    pub fn with_all(items: &'a I, avatars: &'a A, roller: &'a R) -> Self {
        Self::new(Some(items), Some(avatars), Some(roller))
    }

    pub fn empty() -> Self {
        Self {
            items: None,
            avatars: None,
            roller: None,
        }
    }

    /// Returns the ItemOracle, or an error if not available.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the AvatarOracle, or an error if not available.
    pub fn avatars(&self) -> Result<&'a A, OracleError> {
        self.avatars.ok_or(OracleError::AvatarsNotAvailable)
    }

    /// Returns the SubAffixRoller, or an error if not available.
    pub fn roller(&self) -> Result<&'a R, OracleError> {
        self.roller.ok_or(OracleError::RollerNotAvailable)
    }
}

impl<'a, I, A, R> Env<'a, I, A, R>
where
    I: ItemOracle + 'a,
    A: AvatarOracle + 'a,
    R: SubAffixRoller + 'a,
{
    /// Converts this environment into a trait-object based `LoadoutEnv`.
    pub fn into_loadout_env(self) -> LoadoutEnv<'a> {
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        let avatars: Option<&'a dyn AvatarOracle> = self.avatars.map(|avatars| avatars as _);
        let roller: Option<&'a dyn SubAffixRoller> = self.roller.map(|roller| roller as _);
        Env::new(items, avatars, roller)
    }
}
