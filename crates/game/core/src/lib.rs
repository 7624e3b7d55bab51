//! Build resolution and relic sub-affix allocation.
//!
//! `loadout-core` defines the catalog records, the host-side state a build
//! touches, and the pure operations that resolve a build and generate its
//! items. Host services (item catalog, character templates, default affix
//! rolls) are reached only through the oracle traits in [`env`].
pub mod build;
pub mod catalog;
pub mod config;
pub mod env;
pub mod error;
pub mod selector;
pub mod state;

pub use build::{AffixRequest, AllocationReport, VariantSelection};
pub use catalog::{BuildCatalog, BuildCatalogEntry, BuildVariant, EquipmentSpec, RelicSpec};
pub use config::LoadoutConfig;
pub use env::{
    AvatarOracle, AvatarTemplate, Env, ItemKind, ItemOracle, ItemTemplate, LoadoutEnv,
    OracleError, PcgRng, RelicData, RngOracle, SkillPointDefinition, SubAffixDefinition,
    SubAffixRoller,
};
pub use error::{BuildError, ErrorSeverity, LoadoutError, TemplateRef};
pub use selector::Selector;
pub use state::{
    AffixId, AvatarId, AvatarState, EquipSlot, InventoryLimits, InventoryState, InventoryTab,
    ItemId, ItemInstance, ItemUid, PlayerId, PlayerState, RewardMask, SubAffix, SubAffixes,
};
