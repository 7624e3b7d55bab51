//! Data-driven build and host content loaders.
//!
//! This crate reads the files a build invocation depends on:
//! - Build catalog (JSON, one record per character)
//! - Item templates and relic sub-affix groups (RON)
//! - Avatar templates and skill tree points (RON)
//! - Loadout configuration (TOML)
//!
//! Content is consumed by the runtime's oracles and command layer and never
//! persisted back.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    AvatarCatalog, AvatarLoader, BuildCatalogLoader, ConfigLoader, ContentFactory, ItemCatalog,
    ItemLoader, LoadResult,
};
