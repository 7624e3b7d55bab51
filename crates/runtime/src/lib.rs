//! Runtime orchestration for applying character builds.
//!
//! This crate wires the pure build operations of `loadout-core` to concrete
//! host services: in-memory oracles loaded from content files, a seeded
//! sub-affix fill policy, and player repositories. Consumers embed
//! [`BuildCommand`] to run one invocation against a target player.
//!
//! Modules are organized by responsibility:
//! - [`applier`] runs the per-character build state machine
//! - [`command`] turns invocation arguments into a reply message
//! - [`api`] exposes the error types downstream clients interact with
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod applier;
pub mod command;
pub mod oracle;
pub mod repository;

pub use api::{Result, RuntimeError};
pub use applier::{AppliedBuild, ApplyOutcome, BatchReport, BuildApplier};
pub use command::{
    BuildArgs, BuildCommand, CatalogSource, CommandReply, ContentCatalogSource, StaticCatalog,
};
pub use oracle::{AvatarOracleImpl, ItemOracleImpl, OracleManager, PcgSubAffixRoller};
pub use repository::{
    AvatarRepository, FilePlayerRepository, InMemoryPlayerRepo, PlayerRepository,
    RepositoryError,
};
