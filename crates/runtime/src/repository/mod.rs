//! Repository layer for mutable player data
//!
//! Repositories handle data a build invocation CHANGES:
//! - Avatars handed off after a build is applied
//! - Whole player snapshots (roster + inventory) for save/load
//!
//! Static host content (item and avatar templates) is handled by Oracles, not Repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FilePlayerRepository;
pub use memory::InMemoryPlayerRepo;
pub use traits::{AvatarRepository, PlayerRepository};
