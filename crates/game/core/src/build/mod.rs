//! Build resolution and item generation.
//!
//! - [`resolver`] finds catalog entries and variants
//! - [`affix`] parses sub-affix text and allocates relic lines
//! - [`factory`] creates equipment and relic instances
pub mod affix;
pub mod factory;
pub mod resolver;

pub use affix::{AffixRequest, AllocationReport, allocate, parse, perfect_rolls};
pub use factory::{create_equipment, create_relic};
pub use resolver::{VariantSelection, resolve, select_variant};
