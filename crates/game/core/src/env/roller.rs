//! Default sub-affix fill policy of the host item system.

use super::RelicData;
use crate::state::ItemInstance;

/// Fills open sub-affix rolls on a relic using the host's own policy.
///
/// The build engine decides only how many rolls to add; which lines receive
/// them and how they are valued belongs to the implementation.
pub trait SubAffixRoller: Send + Sync {
    fn fill(&self, item: &mut ItemInstance, relic: &RelicData, rolls: u32);
}
