//! Relic sub-affix allocation.
//!
//! Turns the compact sub-affix text of a relic spec into concrete lines:
//!
//! 1. explicit lines from the text, clamped to
//!    [`LoadoutConfig::MAX_SUB_AFFIX_STEPS`]
//! 2. remaining rolls handed to the host's [`SubAffixRoller`]
//! 3. optional perfect override, doubling every line last so it also covers
//!    lines added by the roller

use std::collections::BTreeMap;

use crate::config::LoadoutConfig;
use crate::env::{ItemOracle, RelicData, SubAffixRoller};
use crate::state::{AffixId, ItemInstance, SubAffix};

/// Requested step count per raw affix id, ordered by id.
///
/// Ids are kept as written; ones the host catalog cannot know (negative or
/// out of range) are dropped by [`allocate`].
pub type AffixRequest = BTreeMap<i64, i64>;

/// Parses `affixId:count` / `affixId,count` tokens separated by whitespace.
///
/// Tokens with fewer than two fields or non-integer fields are skipped. Later
/// tokens for the same affix win.
pub fn parse(text: &str) -> AffixRequest {
    let mut request = AffixRequest::new();
    for token in text.split_whitespace() {
        let mut fields = token.split([':', ',']);
        let (Some(affix), Some(count)) = (fields.next(), fields.next()) else {
            continue;
        };
        let (Ok(affix), Ok(count)) = (affix.parse::<i64>(), count.parse::<i64>()) else {
            continue;
        };
        request.insert(affix, count);
    }
    request
}

/// What [`allocate`] did to a relic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllocationReport {
    /// Explicit lines written from the request.
    pub applied: usize,
    /// Requested affix ids the relic's sub-affix group does not contain.
    pub skipped_unknown: Vec<i64>,
    /// Requested affixes dropped because line storage was full.
    pub skipped_overflow: Vec<AffixId>,
    /// Rolls delegated to the host roller.
    pub filled_rolls: u32,
    pub perfected: bool,
}

/// Rewrites the sub-affixes of `item` from a parsed request.
///
/// Existing lines are discarded first. Counts of zero or less are ignored.
/// Every affix known to the relic's sub-affix group gets a line of at most
/// [`LoadoutConfig::MAX_SUB_AFFIX_STEPS`] steps.
///
/// Remaining rolls are `max_sub_affix_count - current_sub_affix_count`,
/// computed after the explicit lines; a non-positive remainder skips the
/// roller entirely.
pub fn allocate<I, R>(
    item: &mut ItemInstance,
    request: &AffixRequest,
    relic: &RelicData,
    items: &I,
    roller: &R,
    perfect: bool,
) -> AllocationReport
where
    I: ItemOracle + ?Sized,
    R: SubAffixRoller + ?Sized,
{
    let mut report = AllocationReport::default();
    item.reset_sub_affixes();

    for (&raw_id, &count) in request {
        if count <= 0 {
            continue;
        }
        let known = u32::try_from(raw_id)
            .ok()
            .map(AffixId)
            .filter(|&affix_id| items.sub_affix(relic.sub_affix_group, affix_id).is_some());
        let Some(affix_id) = known else {
            report.skipped_unknown.push(raw_id);
            continue;
        };
        let steps = count.min(LoadoutConfig::MAX_SUB_AFFIX_STEPS as i64) as u32;
        match item.sub_affixes.push(SubAffix::new(affix_id, steps)) {
            Ok(()) => report.applied += 1,
            Err(line) => report.skipped_overflow.push(line.affix_id),
        }
    }

    let remaining = relic.max_sub_affix_count as i64 - item.current_sub_affix_count() as i64;
    if remaining > 0 {
        report.filled_rolls = remaining as u32;
        roller.fill(item, relic, report.filled_rolls);
    }

    if perfect {
        perfect_rolls(item);
        report.perfected = true;
    }

    report
}

/// Doubles the step count of every sub-affix line.
pub fn perfect_rolls(item: &mut ItemInstance) {
    for line in item.sub_affixes.iter_mut() {
        line.step_count = line.step_count.saturating_mul(2);
    }
}
