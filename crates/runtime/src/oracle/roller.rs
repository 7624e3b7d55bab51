//! Seeded stand-in for the host's default sub-affix fill.
//!
//! Each roll either opens a new line with one step, picked from the relic's
//! sub-affix group among affixes not yet present, or upgrades a random line
//! that is still below [`LoadoutConfig::MAX_SUB_AFFIX_STEPS`]. Rolling stops
//! early when neither is possible.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use loadout_core::{
    ItemInstance, ItemOracle, LoadoutConfig, PcgRng, RelicData, RngOracle, SubAffix,
    SubAffixRoller, env::compute_seed,
};

pub struct PcgSubAffixRoller {
    items: Arc<dyn ItemOracle>,
    rng: PcgRng,
    base_seed: u64,
    sequence: AtomicU64,
}

impl PcgSubAffixRoller {
    pub const DEFAULT_SEED: u64 = 0x6c6f_6164_6f75_7400;

    pub fn new(items: Arc<dyn ItemOracle>, base_seed: u64) -> Self {
        Self {
            items,
            rng: PcgRng,
            base_seed,
            sequence: AtomicU64::new(0),
        }
    }

    fn line_limit(relic: &RelicData) -> usize {
        LoadoutConfig::MAX_SUB_AFFIX_LINES.min(relic.max_sub_affix_count as usize)
    }
}

impl SubAffixRoller for PcgSubAffixRoller {
    fn fill(&self, item: &mut ItemInstance, relic: &RelicData, rolls: u32) {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let group = self.items.sub_affix_group(relic.sub_affix_group);
        let line_limit = Self::line_limit(relic);

        for roll in 0..rolls {
            let seed = compute_seed(self.base_seed, sequence, item.template_id.0, roll);

            if item.sub_affixes.len() < line_limit {
                let candidates: Vec<_> = group
                    .iter()
                    .filter(|definition| !item.sub_affixes.contains(definition.affix_id))
                    .collect();
                if !candidates.is_empty() {
                    let pick = candidates[self.rng.index(seed, candidates.len())];
                    if item.sub_affixes.push(SubAffix::new(pick.affix_id, 1)).is_ok() {
                        continue;
                    }
                }
            }

            let upgradable: Vec<usize> = item
                .sub_affixes
                .iter()
                .enumerate()
                .filter(|(_, line)| line.step_count < LoadoutConfig::MAX_SUB_AFFIX_STEPS)
                .map(|(index, _)| index)
                .collect();
            if upgradable.is_empty() {
                tracing::debug!(
                    item = item.template_id.0,
                    remaining = rolls - roll,
                    "no sub-affix line left to roll"
                );
                break;
            }

            let target = upgradable[self.rng.index(seed, upgradable.len())];
            if let Some(line) = item.sub_affixes.iter_mut().nth(target) {
                line.step_count += 1;
            }
        }
    }
}
