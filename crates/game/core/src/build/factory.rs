//! Generation of fully specified equipment and relics.
//!
//! Templates are looked up by the caller; the factory only turns a resolved
//! template plus build parameters into a new [`ItemInstance`].

use super::affix::{self, AllocationReport};
use crate::catalog::RelicSpec;
use crate::config::LoadoutConfig;
use crate::env::{ItemOracle, ItemTemplate, SubAffixRoller};
use crate::error::BuildError;
use crate::state::ItemInstance;

/// Creates max-level, max-promotion equipment with the given enhancement rank.
pub fn create_equipment(template: &ItemTemplate, enhancement_level: u32) -> ItemInstance {
    let mut item = ItemInstance::new(template.id, template.slot());
    item.level = LoadoutConfig::MAX_LEVEL;
    item.exp = LoadoutConfig::EMPTY_EXP;
    item.promotion = LoadoutConfig::MAX_PROMOTION;
    item.rank = enhancement_level;
    item
}

/// Creates a max-level relic and allocates its sub-affixes from `spec`.
///
/// # Errors
///
/// Returns [`BuildError::TemplateKindMismatch`] if `template` is not a relic.
pub fn create_relic<I, R>(
    template: &ItemTemplate,
    spec: &RelicSpec,
    items: &I,
    roller: &R,
    perfect: bool,
) -> Result<(ItemInstance, AllocationReport), BuildError>
where
    I: ItemOracle + ?Sized,
    R: SubAffixRoller + ?Sized,
{
    let relic = template.relic().ok_or(BuildError::TemplateKindMismatch {
        item: template.id,
        expected: "relic",
    })?;

    let mut item = ItemInstance::new(template.id, relic.slot);
    item.level = LoadoutConfig::MAX_RELIC_LEVEL;
    item.exp = LoadoutConfig::EMPTY_EXP;
    item.main_affix_id = Some(
        spec.primary_affix_id
            .unwrap_or(LoadoutConfig::DEFAULT_MAIN_AFFIX),
    );

    let request = affix::parse(&spec.sub_affixes);
    let report = affix::allocate(&mut item, &request, relic, items, roller, perfect);

    Ok((item, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ItemKind, RelicData, SubAffixDefinition};
    use crate::state::{AffixId, EquipSlot, ItemId};

    struct Affixes;

    impl ItemOracle for Affixes {
        fn template(&self, _id: ItemId) -> Option<ItemTemplate> {
            None
        }

        fn sub_affix(&self, group: u32, affix_id: AffixId) -> Option<SubAffixDefinition> {
            Some(SubAffixDefinition {
                group,
                affix_id,
                step_num: 2,
            })
        }

        fn sub_affix_group(&self, _group: u32) -> Vec<SubAffixDefinition> {
            Vec::new()
        }
    }

    struct IdleRoller;

    impl SubAffixRoller for IdleRoller {
        fn fill(&self, _item: &mut ItemInstance, _relic: &RelicData, _rolls: u32) {}
    }

    fn relic_template() -> ItemTemplate {
        ItemTemplate::new(
            ItemId(61011),
            5,
            ItemKind::Relic(RelicData {
                slot: EquipSlot::Hands,
                sub_affix_group: 5,
                max_sub_affix_count: 9,
            }),
        )
    }

    #[test]
    fn equipment_uses_fixed_progression_and_enhancement_rank() {
        let template = ItemTemplate::new(ItemId(23001), 5, ItemKind::Equipment);
        let cone = create_equipment(&template, 5);

        assert_eq!(cone.level, LoadoutConfig::MAX_LEVEL);
        assert_eq!(cone.exp, 0);
        assert_eq!(cone.promotion, LoadoutConfig::MAX_PROMOTION);
        assert_eq!(cone.rank, 5);
        assert_eq!(cone.slot, EquipSlot::LightCone);
        assert!(cone.sub_affixes.is_empty());
    }

    #[test]
    fn relic_defaults_main_affix_to_one() {
        let spec = RelicSpec {
            item_id: ItemId(61011),
            primary_affix_id: None,
            sub_affixes: "5:3".into(),
        };
        let (relic, report) = create_relic(&relic_template(), &spec, &Affixes, &IdleRoller, false).unwrap();

        assert_eq!(relic.level, LoadoutConfig::MAX_RELIC_LEVEL);
        assert_eq!(relic.main_affix_id, Some(1));
        assert_eq!(relic.slot, EquipSlot::Hands);
        assert_eq!(report.applied, 1);
        assert_eq!(report.filled_rolls, 6);
    }

    #[test]
    fn relic_keeps_explicit_main_affix() {
        let spec = RelicSpec {
            item_id: ItemId(61011),
            primary_affix_id: Some(4),
            sub_affixes: String::new(),
        };
        let (relic, _) = create_relic(&relic_template(), &spec, &Affixes, &IdleRoller, false).unwrap();
        assert_eq!(relic.main_affix_id, Some(4));
    }

    #[test]
    fn equipment_template_is_not_a_relic() {
        let template = ItemTemplate::new(ItemId(23001), 5, ItemKind::Equipment);
        let spec = RelicSpec {
            item_id: ItemId(23001),
            primary_affix_id: None,
            sub_affixes: String::new(),
        };
        let result = create_relic(&template, &spec, &Affixes, &IdleRoller, false);
        assert!(matches!(
            result,
            Err(BuildError::TemplateKindMismatch { item: ItemId(23001), .. })
        ));
    }
}
