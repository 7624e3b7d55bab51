//! Shared fixtures for the runtime integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use loadout_core::{
    AffixId, AvatarId, AvatarTemplate, BuildCatalog, BuildCatalogEntry, BuildVariant, EquipSlot,
    ItemId, ItemInstance, ItemKind, ItemTemplate, PlayerState, RelicData, SkillPointDefinition,
    SubAffixDefinition,
};
use loadout_runtime::{AvatarOracleImpl, ItemOracleImpl, OracleManager};

pub const MARCH: AvatarId = AvatarId(1001);
pub const DAN_HENG: AvatarId = AvatarId(1002);
/// Listed in the catalog but absent from the host templates.
pub const HIMEKO: AvatarId = AvatarId(1003);

pub const HEAD_RELIC: ItemId = ItemId(101);
pub const BODY_RELIC: ItemId = ItemId(103);
pub const LIGHT_CONE: ItemId = ItemId(21000);

/// Item templates: two relics with sub-affix group 5 (affixes 1..=12) and one
/// light cone. The head relic caps at 5 rolls so explicit lines fill it
/// exactly; the body relic caps at 9 and needs the roller.
pub fn oracles() -> OracleManager {
    let mut items = ItemOracleImpl::new();
    items.add_template(ItemTemplate::new(
        HEAD_RELIC,
        5,
        ItemKind::Relic(RelicData {
            slot: EquipSlot::Head,
            sub_affix_group: 5,
            max_sub_affix_count: 5,
        }),
    ));
    items.add_template(ItemTemplate::new(
        BODY_RELIC,
        5,
        ItemKind::Relic(RelicData {
            slot: EquipSlot::Body,
            sub_affix_group: 5,
            max_sub_affix_count: 9,
        }),
    ));
    items.add_template(ItemTemplate::new(LIGHT_CONE, 5, ItemKind::Equipment));
    for affix in 1..=12 {
        items.add_sub_affix(SubAffixDefinition {
            group: 5,
            affix_id: AffixId(affix),
            step_num: 2,
        });
    }

    let mut avatars = AvatarOracleImpl::new();
    avatars.add_template(AvatarTemplate::new(
        MARCH,
        vec![1001001, 1001002, 1001101, 1001999],
    ));
    avatars.add_template(AvatarTemplate::new(DAN_HENG, vec![1002001]));
    for (point_id, max_level, default_unlock) in [
        (1001001, 6, true),
        (1001002, 10, true),
        (1001101, 1, false),
        (1002001, 6, true),
    ] {
        avatars.add_skill_point(SkillPointDefinition {
            point_id,
            max_level,
            default_unlock,
        });
    }

    OracleManager::new(Arc::new(items), Arc::new(avatars), 7)
}

pub fn march_entry() -> BuildCatalogEntry {
    BuildCatalogEntry::new(
        MARCH,
        "March7th",
        "March 7th",
        vec![
            BuildVariant::new("normal").with_relic(HEAD_RELIC, None, "5:3 8:2"),
            BuildVariant::new("shield")
                .with_eidolon(6)
                .with_equipment(LIGHT_CONE, 5)
                .with_relic(HEAD_RELIC, Some(2), "5:3")
                .with_relic(BODY_RELIC, Some(4), "5:9 7:1 bogus 99:2"),
        ],
    )
    .unwrap()
}

pub fn catalog() -> BuildCatalog {
    BuildCatalog::new(vec![
        march_entry(),
        BuildCatalogEntry::new(
            DAN_HENG,
            "DanHeng",
            "Dan Heng",
            vec![BuildVariant::new("normal").with_relic(HEAD_RELIC, None, "1:2")],
        )
        .unwrap()
        .with_skill_level(3),
        BuildCatalogEntry::new(
            HIMEKO,
            "Himeko",
            "Himeko",
            vec![BuildVariant::new("normal").with_relic(HEAD_RELIC, None, "1:2")],
        )
        .unwrap(),
    ])
    .unwrap()
}

/// The item equipped in `slot` by `avatar`.
pub fn equipped<'p>(
    player: &'p PlayerState,
    avatar: AvatarId,
    slot: EquipSlot,
) -> Option<&'p ItemInstance> {
    let uid = player.avatar(avatar)?.equipped(slot)?;
    player.inventory.get(uid)
}

/// Sub-affix lines as `(affix id, step count)` pairs.
pub fn lines(item: &ItemInstance) -> Vec<(u32, u32)> {
    item.sub_affixes
        .iter()
        .map(|line| (line.affix_id.0, line.step_count))
        .collect()
}
