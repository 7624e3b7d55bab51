//! Reply messages produced by the build command.

mod common;

use common::*;
use loadout_content::ContentFactory;
use loadout_core::{
    BuildCatalog, BuildError, EquipSlot, InventoryLimits, ItemId, ItemInstance, LoadoutConfig,
    PlayerId, PlayerState,
};
use loadout_runtime::{
    BuildApplier, BuildArgs, BuildCommand, CatalogSource, CommandReply, ContentCatalogSource,
    InMemoryPlayerRepo, StaticCatalog,
};

struct BrokenCatalog;

impl CatalogSource for BrokenCatalog {
    fn load_catalog(&self) -> Result<BuildCatalog, BuildError> {
        Err(BuildError::CatalogUnavailable("unexpected end of input".into()))
    }
}

fn run(source: &dyn CatalogSource, player: &mut PlayerState, raw: &[&str]) -> CommandReply {
    let oracles = oracles();
    let repo = InMemoryPlayerRepo::new();
    let config = LoadoutConfig::default();
    let applier = BuildApplier::new(oracles.as_loadout_env(), &repo, &config).unwrap();
    let command = BuildCommand::new(applier, source);

    let raw: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
    let args = BuildArgs::parse(&raw).unwrap();
    command.execute(player, &args)
}

#[test]
fn single_character_by_id() {
    let source = StaticCatalog(catalog());
    let mut player = PlayerState::default();

    let reply = run(&source, &mut player, &["1001"]);

    assert!(reply.warnings.is_empty());
    assert_eq!(reply.message, "Gave March 7th relics for NORMAL build.");
    assert!(player.has_avatar(MARCH));
}

#[test]
fn single_character_by_name_ignores_case() {
    let source = StaticCatalog(catalog());
    let mut player = PlayerState::default();

    let reply = run(&source, &mut player, &["MARCH7TH", "Shield", "-max"]);

    assert_eq!(reply.message, "Gave March 7th relics for SHIELD build.");
    let head = equipped(&player, MARCH, EquipSlot::Head).unwrap();
    assert!(head.sub_affixes.iter().all(|line| line.step_count % 2 == 0));
}

#[test]
fn fallback_emits_warning_and_names_resolved_build() {
    let source = StaticCatalog(catalog());
    let mut player = PlayerState::default();

    let reply = run(&source, &mut player, &["1001", "ultra"]);

    assert_eq!(
        reply.warnings,
        vec![
            "Warning: Build 'ultra' not found for character March 7th. Applying the first build instead."
                .to_string()
        ]
    );
    assert_eq!(reply.message, "Gave March 7th relics for NORMAL build.");
}

#[test]
fn unknown_character_is_reported_without_mutation() {
    let source = StaticCatalog(catalog());
    let mut player = PlayerState::default();
    let before = player.clone();

    let reply = run(&source, &mut player, &["Kafka"]);

    assert_eq!(reply.message, "Build not found for input: kafka");
    assert_eq!(player, before);
}

#[test]
fn unknown_id_is_echoed_as_typed() {
    let source = StaticCatalog(catalog());
    let mut player = PlayerState::default();

    let reply = run(&source, &mut player, &["0042"]);

    assert_eq!(reply.message, "Build not found for input: 0042");
    assert!(player.avatars().next().is_none());
}

#[test]
fn zero_padded_id_resolves_to_the_character() {
    let source = StaticCatalog(catalog());
    let mut player = PlayerState::default();

    let reply = run(&source, &mut player, &["01001"]);

    assert_eq!(reply.message, "Gave March 7th relics for NORMAL build.");
}

#[test]
fn unresolvable_template_is_reported_for_single_character() {
    let source = StaticCatalog(catalog());
    let mut player = PlayerState::default();

    let reply = run(&source, &mut player, &["1003"]);

    assert_eq!(
        reply.message,
        "Unable to build Himeko: avatar template 1003 not found in host catalog"
    );
    assert!(!player.has_avatar(HIMEKO));
}

#[test]
fn all_mode_counts_successes_and_skips() {
    let source = StaticCatalog(catalog());
    let mut player = PlayerState::default();

    let reply = run(&source, &mut player, &["all", "ultra"]);

    assert_eq!(
        reply.message,
        "Gave 2 characters relics for ULTRA build. (1 skipped)"
    );
    assert_eq!(reply.warnings.len(), 2);
}

#[test]
fn full_inventory_blocks_before_any_mutation() {
    let source = StaticCatalog(catalog());
    let mut player = PlayerState::new(
        PlayerId(1),
        InventoryLimits {
            equipment: 10,
            relic: 1,
        },
    );
    player
        .inventory
        .add_item(ItemInstance::new(ItemId(555), EquipSlot::Feet));
    let before = player.clone();

    let reply = run(&source, &mut player, &["a"]);

    assert_eq!(
        reply.message,
        "Error: The targeted player does not have enough space in their inventory."
    );
    assert_eq!(player, before);
}

#[test]
fn equipment_tab_is_checked_too() {
    let source = StaticCatalog(catalog());
    let mut player = PlayerState::new(
        PlayerId(1),
        InventoryLimits {
            equipment: 0,
            relic: 10,
        },
    );

    let reply = run(&source, &mut player, &["1001"]);

    assert!(reply.message.starts_with("Error:"));
    assert!(!player.has_avatar(MARCH));
}

#[test]
fn unavailable_catalog_reads_as_empty() {
    let mut player = PlayerState::default();
    let reply = run(&BrokenCatalog, &mut player, &["all"]);
    assert_eq!(reply.message, "No builds found. Please define one.");
}

#[test]
fn content_source_with_missing_document_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let source = ContentCatalogSource::new(ContentFactory::new(dir.path()), LoadoutConfig::default());
    let mut player = PlayerState::default();

    let reply = run(&source, &mut player, &["1001"]);

    assert_eq!(reply.message, "No builds found. Please define one.");
    assert!(player.avatars().next().is_none());
}

#[test]
fn content_source_reads_catalog_document() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("BuildDetails.json"),
        r#"[{
            "avatarId": 1001,
            "avatarName": "March7th",
            "fullName": "March 7th",
            "builds": [{ "buildName": "normal", "relics": [{ "itemId": 101, "subAffixes": "5:3 8:2" }] }]
        }]"#,
    )
    .unwrap();
    let source = ContentCatalogSource::new(ContentFactory::new(dir.path()), LoadoutConfig::default());
    let mut player = PlayerState::default();

    let reply = run(&source, &mut player, &["march7th"]);

    assert_eq!(reply.message, "Gave March 7th relics for NORMAL build.");
    let relic = equipped(&player, MARCH, EquipSlot::Head).unwrap();
    assert_eq!(lines(relic), vec![(5, 3), (8, 2)]);
}
