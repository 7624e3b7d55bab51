//! Per-character build application.
//!
//! [`BuildApplier`] walks one catalog entry through
//! `select → detach → progression → equipment → relics → persist`. Only a
//! missing character template stops the walk early (as
//! [`ApplyOutcome::Skipped`]); missing item templates drop that single item
//! and the walk continues.
//!
//! The caller is responsible for checking inventory capacity beforehand.
//! Mutations are not rolled back.

use loadout_core::build::{create_equipment, create_relic, select_variant};
use loadout_core::{
    AvatarId, AvatarOracle, AvatarState, AvatarTemplate, BuildCatalog, BuildCatalogEntry,
    BuildError, BuildVariant, ItemKind, ItemOracle, LoadoutConfig, LoadoutEnv, LoadoutError,
    PlayerState, SubAffixRoller, TemplateRef,
};

use crate::api::Result;
use crate::repository::AvatarRepository;

/// Summary of a build that reached the end of the walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedBuild {
    pub avatar_id: AvatarId,
    pub full_name: String,
    /// Name of the variant actually applied.
    pub build_name: String,
    pub used_fallback: bool,
    /// Items created and equipped.
    pub equipped: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied(AppliedBuild),
    Skipped(BuildError),
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Outcome of applying a build to every catalog entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub applied: Vec<AppliedBuild>,
    pub skipped: Vec<(AvatarId, BuildError)>,
}

impl BatchReport {
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Applies catalog builds to a player's avatars.
pub struct BuildApplier<'a> {
    items: &'a dyn ItemOracle,
    avatars: &'a dyn AvatarOracle,
    roller: &'a dyn SubAffixRoller,
    repository: &'a dyn AvatarRepository,
    config: &'a LoadoutConfig,
}

impl<'a> BuildApplier<'a> {
    /// Creates an applier; every oracle of `env` must be present.
    pub fn new(
        env: LoadoutEnv<'a>,
        repository: &'a dyn AvatarRepository,
        config: &'a LoadoutConfig,
    ) -> Result<Self> {
        Ok(Self {
            items: env.items()?,
            avatars: env.avatars()?,
            roller: env.roller()?,
            repository,
            config,
        })
    }

    /// Applies the variant named `build_name` (or the entry's first variant)
    /// to the entry's avatar.
    pub fn apply(
        &self,
        player: &mut PlayerState,
        entry: &BuildCatalogEntry,
        build_name: &str,
        perfect: bool,
    ) -> ApplyOutcome {
        let avatar_id = entry.avatar_id();

        // Selecting character
        let Some(template) = self.avatars.template(avatar_id) else {
            let error = BuildError::TemplateMissing(TemplateRef::Avatar(avatar_id));
            tracing::error!(
                avatar = avatar_id.0,
                name = entry.full_name(),
                code = error.error_code(),
                severity = error.severity().as_str(),
                "{}",
                error
            );
            return ApplyOutcome::Skipped(error);
        };

        let selection = select_variant(entry, build_name);
        if let Some(notice) = selection.fallback_notice(entry, build_name) {
            tracing::warn!(avatar = avatar_id.0, "{}", notice);
        }
        let variant = selection.variant;

        if player.has_avatar(avatar_id) {
            self.detach(player, avatar_id);
        } else {
            tracing::debug!(avatar = avatar_id.0, "creating avatar from template");
            player.add_avatar(AvatarState::new(avatar_id));
        }

        let skill_level = entry
            .skill_level()
            .unwrap_or(self.config.default_skill_level);
        if let Some(avatar) = player.avatar_mut(avatar_id) {
            self.configure_progression(avatar, &template, skill_level);
            avatar.rank = variant.eidolon_level;
        }

        let mut equipped = self.provision_equipment(player, avatar_id, variant);
        equipped += self.provision_relics(player, avatar_id, variant, perfect);

        // Persisting
        if let Err(err) = self.repository.save_avatar(player, avatar_id) {
            tracing::error!(avatar = avatar_id.0, "failed to save avatar: {}", err);
        }

        tracing::info!(
            avatar = avatar_id.0,
            build = %variant.build_name,
            fallback = selection.used_fallback,
            equipped,
            "applied build to {}",
            entry.full_name()
        );

        ApplyOutcome::Applied(AppliedBuild {
            avatar_id,
            full_name: entry.full_name().to_string(),
            build_name: variant.build_name.clone(),
            used_fallback: selection.used_fallback,
            equipped,
        })
    }

    /// Applies the build to every catalog entry in order. One entry being
    /// skipped never stops the rest.
    pub fn apply_all(
        &self,
        player: &mut PlayerState,
        catalog: &BuildCatalog,
        build_name: &str,
        perfect: bool,
    ) -> BatchReport {
        let mut report = BatchReport::default();
        for entry in catalog.iter() {
            match self.apply(player, entry, build_name, perfect) {
                ApplyOutcome::Applied(applied) => report.applied.push(applied),
                ApplyOutcome::Skipped(error) => report.skipped.push((entry.avatar_id(), error)),
            }
        }
        report
    }

    /// Unequips every slot and destroys the removed items.
    fn detach(&self, player: &mut PlayerState, avatar_id: AvatarId) {
        let removed = player.unequip_all(avatar_id);
        let deleted = player.inventory.remove_items(&removed);
        tracing::debug!(avatar = avatar_id.0, deleted, "detached prior equipment");
    }

    fn configure_progression(
        &self,
        avatar: &mut AvatarState,
        template: &AvatarTemplate,
        skill_level: u32,
    ) {
        avatar.level = LoadoutConfig::MAX_LEVEL;
        avatar.exp = LoadoutConfig::EMPTY_EXP;
        avatar.promotion = LoadoutConfig::MAX_PROMOTION;
        avatar.rewards = LoadoutConfig::NO_REWARDS;

        for &point_id in &template.skill_tree_ids {
            match self.avatars.skill_point(point_id) {
                Some(point) => {
                    avatar.skills.insert(point_id, point.clamp_level(skill_level));
                }
                None => {
                    tracing::debug!(avatar = avatar.avatar_id.0, point_id, "skill point has no definition");
                }
            }
        }
    }

    fn provision_equipment(
        &self,
        player: &mut PlayerState,
        avatar_id: AvatarId,
        variant: &BuildVariant,
    ) -> usize {
        let Some(spec) = &variant.equipment else {
            return 0;
        };
        let Some(template) = self.items.template(spec.item_id) else {
            tracing::warn!(
                avatar = avatar_id.0,
                "{}",
                BuildError::TemplateMissing(TemplateRef::Item(spec.item_id))
            );
            return 0;
        };
        if template.kind != ItemKind::Equipment {
            tracing::warn!(
                avatar = avatar_id.0,
                "{}",
                BuildError::TemplateKindMismatch {
                    item: spec.item_id,
                    expected: "light cone",
                }
            );
            return 0;
        }

        let item = create_equipment(&template, spec.enhancement_level);
        let uid = player.inventory.add_item(item);
        usize::from(player.equip_item(avatar_id, uid))
    }

    fn provision_relics(
        &self,
        player: &mut PlayerState,
        avatar_id: AvatarId,
        variant: &BuildVariant,
        perfect: bool,
    ) -> usize {
        let mut equipped = 0;
        for spec in &variant.relics {
            let Some(template) = self.items.template(spec.item_id) else {
                tracing::warn!(
                    avatar = avatar_id.0,
                    "{}",
                    BuildError::TemplateMissing(TemplateRef::Item(spec.item_id))
                );
                continue;
            };

            let (item, report) =
                match create_relic(&template, spec, self.items, self.roller, perfect) {
                    Ok(created) => created,
                    Err(err) => {
                        tracing::warn!(avatar = avatar_id.0, "{}", err);
                        continue;
                    }
                };
            if !report.skipped_unknown.is_empty() || !report.skipped_overflow.is_empty() {
                tracing::debug!(
                    item = spec.item_id.0,
                    unknown = ?report.skipped_unknown,
                    overflow = ?report.skipped_overflow,
                    "dropped requested sub-affixes"
                );
            }

            let uid = player.inventory.add_item(item);
            if player.equip_item(avatar_id, uid) {
                equipped += 1;
            }
        }
        equipped
    }
}
