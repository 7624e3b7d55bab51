//! The `build` command: argument handling, capacity pre-check and replies.
//!
//! ```text
//! build [all|a|<avatar id>|<avatar name>] (build name) (-max)
//! ```

use loadout_content::ContentFactory;
use loadout_core::build::resolve;
use loadout_core::{
    BuildCatalog, BuildError, InventoryTab, LoadoutConfig, PlayerState, Selector,
};

use crate::api::{Result, RuntimeError};
use crate::applier::{AppliedBuild, ApplyOutcome, BuildApplier};

pub const USAGE: &str = "build [all/nickname/id] (build name) (-max)";

const NO_SPACE: &str =
    "Error: The targeted player does not have enough space in their inventory.";
const NO_BUILDS: &str = "No builds found. Please define one.";

/// Parsed invocation arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildArgs {
    pub selector: Selector,
    /// Requested variant name, lowercased.
    pub build_name: String,
    pub perfect: bool,
}

impl BuildArgs {
    pub fn new(selector: Selector, build_name: Option<&str>, perfect: bool) -> Self {
        let build_name = build_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(LoadoutConfig::DEFAULT_BUILD_NAME)
            .to_lowercase();
        Self {
            selector,
            build_name,
            perfect,
        }
    }

    /// Parses `selector [build]` with the perfect flag allowed anywhere.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut positional = Vec::with_capacity(2);
        let mut perfect = false;

        for arg in args {
            match arg.as_str() {
                "-max" | "--max" | "-perfect" => perfect = true,
                flag if flag.starts_with('-') => {
                    return Err(RuntimeError::InvalidArguments(format!(
                        "unknown flag '{}'",
                        flag
                    )));
                }
                value => positional.push(value),
            }
        }

        match positional.as_slice() {
            [selector] => Ok(Self::new(Selector::parse(selector), None, perfect)),
            [selector, build] => Ok(Self::new(Selector::parse(selector), Some(build), perfect)),
            [] => Err(RuntimeError::InvalidArguments(format!("usage: {}", USAGE))),
            _ => Err(RuntimeError::InvalidArguments(format!(
                "too many arguments, usage: {}",
                USAGE
            ))),
        }
    }
}

/// Text handed back to whoever issued the command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandReply {
    /// Non-fatal notices, sent before the message.
    pub warnings: Vec<String>,
    pub message: String,
}

impl CommandReply {
    fn message(message: impl Into<String>) -> Self {
        Self {
            warnings: Vec::new(),
            message: message.into(),
        }
    }
}

/// Where the build catalog comes from for one invocation.
pub trait CatalogSource {
    fn load_catalog(&self) -> std::result::Result<BuildCatalog, BuildError>;
}

/// Catalog read from the content data directory on every invocation.
pub struct ContentCatalogSource {
    factory: ContentFactory,
    config: LoadoutConfig,
}

impl ContentCatalogSource {
    pub fn new(factory: ContentFactory, config: LoadoutConfig) -> Self {
        Self { factory, config }
    }
}

impl CatalogSource for ContentCatalogSource {
    fn load_catalog(&self) -> std::result::Result<BuildCatalog, BuildError> {
        self.factory
            .load_build_catalog(&self.config)
            .map_err(|err| BuildError::CatalogUnavailable(err.to_string()))
    }
}

/// A catalog already held in memory.
pub struct StaticCatalog(pub BuildCatalog);

impl CatalogSource for StaticCatalog {
    fn load_catalog(&self) -> std::result::Result<BuildCatalog, BuildError> {
        Ok(self.0.clone())
    }
}

/// Runs build invocations against a target player.
pub struct BuildCommand<'a> {
    applier: BuildApplier<'a>,
    catalog: &'a dyn CatalogSource,
}

impl<'a> BuildCommand<'a> {
    pub fn new(applier: BuildApplier<'a>, catalog: &'a dyn CatalogSource) -> Self {
        Self { applier, catalog }
    }

    pub fn execute(&self, player: &mut PlayerState, args: &BuildArgs) -> CommandReply {
        if !has_inventory_space(player) {
            tracing::warn!(player = player.id.0, "inventory full, build refused");
            return CommandReply::message(NO_SPACE);
        }

        let catalog = self.catalog.load_catalog().unwrap_or_else(|err| {
            tracing::error!("{}", err);
            BuildCatalog::empty()
        });
        if catalog.is_empty() {
            return CommandReply::message(NO_BUILDS);
        }

        match &args.selector {
            Selector::All => self.execute_all(player, &catalog, args),
            selector => self.execute_single(player, &catalog, selector, args),
        }
    }

    fn execute_all(
        &self,
        player: &mut PlayerState,
        catalog: &BuildCatalog,
        args: &BuildArgs,
    ) -> CommandReply {
        let report = self
            .applier
            .apply_all(player, catalog, &args.build_name, args.perfect);

        let warnings = report
            .applied
            .iter()
            .filter_map(|applied| fallback_warning(applied, &args.build_name))
            .collect();

        let mut message = format!(
            "Gave {} characters relics for {} build.",
            report.applied_count(),
            args.build_name.to_uppercase()
        );
        if report.skipped_count() > 0 {
            message.push_str(&format!(" ({} skipped)", report.skipped_count()));
        }

        CommandReply { warnings, message }
    }

    fn execute_single(
        &self,
        player: &mut PlayerState,
        catalog: &BuildCatalog,
        selector: &Selector,
        args: &BuildArgs,
    ) -> CommandReply {
        let entry = match resolve(catalog, selector) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::info!("{}", err);
                return CommandReply::message(format!("Build not found for input: {}", selector));
            }
        };

        match self
            .applier
            .apply(player, entry, &args.build_name, args.perfect)
        {
            ApplyOutcome::Applied(applied) => CommandReply {
                warnings: fallback_warning(&applied, &args.build_name)
                    .into_iter()
                    .collect(),
                message: format!(
                    "Gave {} relics for {} build.",
                    applied.full_name,
                    applied.build_name.to_uppercase()
                ),
            },
            ApplyOutcome::Skipped(err) => CommandReply::message(format!(
                "Unable to build {}: {}",
                entry.full_name(),
                err
            )),
        }
    }
}

fn has_inventory_space(player: &PlayerState) -> bool {
    [InventoryTab::Relic, InventoryTab::Equipment]
        .into_iter()
        .all(|tab| player.inventory.available_capacity(tab) > 0)
}

fn fallback_warning(applied: &AppliedBuild, requested: &str) -> Option<String> {
    applied.used_fallback.then(|| {
        format!(
            "Warning: Build '{}' not found for character {}. Applying the first build instead.",
            requested, applied.full_name
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout_core::AvatarId;

    fn args(raw: &[&str]) -> Result<BuildArgs> {
        let raw: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
        BuildArgs::parse(&raw)
    }

    #[test]
    fn build_name_defaults_to_normal() {
        let parsed = args(&["1001"]).unwrap();
        assert_eq!(
            parsed.selector,
            Selector::ById {
                id: AvatarId(1001),
                raw: "1001".into(),
            }
        );
        assert_eq!(parsed.build_name, "normal");
        assert!(!parsed.perfect);
    }

    #[test]
    fn flag_is_accepted_anywhere() {
        let parsed = args(&["-max", "March7th", "Shield"]).unwrap();
        assert_eq!(parsed.selector, Selector::ByName("march7th".into()));
        assert_eq!(parsed.build_name, "shield");
        assert!(parsed.perfect);

        assert!(args(&["all", "--max"]).unwrap().perfect);
    }

    #[test]
    fn missing_selector_and_unknown_flags_are_rejected() {
        assert!(matches!(args(&[]), Err(RuntimeError::InvalidArguments(_))));
        assert!(matches!(
            args(&["all", "-fast"]),
            Err(RuntimeError::InvalidArguments(_))
        ));
        assert!(matches!(
            args(&["all", "normal", "extra"]),
            Err(RuntimeError::InvalidArguments(_))
        ));
    }
}
