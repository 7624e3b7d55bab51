//! Loadout client binary.
//!
//! Applies a catalog build to one player and prints the reply:
//!
//! ```bash
//! loadout 1001                 # March 7th, "normal" build
//! loadout march7th shield -max # named build with perfect rolls
//! loadout all                  # every catalog character
//! ```
//!
//! The binary is the composition root: it loads content through
//! `loadout-content`, wires oracles and repositories from `loadout-runtime`,
//! runs the command and persists the player.

mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use loadout_content::ContentFactory;
use loadout_core::{PlayerId, PlayerState};
use loadout_runtime::{
    BuildApplier, BuildArgs, BuildCommand, ContentCatalogSource, FilePlayerRepository,
    OracleManager, PlayerRepository,
};

use crate::config::CliConfig;

/// Give characters a complete build from the build catalog
#[derive(Parser)]
#[command(name = "loadout")]
#[command(about = "Apply catalog builds to a player's characters", long_about = None)]
#[command(version)]
struct Cli {
    /// `all`, a character id or a character name, then an optional build
    /// name; `-max` rolls perfect sub-affixes
    #[arg(
        value_name = "ARGS",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,

    /// Content directory (overrides LOADOUT_DATA_DIR)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Player snapshot directory (overrides LOADOUT_SAVE_DIR)
    #[arg(long, value_name = "DIR")]
    save_dir: Option<PathBuf>,

    /// Log file directory (overrides LOADOUT_LOG_DIR)
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Target player id (overrides LOADOUT_PLAYER_ID)
    #[arg(long, value_name = "ID")]
    player: Option<u32>,

    /// Sub-affix roller seed (overrides LOADOUT_SEED)
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut CliConfig) {
        if let Some(dir) = &self.data_dir {
            if self.save_dir.is_none() && std::env::var_os("LOADOUT_SAVE_DIR").is_none() {
                config.save_dir = dir.join("players");
            }
            config.data_dir = dir.clone();
        }
        if let Some(dir) = &self.save_dir {
            config.save_dir = dir.clone();
        }
        if let Some(dir) = &self.log_dir {
            config.log_dir = Some(dir.clone());
        }
        if let Some(id) = self.player {
            config.player_id = PlayerId(id);
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 1. Load configuration from environment, then flags
    let mut config = CliConfig::from_env();
    cli.apply_overrides(&mut config);

    // 2. Setup logging
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let args = BuildArgs::parse(&cli.args)?;
    tracing::debug!(?args, "parsed build arguments");

    // 3. Load host content
    let factory = ContentFactory::new(&config.data_dir);
    let loadout_config = factory
        .load_config()
        .with_context(|| format!("Failed to load config from {}", config.data_dir.display()))?;
    let items = factory.load_items()?;
    let avatars = factory.load_avatars()?;

    let dangling = avatars.dangling_skill_points();
    if !dangling.is_empty() {
        tracing::warn!(?dangling, "skill points referenced without a definition");
    }

    let oracles = OracleManager::from_catalogs(items, avatars, config.seed);
    tracing::info!(
        items = oracles.items().template_count(),
        avatars = oracles.avatars().template_count(),
        "host content loaded from {}",
        config.data_dir.display()
    );

    // 4. Load the target player
    let repository = FilePlayerRepository::new(&config.save_dir)?;
    let mut player = match repository.load(config.player_id)? {
        Some(player) => player,
        None => {
            tracing::info!(player = config.player_id.0, "creating new player");
            PlayerState::new(config.player_id, loadout_config.inventory)
        }
    };

    // 5. Run the command
    let catalog = ContentCatalogSource::new(
        ContentFactory::new(&config.data_dir),
        loadout_config.clone(),
    );
    let applier = BuildApplier::new(oracles.as_loadout_env(), &repository, &loadout_config)?;
    let reply = BuildCommand::new(applier, &catalog).execute(&mut player, &args);

    for warning in &reply.warnings {
        println!("{}", warning);
    }
    println!("{}", reply.message);

    // 6. Persist
    repository.save(&player)?;
    tracing::debug!(player = player.id.0, "player saved");

    Ok(())
}
