//! Client configuration from environment variables and command-line flags.
use std::env;
use std::path::PathBuf;

use loadout_core::PlayerId;
use loadout_runtime::PcgSubAffixRoller;

/// Where the client reads content from and writes players and logs to.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `config.toml`, the build catalog and host templates.
    pub data_dir: PathBuf,
    /// Directory holding player snapshots.
    pub save_dir: PathBuf,
    /// File logging is enabled only when set.
    pub log_dir: Option<PathBuf>,
    /// Player the build is applied to.
    pub player_id: PlayerId,
    /// Base seed of the sub-affix roller.
    pub seed: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            save_dir: data_dir.join("players"),
            data_dir,
            log_dir: None,
            player_id: PlayerId::default(),
            seed: PcgSubAffixRoller::DEFAULT_SEED,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LOADOUT_DATA_DIR` - Content directory (default: platform-specific)
    /// - `LOADOUT_SAVE_DIR` - Player snapshots (default: `{data_dir}/players`)
    /// - `LOADOUT_LOG_DIR` - Enables file logging into this directory
    /// - `LOADOUT_PLAYER_ID` - Target player (default: 0)
    /// - `LOADOUT_SEED` - Sub-affix roller seed
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("LOADOUT_DATA_DIR") {
            config.save_dir = dir.join("players");
            config.data_dir = dir;
        }

        if let Some(dir) = read_env::<PathBuf>("LOADOUT_SAVE_DIR") {
            config.save_dir = dir;
        }

        config.log_dir = read_env::<PathBuf>("LOADOUT_LOG_DIR");

        if let Some(id) = read_env::<u32>("LOADOUT_PLAYER_ID") {
            config.player_id = PlayerId(id);
        }

        if let Some(seed) = read_env::<u64>("LOADOUT_SEED") {
            config.seed = seed;
        }

        config
    }
}

/// Platform-specific data directory for loadout
///
/// - macOS: `~/Library/Application Support/loadout`
/// - Linux: `~/.local/share/loadout` (or `$XDG_DATA_HOME/loadout`)
/// - Windows: `%APPDATA%\loadout`
/// - Fallback: `./data`
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "loadout")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
