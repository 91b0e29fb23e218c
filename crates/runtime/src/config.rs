//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use arena_core::GameConfig;

/// Process-level settings read once at startup.
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    pub data_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub stamina_regen: Option<f64>,
    pub skill_chance: Option<f64>,
    pub log_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_DATA_DIR` - Content directory (default: bundled data)
    /// - `ARENA_SEED` - Base seed for reproducible sessions (default: entropy)
    /// - `ARENA_STAMINA_REGEN` - Overrides `stamina_regen_per_turn`
    /// - `ARENA_SKILL_CHANCE` - Overrides `computer_skill_chance`
    /// - `ARENA_LOG_DIR` - Also write logs to `<dir>/arena.log`
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os("ARENA_DATA_DIR").map(PathBuf::from),
            seed: read_env::<u64>("ARENA_SEED"),
            stamina_regen: read_env::<f64>("ARENA_STAMINA_REGEN"),
            skill_chance: read_env::<f64>("ARENA_SKILL_CHANCE"),
            log_dir: env::var_os("ARENA_LOG_DIR").map(PathBuf::from),
        }
    }

    /// Applies the environment overrides on top of a loaded game config.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(regen) = self.stamina_regen {
            config.stamina_regen_per_turn = regen;
        }
        if let Some(chance) = self.skill_chance {
            config.computer_skill_chance = chance;
        }
        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
