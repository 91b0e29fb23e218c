//! Game configuration loader.

use std::path::Path;

use arena_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults. The parsed values are validated
    /// before they are returned.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid game config: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = ConfigLoader::parse(
            "stamina_regen_per_turn = 2.5\ncomputer_skill_chance = 0.5\n",
        )
        .unwrap();

        assert_eq!(config.stamina_regen_per_turn, 2.5);
        assert_eq!(config.computer_skill_chance, 0.5);
    }

    #[test]
    fn rejects_out_of_range_chance() {
        let err = ConfigLoader::parse("computer_skill_chance = 1.5").unwrap_err();
        assert!(err.to_string().contains("Invalid game config"));
    }
}
