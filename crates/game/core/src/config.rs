use crate::error::{ErrorSeverity, GameError};

/// Match tuning parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Base stamina each fighter recovers after every action, scaled by the
    /// class stamina modifier.
    pub stamina_regen_per_turn: f64,

    /// Probability that the computer fighter tries its skill on a given turn
    /// while the skill is still unused.
    pub computer_skill_chance: f64,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STAMINA_REGEN_PER_TURN: f64 = 1.0;
    pub const DEFAULT_COMPUTER_SKILL_CHANCE: f64 = 0.1;

    pub fn new() -> Self {
        Self {
            stamina_regen_per_turn: Self::DEFAULT_STAMINA_REGEN_PER_TURN,
            computer_skill_chance: Self::DEFAULT_COMPUTER_SKILL_CHANCE,
        }
    }

    pub fn with_stamina_regen(mut self, stamina_regen_per_turn: f64) -> Self {
        self.stamina_regen_per_turn = stamina_regen_per_turn;
        self
    }

    pub fn with_computer_skill_chance(mut self, computer_skill_chance: f64) -> Self {
        self.computer_skill_chance = computer_skill_chance;
        self
    }

    /// Checks that every parameter is usable by the match engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let regen = self.stamina_regen_per_turn;
        if !regen.is_finite() || regen < 0.0 {
            return Err(ConfigError::InvalidStaminaRegen(regen));
        }

        let chance = self.computer_skill_chance;
        if !(0.0..=1.0).contains(&chance) {
            return Err(ConfigError::InvalidSkillChance(chance));
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors raised by [`GameConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("stamina regeneration must be a finite non-negative number (got {0})")]
    InvalidStaminaRegen(f64),

    #[error("computer skill chance must lie in [0, 1] (got {0})")]
    InvalidSkillChance(f64),
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidStaminaRegen(_) => "CONFIG_INVALID_STAMINA_REGEN",
            Self::InvalidSkillChance(_) => "CONFIG_INVALID_SKILL_CHANCE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.stamina_regen_per_turn, 1.0);
        assert_eq!(config.computer_skill_chance, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_negative_regen() {
        let config = GameConfig::new().with_stamina_regen(-1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidStaminaRegen(-1.0))
        );
    }

    #[test]
    fn rejects_out_of_range_chance() {
        let config = GameConfig::new().with_computer_skill_chance(1.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSkillChance(_))
        ));
        assert!(GameConfig::new().with_computer_skill_chance(f64::NAN).validate().is_err());
    }
}
