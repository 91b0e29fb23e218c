//! Decision rule for the computer-controlled fighter.

use rand::Rng;

use crate::action::CombatAction;
use crate::config::GameConfig;
use crate::state::Participant;

/// Picks the computer fighter's action each turn.
///
/// Every turn the policy rolls against `skill_chance`; a hit selects the skill
/// unless it has already been spent, otherwise the fighter attacks. The roll
/// is made fresh each turn, so the computer keeps trying for the skill until
/// it lands once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComputerPolicy {
    skill_chance: f64,
}

impl ComputerPolicy {
    /// Creates a policy. Out-of-range chances are clamped into `[0, 1]`.
    pub fn new(skill_chance: f64) -> Self {
        let skill_chance = if skill_chance.is_nan() {
            0.0
        } else {
            skill_chance.clamp(0.0, 1.0)
        };
        Self { skill_chance }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.computer_skill_chance)
    }

    pub fn skill_chance(&self) -> f64 {
        self.skill_chance
    }

    pub fn choose_action<R: Rng + ?Sized>(&self, me: &Participant, rng: &mut R) -> CombatAction {
        let rolled_skill = rng.gen_bool(self.skill_chance);
        let action = if rolled_skill && !me.skill_used() {
            CombatAction::UseSkill
        } else {
            CombatAction::Attack
        };

        tracing::debug!(
            "{} chose {} (skill roll={}, skill used={})",
            me.name(),
            action,
            rolled_skill,
            me.skill_used()
        );

        action
    }
}

impl Default for ComputerPolicy {
    fn default() -> Self {
        Self::new(GameConfig::DEFAULT_COMPUTER_SKILL_CHANCE)
    }
}
