//! Action result types and weapon attack resolution.

use rand::Rng;

use crate::state::Participant;

use super::damage::{attacking_damage, final_damage, mitigation, roll_weapon_damage};

/// What happened when a fighter acted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionOutcome {
    /// Weapon damage got through the defender's armor.
    Breached,
    /// Armor absorbed the whole hit.
    Blocked,
    /// Attacker could not pay the weapon's stamina cost.
    OutOfStamina,
    /// Skill landed.
    SkillUsed,
    /// Skill was spent earlier in the match.
    SkillAlreadyUsed,
    /// User could not meet the skill's stamina requirement.
    SkillOutOfStamina,
    /// Fighter passed the turn.
    Passed,
}

impl ActionOutcome {
    /// Returns true if the action changed either fighter's state.
    pub const fn mutated_state(&self) -> bool {
        matches!(self, Self::Breached | Self::Blocked | Self::SkillUsed)
    }
}

/// Result of resolving one fighter's action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionResult {
    pub outcome: ActionOutcome,

    /// Health removed from the target (0 when nothing landed).
    pub damage: f64,

    /// Human-readable description of the action.
    pub narration: String,
}

impl ActionResult {
    pub fn new(outcome: ActionOutcome, damage: f64, narration: impl Into<String>) -> Self {
        Self {
            outcome,
            damage,
            narration: narration.into(),
        }
    }

    pub fn passed() -> Self {
        Self::new(ActionOutcome::Passed, 0.0, String::new())
    }
}

/// Resolves a weapon attack from `attacker` on `defender`.
///
/// 1. Attacker without stamina for the swing: nothing changes
/// 2. Roll weapon damage, scale by the attack modifier
/// 3. Subtract armor mitigation (only if the defender can pay armor upkeep)
/// 4. Apply damage, then charge both fighters their stamina costs
///
/// The defender pays armor upkeep even when the armor did not mitigate.
pub fn resolve_attack<R: Rng + ?Sized>(
    attacker: &mut Participant,
    defender: &mut Participant,
    rng: &mut R,
) -> ActionResult {
    let swing_cost = attacker.weapon().stamina_per_hit;

    if !attacker.has_stamina_for(swing_cost) {
        tracing::debug!(
            "{} cannot swing: stamina {} < {}",
            attacker.name(),
            attacker.stamina(),
            swing_cost
        );
        return ActionResult::new(
            ActionOutcome::OutOfStamina,
            0.0,
            format!(
                "{} tried to use {}, but lacked the stamina",
                attacker.name(),
                attacker.weapon().name
            ),
        );
    }

    let raw = roll_weapon_damage(attacker.weapon(), rng);
    let attacking = attacking_damage(attacker, raw);
    let absorbed = mitigation(defender);
    let damage = final_damage(attacking, absorbed);

    tracing::debug!(
        "{} attacks {}: raw={:.2} attacking={} mitigation={} final={}",
        attacker.name(),
        defender.name(),
        raw,
        attacking,
        absorbed,
        damage
    );

    defender.apply_damage(damage);
    attacker.stamina -= swing_cost;
    defender.stamina -= defender.armor().stamina_per_turn;

    if damage > 0.0 {
        ActionResult::new(
            ActionOutcome::Breached,
            damage,
            format!(
                "{}, using {}, breaks through {}'s {} and deals {:.1} damage",
                attacker.name(),
                attacker.weapon().name,
                defender.name(),
                defender.armor().name,
                damage
            ),
        )
    } else {
        ActionResult::new(
            ActionOutcome::Blocked,
            0.0,
            format!(
                "{}, using {}, strikes, but {}'s {} stops the blow",
                attacker.name(),
                attacker.weapon().name,
                defender.name(),
                defender.armor().name
            ),
        )
    }
}
