//! Class skill resolution.

use crate::state::Participant;

use super::result::{ActionOutcome, ActionResult};

/// Resolves `user` triggering its class skill on `target`.
///
/// A skill can land once per match. Its damage bypasses armor, and the
/// stamina requirement is a threshold only: nothing is deducted.
pub fn resolve_skill(user: &mut Participant, target: &mut Participant) -> ActionResult {
    if user.skill_used() {
        return ActionResult::new(
            ActionOutcome::SkillAlreadyUsed,
            0.0,
            "The skill has already been used",
        );
    }

    let skill = &user.class().skill;

    if !user.has_stamina_for(skill.required_stamina) {
        tracing::debug!(
            "{} cannot use {}: stamina {} < {}",
            user.name(),
            skill.name,
            user.stamina(),
            skill.required_stamina
        );
        return ActionResult::new(
            ActionOutcome::SkillOutOfStamina,
            0.0,
            format!(
                "{} tried to use {}, but lacked the stamina",
                user.name(),
                skill.name
            ),
        );
    }

    let damage = skill.damage;
    let narration = format!(
        "{} uses {} and deals {:.1} damage to {}",
        user.name(),
        skill.name,
        damage,
        target.name()
    );

    user.skill_used = true;
    target.apply_damage(damage);
    tracing::debug!("{} spent skill on {}: damage={}", user.name(), target.name(), damage);

    ActionResult::new(ActionOutcome::SkillUsed, damage, narration)
}
