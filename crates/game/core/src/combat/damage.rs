//! Damage calculation.

use rand::Rng;

use crate::catalog::Weapon;
use crate::state::Participant;

/// Rounds to one decimal place.
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Draws the raw weapon damage uniformly from `[min_damage, max_damage]`.
pub fn roll_weapon_damage<R: Rng + ?Sized>(weapon: &Weapon, rng: &mut R) -> f64 {
    if weapon.min_damage >= weapon.max_damage {
        return weapon.min_damage;
    }
    rng.gen_range(weapon.min_damage..=weapon.max_damage)
}

/// Scales a raw roll by the attacker's class attack modifier.
///
/// # Formula
///
/// ```text
/// attacking_damage = round1(raw * attack_modifier)
/// ```
pub fn attacking_damage(attacker: &Participant, raw: f64) -> f64 {
    round1(raw * attacker.class().attack_modifier)
}

/// Armor absorption for the defender.
///
/// Armor only works while the defender can pay its upkeep; otherwise the
/// defender absorbs nothing.
///
/// # Formula
///
/// ```text
/// mitigation = defence * armor_modifier   if stamina >= stamina_per_turn
///            = 0                          otherwise
/// ```
pub fn mitigation(defender: &Participant) -> f64 {
    let armor = defender.armor();
    if defender.has_stamina_for(armor.stamina_per_turn) {
        armor.defence * defender.class().armor_modifier
    } else {
        0.0
    }
}

/// Damage that actually lands.
///
/// # Formula
///
/// ```text
/// final_damage = max(0, round1(attacking - mitigation))
/// ```
pub fn final_damage(attacking: f64, mitigation: f64) -> f64 {
    round1(attacking - mitigation).max(0.0)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::catalog::{Armor, ClassTemplate, Skill};

    fn participant(stamina: f64, armor_cost: f64) -> Participant {
        let class = ClassTemplate {
            name: "Warrior".into(),
            max_health: 60.0,
            max_stamina: 30.0,
            attack_modifier: 0.8,
            stamina_modifier: 0.9,
            armor_modifier: 1.2,
            skill: Skill::new("Power Thrust", 15.0, 5.0),
        };
        let weapon = Weapon {
            id: 1,
            name: "axe".into(),
            min_damage: 3.0,
            max_damage: 7.0,
            stamina_per_hit: 2.5,
        };
        let armor = Armor {
            id: 1,
            name: "leather".into(),
            defence: 2.5,
            stamina_per_turn: armor_cost,
        };
        Participant::new("Hero", Arc::new(class), Arc::new(weapon), Arc::new(armor))
            .with_vitals(60.0, stamina)
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round1(8.04), 8.0);
        assert_eq!(round1(8.05_f64 + 1e-9), 8.1);
        assert_eq!(round1(-0.04), -0.0);
    }

    #[test]
    fn roll_stays_within_weapon_range() {
        let weapon = participant(30.0, 1.0).weapon().clone();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let raw = roll_weapon_damage(&weapon, &mut rng);
            assert!((3.0..=7.0).contains(&raw));
        }
    }

    #[test]
    fn fixed_range_roll_needs_no_randomness() {
        let mut weapon = participant(30.0, 1.0).weapon().clone();
        weapon.min_damage = 10.0;
        weapon.max_damage = 10.0;
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(roll_weapon_damage(&weapon, &mut rng), 10.0);
    }

    #[test]
    fn attack_modifier_scales_roll() {
        let attacker = participant(30.0, 1.0);
        assert_eq!(attacking_damage(&attacker, 10.0), 8.0);
        // 6.33 * 0.8 = 5.064
        assert_eq!(attacking_damage(&attacker, 6.33), 5.1);
    }

    #[test]
    fn mitigation_requires_upkeep() {
        assert_eq!(mitigation(&participant(10.0, 1.0)), 2.5 * 1.2);
        assert_eq!(mitigation(&participant(0.5, 1.0)), 0.0);
    }

    #[test]
    fn final_damage_never_negative() {
        assert_eq!(final_damage(2.0, 3.0), 0.0);
        assert_eq!(final_damage(8.0, 3.0), 5.0);
    }
}
