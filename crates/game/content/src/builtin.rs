//! Built-in class templates.
//!
//! Used when a data directory ships no `classes.ron`.

use arena_core::{ClassTemplate, Skill};

/// Balanced melee fighter.
pub fn warrior() -> ClassTemplate {
    ClassTemplate {
        name: "Warrior".into(),
        max_health: 60.0,
        max_stamina: 30.0,
        attack_modifier: 0.8,
        stamina_modifier: 0.9,
        armor_modifier: 1.2,
        skill: Skill::new("Power Thrust", 15.0, 5.0),
    }
}

/// Same frame as the warrior, trading skill damage for a pricier kick.
pub fn ranger() -> ClassTemplate {
    ClassTemplate {
        name: "Ranger".into(),
        skill: Skill::new("Ferocious Kick", 12.0, 6.0),
        ..warrior()
    }
}

/// Fragile, hard-hitting and quick to recover.
pub fn thief() -> ClassTemplate {
    ClassTemplate {
        name: "Thief".into(),
        max_health: 50.0,
        max_stamina: 25.0,
        attack_modifier: 1.5,
        stamina_modifier: 1.2,
        armor_modifier: 1.0,
        skill: Skill::new("Tickling", 5.0, 3.0),
    }
}

/// Every built-in class in setup order.
pub fn builtin_classes() -> Vec<ClassTemplate> {
    vec![warrior(), ranger(), thief()]
}
