use std::sync::Arc;

use crate::catalog::{Armor, ClassTemplate, Weapon};
use crate::combat::round1;

/// One side of a duel: mutable battle state plus the immutable records it was
/// built from.
///
/// # Invariants
///
/// - `health` only decreases during a match and may drop below zero
/// - `stamina` never exceeds `class.max_stamina` after regeneration; it is not
///   clamped from below, so swing and armor costs can push it negative
/// - `skill_used` flips from `false` to `true` at most once
#[derive(Clone, Debug, PartialEq)]
pub struct Participant {
    name: String,
    class: Arc<ClassTemplate>,
    weapon: Arc<Weapon>,
    armor: Arc<Armor>,
    pub(crate) health: f64,
    pub(crate) stamina: f64,
    pub(crate) skill_used: bool,
}

impl Participant {
    /// Creates a fighter at full health and full stamina.
    pub fn new(
        name: impl Into<String>,
        class: Arc<ClassTemplate>,
        weapon: Arc<Weapon>,
        armor: Arc<Armor>,
    ) -> Self {
        let health = class.max_health;
        let stamina = class.max_stamina;
        Self {
            name: name.into(),
            class,
            weapon,
            armor,
            health,
            stamina,
            skill_used: false,
        }
    }

    /// Overrides the starting health and stamina.
    pub fn with_vitals(mut self, health: f64, stamina: f64) -> Self {
        self.health = health;
        self.stamina = stamina;
        self
    }

    /// Marks the class skill as already spent.
    pub fn with_skill_used(mut self) -> Self {
        self.skill_used = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &ClassTemplate {
        &self.class
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn armor(&self) -> &Armor {
        &self.armor
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn stamina(&self) -> f64 {
        self.stamina
    }

    pub fn skill_used(&self) -> bool {
        self.skill_used
    }

    /// Subtracts `amount` from health. Health is not floored at zero.
    pub fn apply_damage(&mut self, amount: f64) {
        self.health = round1(self.health - amount);
    }

    /// Recovers `base * stamina_modifier`, capped at the class maximum.
    pub fn regenerate_stamina(&mut self, base: f64) {
        let recovered = round1(self.stamina + base * self.class.stamina_modifier);
        self.stamina = recovered.min(self.class.max_stamina);
    }

    pub fn has_stamina_for(&self, cost: f64) -> bool {
        self.stamina >= cost
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}
