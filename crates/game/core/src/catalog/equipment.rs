//! Weapon and armor records.

use super::{CatalogError, RecordKind};

/// Equippable weapon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub id: u32,
    pub name: String,
    pub min_damage: f64,
    pub max_damage: f64,
    /// Stamina spent by the wielder on every swing.
    pub stamina_per_hit: f64,
}

impl Weapon {
    /// Checks `0 <= min_damage <= max_damage` and a non-negative swing cost.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(RecordKind::Weapon));
        }

        let invalid =
            |field, value| CatalogError::invalid(RecordKind::Weapon, &self.name, field, value);

        if !(self.min_damage.is_finite() && self.min_damage >= 0.0) {
            return Err(invalid("min_damage", self.min_damage));
        }
        if !(self.max_damage.is_finite() && self.max_damage >= self.min_damage) {
            return Err(invalid("max_damage", self.max_damage));
        }
        if !(self.stamina_per_hit.is_finite() && self.stamina_per_hit >= 0.0) {
            return Err(invalid("stamina_per_hit", self.stamina_per_hit));
        }

        Ok(())
    }
}

/// Equippable armor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Armor {
    pub id: u32,
    pub name: String,
    /// Flat damage absorbed per hit, scaled by the wearer's armor modifier.
    pub defence: f64,
    /// Stamina spent by the wearer every time it is attacked.
    pub stamina_per_turn: f64,
}

impl Armor {
    /// Checks that defence and upkeep are non-negative.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(RecordKind::Armor));
        }

        let invalid =
            |field, value| CatalogError::invalid(RecordKind::Armor, &self.name, field, value);

        if !(self.defence.is_finite() && self.defence >= 0.0) {
            return Err(invalid("defence", self.defence));
        }
        if !(self.stamina_per_turn.is_finite() && self.stamina_per_turn >= 0.0) {
            return Err(invalid("stamina_per_turn", self.stamina_per_turn));
        }

        Ok(())
    }
}
