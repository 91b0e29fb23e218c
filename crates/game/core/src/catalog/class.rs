//! Class templates and their bound skills.

use super::{CatalogError, RecordKind};

/// One-shot special move bound to a class.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    /// Flat damage dealt to the target, never mitigated by armor.
    pub damage: f64,
    /// Stamina the user must hold to trigger the skill.
    pub required_stamina: f64,
}

impl Skill {
    pub fn new(name: impl Into<String>, damage: f64, required_stamina: f64) -> Self {
        Self {
            name: name.into(),
            damage,
            required_stamina,
        }
    }
}

/// Immutable stat profile selected for a fighter at setup.
///
/// The three modifiers are multiplicative factors:
/// - `attack_modifier` scales the raw weapon roll
/// - `stamina_modifier` scales per-turn stamina regeneration
/// - `armor_modifier` scales the equipped armor's defence
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassTemplate {
    pub name: String,
    pub max_health: f64,
    pub max_stamina: f64,
    pub attack_modifier: f64,
    pub stamina_modifier: f64,
    pub armor_modifier: f64,
    pub skill: Skill,
}

impl ClassTemplate {
    /// Checks that every numeric field is strictly positive.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName(RecordKind::Class));
        }

        let fields = [
            ("max_health", self.max_health),
            ("max_stamina", self.max_stamina),
            ("attack_modifier", self.attack_modifier),
            ("stamina_modifier", self.stamina_modifier),
            ("armor_modifier", self.armor_modifier),
            ("skill.damage", self.skill.damage),
            ("skill.required_stamina", self.skill.required_stamina),
        ];

        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(CatalogError::invalid(
                    RecordKind::Class,
                    &self.name,
                    field,
                    value,
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warrior() -> ClassTemplate {
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

    #[test]
    fn accepts_positive_fields() {
        assert!(warrior().validate().is_ok());
    }

    #[test]
    fn rejects_zero_modifier() {
        let mut class = warrior();
        class.armor_modifier = 0.0;

        let err = class.validate().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidRecord { field: "armor_modifier", .. }
        ));
    }

    #[test]
    fn rejects_non_positive_skill_cost() {
        let mut class = warrior();
        class.skill.required_stamina = -1.0;

        let err = class.validate().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidRecord { field: "skill.required_stamina", .. }
        ));
    }
}
