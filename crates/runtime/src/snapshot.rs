//! Serializable read models of a session's match.

use arena_core::{MatchPhase, Outcome, Participant};
use serde::Serialize;

use crate::session::SessionId;

/// One fighter as shown on the fight view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FighterSnapshot {
    pub name: String,
    pub class: String,
    pub weapon: String,
    pub armor: String,
    pub health: f64,
    pub max_health: f64,
    pub stamina: f64,
    pub max_stamina: f64,
    pub skill: String,
    pub skill_used: bool,
}

impl From<&Participant> for FighterSnapshot {
    fn from(fighter: &Participant) -> Self {
        let class = fighter.class();
        Self {
            name: fighter.name().to_owned(),
            class: class.name.clone(),
            weapon: fighter.weapon().name.clone(),
            armor: fighter.armor().name.clone(),
            health: fighter.health(),
            max_health: class.max_health,
            stamina: fighter.stamina(),
            max_stamina: class.max_stamina,
            skill: class.skill.name.clone(),
            skill_used: fighter.skill_used(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchSnapshot {
    pub session: SessionId,
    pub phase: MatchPhase,
    pub game_on: bool,
    pub hero: Option<FighterSnapshot>,
    pub enemy: Option<FighterSnapshot>,
    pub outcome: Option<Outcome>,
}

/// Record names offered by setup forms, in catalog order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CatalogListing {
    pub classes: Vec<String>,
    pub weapons: Vec<String>,
    pub armors: Vec<String>,
}
