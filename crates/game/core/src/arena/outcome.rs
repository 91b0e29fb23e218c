use crate::state::Participant;

/// Terminal classification of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    #[strum(to_string = "Draw")]
    Draw,
    #[strum(to_string = "Hero wins")]
    HeroWins,
    #[strum(to_string = "Enemy wins")]
    EnemyWins,
}

impl Outcome {
    /// Classifies the fight after an action, or `None` while both fighters
    /// are still alive.
    ///
    /// The fight ends as soon as either health is not positive, but only
    /// strictly negative health counts as a defeat when picking the winner:
    /// a fighter left at exactly `0.0` is classified as a survivor, and when
    /// neither side is below zero the enemy is credited with the win.
    pub fn judge(hero: &Participant, enemy: &Participant) -> Option<Self> {
        if hero.is_alive() && enemy.is_alive() {
            return None;
        }

        let outcome = if hero.health() < 0.0 && enemy.health() < 0.0 {
            Self::Draw
        } else if enemy.health() < 0.0 {
            Self::HeroWins
        } else {
            Self::EnemyWins
        };
        Some(outcome)
    }
}

/// Lifecycle of a [`Match`](super::Match).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPhase {
    /// Fighters are being chosen or the game has not been started.
    Setup,
    /// Both fighters are set and rounds are accepted.
    InProgress,
    /// The fight is over. `outcome` is `None` when it was ended manually.
    Ended { outcome: Option<Outcome> },
}
