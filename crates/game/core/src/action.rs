//! The three choices a fighter has on its turn.

/// Action chosen by a fighter for its turn.
///
/// Parses case-insensitively from its snake_case name or a short alias
/// (`hit`, `skill`, `pass`), which is what the text front-end accepts.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CombatAction {
    /// Swing the equipped weapon.
    #[strum(to_string = "attack", serialize = "hit")]
    Attack,
    /// Trigger the class skill.
    #[strum(to_string = "use_skill", serialize = "skill")]
    UseSkill,
    /// Do nothing this turn.
    #[strum(to_string = "pass_turn", serialize = "pass", serialize = "skip")]
    PassTurn,
}

impl CombatAction {
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}
