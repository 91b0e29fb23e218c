use crate::action::CombatAction;
use crate::combat::ActionResult;

use super::Outcome;

/// One fighter's action within a round.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundEntry {
    pub actor: String,
    pub action: CombatAction,
    pub result: ActionResult,
}

/// Everything that happened in one call to [`Match::play_round`](super::Match::play_round).
///
/// A rejected round carries only a `notice` and no entries.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    pub notice: Option<String>,
    pub entries: Vec<RoundEntry>,
    pub outcome: Option<Outcome>,
}

impl RoundReport {
    pub(crate) fn notice(text: &str) -> Self {
        Self {
            notice: Some(text.to_owned()),
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, actor: &str, action: CombatAction, result: ActionResult) {
        self.entries.push(RoundEntry {
            actor: actor.to_owned(),
            action,
            result,
        });
    }

    /// Returns true if the round was refused before any action resolved.
    pub fn is_rejected(&self) -> bool {
        self.notice.is_some()
    }

    /// Concatenated narration: one line per non-empty action, with the
    /// outcome appended to the last line when the fight ended.
    pub fn narration(&self) -> String {
        let mut lines: Vec<&str> = Vec::new();
        if let Some(notice) = &self.notice {
            lines.push(notice);
        }
        lines.extend(
            self.entries
                .iter()
                .map(|entry| entry.result.narration.as_str())
                .filter(|text| !text.is_empty()),
        );

        let mut text = lines.join("\n");
        if let Some(outcome) = self.outcome {
            if !text.is_empty() {
                text.push_str(". ");
            }
            text.push_str(&outcome.to_string());
        }
        text
    }
}

impl std::fmt::Display for RoundReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.narration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::ActionOutcome;

    #[test]
    fn skips_empty_pass_narration() {
        let mut report = RoundReport::default();
        report.record("Hero", CombatAction::PassTurn, ActionResult::passed());
        report.record(
            "Orc",
            CombatAction::Attack,
            ActionResult::new(ActionOutcome::Blocked, 0.0, "Orc strikes"),
        );

        assert_eq!(report.narration(), "Orc strikes");
    }

    #[test]
    fn appends_outcome_to_last_line() {
        let mut report = RoundReport::default();
        report.record(
            "Hero",
            CombatAction::UseSkill,
            ActionResult::new(ActionOutcome::SkillUsed, 15.0, "Hero uses Power Thrust"),
        );
        report.outcome = Some(Outcome::HeroWins);

        assert_eq!(report.narration(), "Hero uses Power Thrust. Hero wins");
    }

    #[test]
    fn outcome_alone_when_nothing_was_said() {
        let report = RoundReport {
            outcome: Some(Outcome::Draw),
            ..RoundReport::default()
        };
        assert_eq!(report.to_string(), "Draw");
    }
}
