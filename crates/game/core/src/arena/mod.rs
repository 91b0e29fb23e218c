//! Match lifecycle and round sequencing.
//!
//! The [`Match`] is the authoritative reducer for a duel. It owns both fighter
//! slots, the lifecycle flag and the random generator, and it is the only
//! place where a full round is sequenced:
//!
//! human action → outcome check → regen → computer action → outcome check → regen
//!
//! Every entry point returns narration, even when nothing happened, so the
//! presentation layer never has to handle an error during play.
mod outcome;
mod report;

pub use outcome::{MatchPhase, Outcome};
pub use report::{RoundEntry, RoundReport};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::action::CombatAction;
use crate::combat::{ActionResult, resolve_attack, resolve_skill};
use crate::config::GameConfig;
use crate::policy::ComputerPolicy;
use crate::state::{FighterSlot, Participant};

/// Narration shown when the fight view opens.
pub const FIGHT_STARTED: &str = "The fight has begun!";

/// Narration returned by every action once the fight is over.
pub const FIGHT_OVER: &str = "The fight is over!";

/// Narration returned when a round is requested before both fighters exist.
pub const FIGHTERS_REQUIRED: &str = "Choose both fighters before the fight";

/// A duel between a human-controlled hero and a computer-controlled enemy.
///
/// # Invariants
///
/// - Rounds are rejected (with narration) while either slot is unset
/// - Once `is_game_on()` is false, no action mutates health or stamina
/// - An ended match only returns to setup through [`Match::reset`] or
///   [`Match::start_game`]
#[derive(Debug)]
pub struct Match<R = StdRng> {
    hero: FighterSlot,
    enemy: FighterSlot,
    stamina_regen: f64,
    policy: ComputerPolicy,
    game_on: bool,
    finished: bool,
    outcome: Option<Outcome>,
    rng: R,
}

impl Match<StdRng> {
    /// Creates a match seeded from system entropy.
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a reproducible match.
    pub fn seeded(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Match<R> {
    pub fn with_rng(config: &GameConfig, rng: R) -> Self {
        Self {
            hero: FighterSlot::Unset,
            enemy: FighterSlot::Unset,
            stamina_regen: config.stamina_regen_per_turn,
            policy: ComputerPolicy::from_config(config),
            game_on: false,
            finished: false,
            outcome: None,
            rng,
        }
    }

    /// Replaces the computer's decision rule.
    pub fn with_policy(mut self, policy: ComputerPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn start_game(&mut self) {
        if self.finished {
            self.reset();
        }
        self.game_on = true;
        tracing::info!("fight started");
    }

    pub fn is_game_on(&self) -> bool {
        self.game_on
    }

    /// Stops the fight without an outcome and returns the closing narration.
    pub fn end_game(&mut self) -> String {
        if self.game_on {
            tracing::info!("fight ended manually");
        }
        self.game_on = false;
        self.finished = true;
        FIGHT_OVER.to_owned()
    }

    /// Drops both fighters and any outcome.
    pub fn reset(&mut self) {
        self.hero = FighterSlot::Unset;
        self.enemy = FighterSlot::Unset;
        self.game_on = false;
        self.finished = false;
        self.outcome = None;
    }

    pub fn set_hero(&mut self, hero: Participant) {
        tracing::debug!("hero set: {}", hero.name());
        self.hero = hero.into();
    }

    pub fn set_enemy(&mut self, enemy: Participant) {
        tracing::debug!("enemy set: {}", enemy.name());
        self.enemy = enemy.into();
    }

    pub fn hero(&self) -> Option<&Participant> {
        self.hero.get()
    }

    pub fn enemy(&self) -> Option<&Participant> {
        self.enemy.get()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn phase(&self) -> MatchPhase {
        let ready = self.hero.is_ready() && self.enemy.is_ready();
        if self.game_on && ready {
            MatchPhase::InProgress
        } else if self.finished {
            MatchPhase::Ended {
                outcome: self.outcome,
            }
        } else {
            MatchPhase::Setup
        }
    }

    pub fn attack(&mut self) -> String {
        self.play_round(CombatAction::Attack).narration()
    }

    pub fn use_skill(&mut self) -> String {
        self.play_round(CombatAction::UseSkill).narration()
    }

    pub fn skip_turn(&mut self) -> String {
        self.play_round(CombatAction::PassTurn).narration()
    }

    /// Plays one full round starting with the human's `action`.
    pub fn play_round(&mut self, action: CombatAction) -> RoundReport {
        if !self.game_on {
            return RoundReport::notice(FIGHT_OVER);
        }

        let (FighterSlot::Ready(hero), FighterSlot::Ready(enemy)) =
            (&mut self.hero, &mut self.enemy)
        else {
            tracing::warn!("round requested before both fighters were chosen");
            return RoundReport::notice(FIGHTERS_REQUIRED);
        };

        let mut report = RoundReport::default();

        let result = resolve_action(action, hero, enemy, &mut self.rng);
        report.record(hero.name(), action, result);
        report.outcome = Outcome::judge(hero, enemy);

        if report.outcome.is_none() {
            regenerate(hero, enemy, self.stamina_regen);

            let choice = self.policy.choose_action(enemy, &mut self.rng);
            let result = resolve_action(choice, enemy, hero, &mut self.rng);
            report.record(enemy.name(), choice, result);
            report.outcome = Outcome::judge(hero, enemy);

            if report.outcome.is_none() {
                regenerate(hero, enemy, self.stamina_regen);
            }
        }

        tracing::debug!(
            "round done: hero hp={} st={}, enemy hp={} st={}",
            hero.health(),
            hero.stamina(),
            enemy.health(),
            enemy.stamina()
        );

        if let Some(outcome) = report.outcome {
            self.game_on = false;
            self.finished = true;
            self.outcome = Some(outcome);
            tracing::info!("fight finished: {}", outcome);
        }

        report
    }
}

fn resolve_action<R: Rng + ?Sized>(
    action: CombatAction,
    actor: &mut Participant,
    target: &mut Participant,
    rng: &mut R,
) -> ActionResult {
    match action {
        CombatAction::Attack => resolve_attack(actor, target, rng),
        CombatAction::UseSkill => resolve_skill(actor, target),
        CombatAction::PassTurn => ActionResult::passed(),
    }
}

fn regenerate(hero: &mut Participant, enemy: &mut Participant, base: f64) {
    hero.regenerate_stamina(base);
    enemy.regenerate_stamina(base);
}
