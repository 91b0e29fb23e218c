//! Combat rules and data types for the duel arena.
//!
//! `arena-core` defines the canonical rules of a two-fighter duel: catalog
//! records (classes, weapons, armors), per-fighter battle state, the turn
//! resolver arithmetic, the computer opponent's policy and the [`Match`]
//! state machine that sequences full rounds. All battle state mutation flows
//! through [`Match`] or the [`combat`] resolver functions, and supporting
//! crates depend on the types re-exported here.
pub mod action;
pub mod arena;
pub mod catalog;
pub mod combat;
pub mod config;
pub mod error;
pub mod policy;
pub mod state;

pub use action::CombatAction;
pub use arena::{Match, MatchPhase, Outcome, RoundEntry, RoundReport};
pub use catalog::{
    Armor, Catalog, CatalogError, CatalogOracle, ClassTemplate, RecordKind, Skill, Weapon,
};
pub use combat::{ActionOutcome, ActionResult, resolve_attack, resolve_skill, round1};
pub use config::{ConfigError, GameConfig};
pub use error::{ErrorSeverity, GameError};
pub use policy::ComputerPolicy;
pub use state::{FighterSlot, Participant};
