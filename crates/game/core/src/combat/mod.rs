//! Combat resolution system.
//!
//! This module provides the functions that resolve one fighter acting on the
//! other. Randomness is injected through [`rand::Rng`]; given the same
//! generator state the resolution is deterministic.
//!
//! # Core Functions
//!
//! - `resolve_attack`: Weapon swing (stamina check + roll + armor mitigation)
//! - `resolve_skill`: One-shot class skill (unmitigated flat damage)
//! - `final_damage` and friends: the damage arithmetic used by `resolve_attack`
//! - `round1`: one-decimal rounding applied to every surfaced value

pub mod damage;
pub mod result;
pub mod skill;

pub use damage::{attacking_damage, final_damage, mitigation, roll_weapon_damage, round1};
pub use result::{ActionOutcome, ActionResult, resolve_attack};
pub use skill::resolve_skill;
