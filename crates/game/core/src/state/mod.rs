//! Mutable battle state of the two fighters.
//!
//! This module owns the per-fighter state ([`Participant`]) and the slot type
//! the match uses to hold a fighter that may not have been chosen yet.
//! Participants are mutated exclusively by the combat resolver and the match.
mod participant;
mod slot;

pub use participant::Participant;
pub use slot::FighterSlot;
