//! Data-driven content definitions and loaders.
//!
//! This crate houses the static duel content and provides loaders for the
//! bundled data files:
//! - Weapon and armor tables (JSON)
//! - Class templates (RON, with built-in fallbacks)
//! - Game configuration (TOML)
//!
//! Content is assembled into an immutable [`arena_core::Catalog`] and never
//! appears in battle state.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::builtin_classes;

#[cfg(feature = "loaders")]
pub use loaders::{ClassLoader, ConfigLoader, ContentFactory, EquipmentLoader};
