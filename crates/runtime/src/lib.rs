//! Session orchestration for duel matches.
//!
//! This crate replaces a process-wide match with a registry of independent
//! sessions. Consumers open a session, walk it through hero and enemy setup,
//! then drive rounds and read serializable snapshots for display.
//!
//! Modules are organized by responsibility:
//! - [`registry`] hosts the session map and setup-flow guards
//! - [`snapshot`] exposes the read models clients render
//! - [`config`] reads process settings from the environment
pub mod config;
pub mod error;
pub mod registry;
pub mod session;
pub mod snapshot;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use registry::{FighterSpec, SessionRegistry};
pub use session::SessionId;
pub use snapshot::{CatalogListing, FighterSnapshot, MatchSnapshot};
