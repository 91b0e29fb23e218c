//! Unified error types surfaced by the runtime API.
//!
//! Wraps catalog and configuration failures so clients can bubble them up
//! with consistent context, and adds the setup-flow guards enforced by the
//! session registry.
use arena_core::{CatalogError, ConfigError, ErrorSeverity, GameError};
use thiserror::Error;

use crate::session::SessionId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session {0} does not exist")]
    UnknownSession(SessionId),

    #[error("a fight is already in progress")]
    FightInProgress,

    #[error("choose a hero before choosing an enemy")]
    HeroNotChosen,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownSession(_) | Self::FightInProgress | Self::HeroNotChosen => {
                ErrorSeverity::Validation
            }
            Self::Catalog(err) => err.severity(),
            Self::Config(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSession(_) => "RUNTIME_UNKNOWN_SESSION",
            Self::FightInProgress => "RUNTIME_FIGHT_IN_PROGRESS",
            Self::HeroNotChosen => "RUNTIME_HERO_NOT_CHOSEN",
            Self::Catalog(err) => err.error_code(),
            Self::Config(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_stay_recoverable() {
        let err = RuntimeError::from(CatalogError::UnknownWeapon("spoon".into()));

        assert!(err.severity().is_recoverable());
        assert_eq!(err.error_code(), "CATALOG_UNKNOWN_WEAPON");
        assert_eq!(err.to_string(), "unknown weapon 'spoon'");
    }

    #[test]
    fn broken_config_is_fatal() {
        let err = RuntimeError::from(ConfigError::InvalidSkillChance(2.0));
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }
}
