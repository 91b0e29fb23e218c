//! Catalog lookup and validation errors.

use crate::error::{ErrorSeverity, GameError};

/// Which catalog collection a record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RecordKind {
    Class,
    Weapon,
    Armor,
}

/// Errors that occur when building or querying a [`Catalog`](super::Catalog).
///
/// Unknown names are validation errors: the caller asked for something the
/// catalog does not carry and should re-prompt. Invalid, duplicated or missing
/// records mean the content itself is broken and are fatal at startup.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown class '{0}'")]
    UnknownClass(String),

    #[error("unknown weapon '{0}'")]
    UnknownWeapon(String),

    #[error("unknown armor '{0}'")]
    UnknownArmor(String),

    #[error("{kind} '{name}' has invalid {field} ({value})")]
    InvalidRecord {
        kind: RecordKind,
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("{0} record has an empty name")]
    EmptyName(RecordKind),

    #[error("{kind} '{name}' is defined more than once")]
    DuplicateName { kind: RecordKind, name: String },

    #[error("catalog has no {0} records")]
    EmptyCollection(RecordKind),
}

impl CatalogError {
    pub(crate) fn invalid(kind: RecordKind, name: &str, field: &'static str, value: f64) -> Self {
        Self::InvalidRecord {
            kind,
            name: name.to_owned(),
            field,
            value,
        }
    }
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        use CatalogError::*;
        match self {
            UnknownClass(_) | UnknownWeapon(_) | UnknownArmor(_) => ErrorSeverity::Validation,
            InvalidRecord { .. }
            | EmptyName(_)
            | DuplicateName { .. }
            | EmptyCollection(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            UnknownClass(_) => "CATALOG_UNKNOWN_CLASS",
            UnknownWeapon(_) => "CATALOG_UNKNOWN_WEAPON",
            UnknownArmor(_) => "CATALOG_UNKNOWN_ARMOR",
            InvalidRecord { .. } => "CATALOG_INVALID_RECORD",
            EmptyName(_) => "CATALOG_EMPTY_NAME",
            DuplicateName { .. } => "CATALOG_DUPLICATE_NAME",
            EmptyCollection(_) => "CATALOG_EMPTY_COLLECTION",
        }
    }
}
