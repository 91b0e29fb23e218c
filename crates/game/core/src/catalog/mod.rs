//! Static content consulted while setting up a match.
//!
//! The catalog is an immutable value: it is assembled once (typically by the
//! content loaders), validated as a whole, and then shared behind an
//! [`Arc`]. Fighters hold `Arc` handles to the records they were built from,
//! so a catalog entry outlives any match that references it.

mod class;
mod equipment;
mod error;

use std::sync::Arc;

pub use class::{ClassTemplate, Skill};
pub use equipment::{Armor, Weapon};
pub use error::{CatalogError, RecordKind};

/// Read interface over class, weapon and armor tables.
///
/// Name enumeration preserves load order so that setup forms list records the
/// same way every time.
pub trait CatalogOracle: Send + Sync {
    fn class(&self, name: &str) -> Option<Arc<ClassTemplate>>;

    fn weapon(&self, name: &str) -> Option<Arc<Weapon>>;

    fn armor(&self, name: &str) -> Option<Arc<Armor>>;

    fn class_names(&self) -> Vec<&str>;

    fn weapon_names(&self) -> Vec<&str>;

    fn armor_names(&self) -> Vec<&str>;

    fn require_class(&self, name: &str) -> Result<Arc<ClassTemplate>, CatalogError> {
        self.class(name)
            .ok_or_else(|| CatalogError::UnknownClass(name.to_owned()))
    }

    fn require_weapon(&self, name: &str) -> Result<Arc<Weapon>, CatalogError> {
        self.weapon(name)
            .ok_or_else(|| CatalogError::UnknownWeapon(name.to_owned()))
    }

    fn require_armor(&self, name: &str) -> Result<Arc<Armor>, CatalogError> {
        self.armor(name)
            .ok_or_else(|| CatalogError::UnknownArmor(name.to_owned()))
    }
}

/// Validated, immutable catalog of every record a fighter can be built from.
#[derive(Clone, Debug)]
pub struct Catalog {
    classes: Vec<Arc<ClassTemplate>>,
    weapons: Vec<Arc<Weapon>>,
    armors: Vec<Arc<Armor>>,
}

impl Catalog {
    /// Builds a catalog, rejecting invalid records and duplicated names.
    ///
    /// Every collection must hold at least one record, otherwise no fighter
    /// could be built from it.
    pub fn new(
        classes: Vec<ClassTemplate>,
        weapons: Vec<Weapon>,
        armors: Vec<Armor>,
    ) -> Result<Self, CatalogError> {
        for class in &classes {
            class.validate()?;
        }
        for weapon in &weapons {
            weapon.validate()?;
        }
        for armor in &armors {
            armor.validate()?;
        }

        ensure_present(RecordKind::Class, classes.len())?;
        ensure_present(RecordKind::Weapon, weapons.len())?;
        ensure_present(RecordKind::Armor, armors.len())?;

        ensure_unique(RecordKind::Class, classes.iter().map(|c| c.name.as_str()))?;
        ensure_unique(RecordKind::Weapon, weapons.iter().map(|w| w.name.as_str()))?;
        ensure_unique(RecordKind::Armor, armors.iter().map(|a| a.name.as_str()))?;

        Ok(Self {
            classes: classes.into_iter().map(Arc::new).collect(),
            weapons: weapons.into_iter().map(Arc::new).collect(),
            armors: armors.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn classes(&self) -> &[Arc<ClassTemplate>] {
        &self.classes
    }

    pub fn weapons(&self) -> &[Arc<Weapon>] {
        &self.weapons
    }

    pub fn armors(&self) -> &[Arc<Armor>] {
        &self.armors
    }
}

impl CatalogOracle for Catalog {
    fn class(&self, name: &str) -> Option<Arc<ClassTemplate>> {
        self.classes.iter().find(|c| c.name == name).cloned()
    }

    fn weapon(&self, name: &str) -> Option<Arc<Weapon>> {
        self.weapons.iter().find(|w| w.name == name).cloned()
    }

    fn armor(&self, name: &str) -> Option<Arc<Armor>> {
        self.armors.iter().find(|a| a.name == name).cloned()
    }

    fn class_names(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.name.as_str()).collect()
    }

    fn weapon_names(&self) -> Vec<&str> {
        self.weapons.iter().map(|w| w.name.as_str()).collect()
    }

    fn armor_names(&self) -> Vec<&str> {
        self.armors.iter().map(|a| a.name.as_str()).collect()
    }
}

fn ensure_present(kind: RecordKind, len: usize) -> Result<(), CatalogError> {
    match len {
        0 => Err(CatalogError::EmptyCollection(kind)),
        _ => Ok(()),
    }
}

fn ensure_unique<'a>(
    kind: RecordKind,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CatalogError::DuplicateName {
                kind,
                name: name.to_owned(),
            });
        }
    }
    Ok(())
}
