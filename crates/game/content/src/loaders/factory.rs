//! Content factory for building the catalog from data files.

use std::path::{Path, PathBuf};

use arena_core::{Catalog, ClassTemplate, GameConfig};

use crate::builtin::builtin_classes;
use crate::loaders::{ClassLoader, ConfigLoader, EquipmentLoader, LoadResult};

/// Content factory that loads all duel content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional, defaults otherwise)
/// ├── classes.ron      (optional, built-in classes otherwise)
/// └── equipment.json   (required)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data directory bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load game configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!("no {} found, using default config", path.display());
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load class templates from `classes.ron`, or the built-in set if absent.
    pub fn load_classes(&self) -> LoadResult<Vec<ClassTemplate>> {
        let path = self.data_dir.join("classes.ron");
        if !path.exists() {
            tracing::debug!("no {} found, using built-in classes", path.display());
            return Ok(builtin_classes());
        }
        ClassLoader::load(&path)
    }

    /// Load and validate the full catalog.
    ///
    /// Fails without a partial result if any file is unreadable or any record
    /// is invalid.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let classes = self.load_classes()?;
        let equipment = EquipmentLoader::load(&self.data_dir.join("equipment.json"))?;

        let catalog = Catalog::new(classes, equipment.weapons, equipment.armors)
            .map_err(|e| anyhow::anyhow!("Invalid catalog in {}: {}", self.data_dir.display(), e))?;

        tracing::info!(
            "catalog loaded: {} classes, {} weapons, {} armors",
            catalog.classes().len(),
            catalog.weapons().len(),
            catalog.armors().len()
        );

        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
