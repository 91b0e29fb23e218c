//! Weapon and armor table loader.

use std::path::Path;

use arena_core::{Armor, Weapon};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Equipment file structure: two arrays of records.
///
/// ```json
/// {
///   "weapons": [{ "id": 1, "name": "knife", "min_damage": 1.0, "max_damage": 3.0, "stamina_per_hit": 1.0 }],
///   "armors":  [{ "id": 1, "name": "t-shirt", "defence": 0.0, "stamina_per_turn": 0.0 }]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentTables {
    pub weapons: Vec<Weapon>,
    pub armors: Vec<Armor>,
}

/// Loader for equipment tables from JSON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    pub fn load(path: &Path) -> LoadResult<EquipmentTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EquipmentTables> {
        let tables: EquipmentTables = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment JSON: {}", e))?;

        Ok(tables)
    }
}
