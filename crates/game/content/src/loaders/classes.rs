//! Class template loader.

use std::path::Path;

use arena_core::ClassTemplate;

use crate::loaders::{LoadResult, read_file};

/// Loader for class templates from RON files.
///
/// The file holds a plain list of templates:
///
/// ```ron
/// [
///     (
///         name: "Warrior",
///         max_health: 60.0,
///         max_stamina: 30.0,
///         attack_modifier: 0.8,
///         stamina_modifier: 0.9,
///         armor_modifier: 1.2,
///         skill: (name: "Power Thrust", damage: 15.0, required_stamina: 5.0),
///     ),
/// ]
/// ```
pub struct ClassLoader;

impl ClassLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ClassTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ClassTemplate>> {
        let classes: Vec<ClassTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse class catalog RON: {}", e))?;

        Ok(classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_class_list() {
        let classes = ClassLoader::parse(
            r#"[
                (
                    name: "Monk",
                    max_health: 45.0,
                    max_stamina: 40.0,
                    attack_modifier: 1.1,
                    stamina_modifier: 1.5,
                    armor_modifier: 0.5,
                    skill: (name: "Palm Strike", damage: 9.0, required_stamina: 4.0),
                ),
            ]"#,
        )
        .unwrap();

        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Monk");
        assert_eq!(classes[0].skill.damage, 9.0);
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(ClassLoader::parse("[ (name: \"Monk\" ").is_err());
    }
}
