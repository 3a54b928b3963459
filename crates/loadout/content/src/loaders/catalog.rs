//! Game catalog loader.

use std::path::Path;

use loadout_core::GameDefinition;

use crate::loaders::{LoadResult, read_file};

/// Loader for a single game definition stored as RON.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a game definition from a RON file.
    ///
    /// The file holds one `GameDefinition`; see `data/games/lol.ron` for the
    /// layout. Validation happens when the definition enters a registry.
    pub fn load(path: &Path) -> LoadResult<GameDefinition> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON {}: {}", path.display(), e))
    }

    /// Parse a game definition from RON text.
    pub fn parse(content: &str) -> LoadResult<GameDefinition> {
        let definition: GameDefinition = ron::from_str(content)?;
        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout_core::{ItemKind, Role};

    #[test]
    fn parses_minimal_definition() {
        let ron = r#"(
            id: "mini",
            roles: [MID],
            entities: [(id: "ahri", name: "Ahri")],
            items: [
                (id: "ring", name: "Ring", kind: STARTER, role_affinity: { MID: 1.5 }),
                (id: "core", name: "Core", kind: CORE, entity_affinity: { "ahri": 2.0 }),
            ],
        )"#;

        let game = CatalogLoader::parse(ron).unwrap();
        assert_eq!(game.id.as_str(), "mini");
        assert!(game.starter_rules.is_empty());
        assert!(game.entities[0].roles.is_empty());
        assert_eq!(game.items[0].kind, ItemKind::Starter);
        assert_eq!(game.items[0].role_factor(Role::Mid), 1.5);
        assert_eq!(game.items[1].entity_factor("ahri"), 2.0);
    }

    #[test]
    fn reports_path_on_missing_file() {
        let err = CatalogLoader::load(Path::new("/nonexistent/loadout/game.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/loadout/game.ron"));
    }
}
