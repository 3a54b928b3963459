//! Content factory for building registries from data directories.

use std::path::{Path, PathBuf};

use loadout_core::{GameDefinition, GameRegistry};

use crate::builtin::builtin_definitions;
use crate::loaders::{CatalogLoader, LoadResult};

/// Content factory that loads game catalogs from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// └── games/
///     ├── lol.ron
///     └── other.ron
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

    /// Load every `games/*.ron` definition, sorted by file name.
    ///
    /// A missing `games/` directory yields no definitions.
    pub fn load_games(&self) -> LoadResult<Vec<GameDefinition>> {
        let games_dir = self.data_dir.join("games");
        if !games_dir.is_dir() {
            tracing::debug!("No games directory at {}", games_dir.display());
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&games_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        paths
            .iter()
            .map(|path| {
                tracing::debug!("Loading catalog {}", path.display());
                CatalogLoader::load(path)
            })
            .collect()
    }

    /// Build a registry from the embedded catalogs plus this directory.
    ///
    /// Directory catalogs may add games but not redefine embedded ones.
    pub fn load_registry(&self) -> LoadResult<GameRegistry> {
        let mut definitions = builtin_definitions()?;
        definitions.extend(self.load_games()?);
        Ok(GameRegistry::new(definitions)?)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout_core::{CatalogOracle, GameId};

    const EXTRA: &str = r#"(
        id: "mini",
        roles: [MID],
        entities: [(id: "ahri", name: "Ahri", roles: [MID])],
        items: [(id: "ring", name: "Ring", kind: STARTER)],
    )"#;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_directory_loads_builtins_only() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ContentFactory::new(dir.path()).load_registry().unwrap();
        assert_eq!(registry.game_ids(), vec![GameId::from("lol")]);
    }

    #[test]
    fn merges_directory_catalogs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("games")).unwrap();
        std::fs::write(dir.path().join("games/mini.ron"), EXTRA).unwrap();
        std::fs::write(dir.path().join("games/notes.txt"), "ignored").unwrap();

        let registry = ContentFactory::new(dir.path()).load_registry().unwrap();
        assert!(registry.supports(&GameId::from("mini")));
        assert!(registry.supports(&GameId::from("lol")));
    }

    #[test]
    fn rejects_redefined_builtin_game() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("games")).unwrap();
        std::fs::write(
            dir.path().join("games/lol.ron"),
            EXTRA.replace("\"mini\"", "\"lol\""),
        )
        .unwrap();

        let err = ContentFactory::new(dir.path()).load_registry().unwrap_err();
        assert!(err.to_string().contains("defined more than once"));
    }
}
