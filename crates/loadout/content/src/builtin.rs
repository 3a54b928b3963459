//! Catalogs compiled into the binary.

use loadout_core::{CatalogError, GameDefinition, GameRegistry};

/// Identifier of the League of Legends catalog.
pub const LOL: &str = "lol";

const LOL_RON: &str = include_str!("../data/games/lol.ron");

/// Parses every embedded game definition.
pub fn builtin_definitions() -> Result<Vec<GameDefinition>, ron::error::SpannedError> {
    let lol: GameDefinition = ron::from_str(LOL_RON)?;
    Ok(vec![lol])
}

/// Registry containing only the embedded catalogs.
pub fn builtin_registry() -> Result<GameRegistry, CatalogError> {
    let definitions = builtin_definitions()
        .map_err(|e| CatalogError::Malformed(format!("embedded {LOL} catalog: {e}")))?;
    GameRegistry::new(definitions)
}
