//! Read-only game registry.
//!
//! The registry is built once from game definitions and never mutated. The
//! engine and generator only see it through [`CatalogOracle`], so adding a
//! game means adding a definition, not touching the engine.

use std::collections::{BTreeMap, HashSet};

use crate::catalog::{Entity, GameDefinition, GameId, ItemKind};
use crate::error::CatalogError;

/// Read-only access to game catalogs.
pub trait CatalogOracle: Send + Sync {
    fn game(&self, id: &GameId) -> Option<&GameDefinition>;

    /// Identifiers of every supported game, in a stable order.
    fn game_ids(&self) -> Vec<GameId>;

    fn supports(&self, id: &GameId) -> bool {
        self.game(id).is_some()
    }

    fn entity(&self, game: &GameId, entity_id: &str) -> Option<&Entity> {
        self.game(game)?.entity(entity_id)
    }
}

/// Immutable mapping from game id to its validated definition.
#[derive(Clone, Debug, Default)]
pub struct GameRegistry {
    games: BTreeMap<GameId, GameDefinition>,
}

impl GameRegistry {
    /// Validates and indexes `definitions`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] for duplicate games, items or champions,
    /// non-positive or non-finite affinities, and starter rules whose tag
    /// matches no starter item.
    pub fn new(definitions: impl IntoIterator<Item = GameDefinition>) -> Result<Self, CatalogError> {
        let mut games = BTreeMap::new();

        for definition in definitions {
            validate(&definition)?;
            if games.contains_key(&definition.id) {
                return Err(CatalogError::DuplicateGame(definition.id));
            }
            tracing::debug!(
                game = %definition.id,
                items = definition.items.len(),
                champions = definition.entities.len(),
                "registered game catalog"
            );
            games.insert(definition.id.clone(), definition);
        }

        Ok(Self { games })
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn games(&self) -> impl Iterator<Item = &GameDefinition> + '_ {
        self.games.values()
    }
}

impl CatalogOracle for GameRegistry {
    fn game(&self, id: &GameId) -> Option<&GameDefinition> {
        self.games.get(id)
    }

    fn game_ids(&self) -> Vec<GameId> {
        self.games.keys().cloned().collect()
    }
}

fn validate(definition: &GameDefinition) -> Result<(), CatalogError> {
    let game = &definition.id;

    let mut item_ids = HashSet::new();
    for item in &definition.items {
        if !item_ids.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateItem {
                game: game.clone(),
                item: item.id.clone(),
            });
        }

        let role_factors = item
            .role_affinity
            .iter()
            .map(|(role, value)| (role.to_string(), *value));
        let entity_factors = item
            .entity_affinity
            .iter()
            .map(|(entity, value)| (entity.clone(), *value));

        for (key, value) in role_factors.chain(entity_factors) {
            if !value.is_finite() || value <= 0.0 {
                return Err(CatalogError::InvalidAffinity {
                    game: game.clone(),
                    item: item.id.clone(),
                    key,
                    value,
                });
            }
        }
    }

    let mut entity_ids = HashSet::new();
    for entity in &definition.entities {
        if !entity_ids.insert(entity.id.as_str()) {
            return Err(CatalogError::DuplicateEntity {
                game: game.clone(),
                entity: entity.id.clone(),
            });
        }
    }

    for rule in &definition.starter_rules {
        let matched = definition
            .items_of(ItemKind::Starter)
            .any(|item| item.has_tag(&rule.tag));
        if !matched {
            return Err(CatalogError::UnmatchedStarterRule {
                game: game.clone(),
                role: rule.role,
                tag: rule.tag.clone(),
            });
        }
    }

    Ok(())
}
