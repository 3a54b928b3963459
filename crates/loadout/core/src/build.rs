//! Request and result types for build generation.

use arrayvec::ArrayVec;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{GameId, Item, Role};
use crate::engine::MAX_SLOTS;

/// Ordered item slots of a build; never longer than [`MAX_SLOTS`].
pub type ItemSlots = ArrayVec<Item, MAX_SLOTS>;

/// Parameters of a generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildInput {
    pub game_id: GameId,
    pub entity_id: String,
    pub role: Role,
    pub chaos: bool,
    /// Explicit seed. Blank or missing seeds are replaced by a fresh one.
    pub seed: Option<String>,
}

impl BuildInput {
    pub fn new(game_id: impl Into<GameId>, entity_id: impl Into<String>, role: Role) -> Self {
        Self {
            game_id: game_id.into(),
            entity_id: entity_id.into(),
            role,
            chaos: false,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_chaos(mut self, chaos: bool) -> Self {
        self.chaos = chaos;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }
}

/// A generated build.
///
/// Immutable once produced: replaying an identifier re-derives a new result
/// rather than patching a stored one. `favorite` belongs to the history store
/// and is always `false` here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildResult {
    pub version: u32,
    pub game_id: GameId,
    pub seed: String,
    pub identifier: String,
    pub entity_id: String,
    pub entity_name: String,
    pub role: Role,
    pub chaos: bool,
    pub items: ItemSlots,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub favorite: bool,
}

impl BuildResult {
    pub fn item_ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }

    /// One-line label, e.g. `Ahri — MID (Chaos)`.
    pub fn title(&self) -> String {
        let chaos = if self.chaos { " (Chaos)" } else { "" };
        format!("{} — {}{}", self.entity_name, self.role, chaos)
    }
}

/// What an identifier describes, read without generating the build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildPreview {
    pub game_id: GameId,
    pub entity_id: String,
    pub role: Role,
    pub chaos: bool,
}
