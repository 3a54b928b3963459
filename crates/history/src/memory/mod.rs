//! In-memory HistoryRepository implementation for tests and local runs.

use std::sync::RwLock;

use loadout_core::BuildResult;

use crate::error::{HistoryError, Result};
use crate::list::HistoryList;
use crate::traits::HistoryRepository;

/// In-memory implementation of HistoryRepository.
pub struct InMemoryHistoryRepository {
    list: RwLock<HistoryList>,
}

impl InMemoryHistoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            list: RwLock::new(HistoryList::new()),
        }
    }

    /// Create with existing entries, newest first.
    pub fn with_entries(entries: Vec<BuildResult>) -> Self {
        Self {
            list: RwLock::new(HistoryList::from_entries(entries)),
        }
    }

    fn update(&self, f: impl FnOnce(&mut HistoryList)) -> Result<Vec<BuildResult>> {
        let mut list = self.list.write().map_err(|_| HistoryError::LockPoisoned)?;
        f(&mut list);
        Ok(list.entries().to_vec())
    }
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    fn load(&self) -> Result<Vec<BuildResult>> {
        let list = self.list.read().map_err(|_| HistoryError::LockPoisoned)?;
        Ok(list.entries().to_vec())
    }

    fn add(&self, build: &BuildResult) -> Result<Vec<BuildResult>> {
        self.update(|list| list.add(build.clone()))
    }

    fn toggle_favorite(&self, identifier: &str) -> Result<Vec<BuildResult>> {
        self.update(|list| {
            list.toggle_favorite(identifier);
        })
    }

    fn remove(&self, identifier: &str) -> Result<Vec<BuildResult>> {
        self.update(|list| {
            list.remove(identifier);
        })
    }

    fn clear(&self) -> Result<Vec<BuildResult>> {
        self.update(HistoryList::clear)
    }
}
