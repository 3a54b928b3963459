//! In-memory history list rules shared by every repository.

use loadout_core::BuildResult;
use serde::{Deserialize, Serialize};

/// Maximum number of builds kept in history.
pub const HISTORY_CAP: usize = 50;

/// Ordered build history, newest first.
///
/// Identifiers are unique within the list. Adding a build whose identifier is
/// already present replaces the old entry and moves it to the front.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryList {
    entries: Vec<BuildResult>,
}

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a list from stored entries, restoring uniqueness and the cap.
    pub fn from_entries(entries: Vec<BuildResult>) -> Self {
        let mut list = Self::new();
        for build in entries.into_iter().rev() {
            list.add(build);
        }
        list
    }

    /// Puts `build` at the front, dropping any older entry with the same
    /// identifier and trimming to [`HISTORY_CAP`].
    pub fn add(&mut self, build: BuildResult) {
        self.entries.retain(|b| b.identifier != build.identifier);
        self.entries.insert(0, build);
        self.entries.truncate(HISTORY_CAP);
    }

    /// Flips the favorite flag of the entry with `identifier`.
    ///
    /// Returns false when no such entry exists.
    pub fn toggle_favorite(&mut self, identifier: &str) -> bool {
        match self.entries.iter_mut().find(|b| b.identifier == identifier) {
            Some(build) => {
                build.favorite = !build.favorite;
                true
            }
            None => false,
        }
    }

    /// Returns false when no entry had `identifier`.
    pub fn remove(&mut self, identifier: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|b| b.identifier != identifier);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, identifier: &str) -> Option<&BuildResult> {
        self.entries.iter().find(|b| b.identifier == identifier)
    }

    pub fn entries(&self) -> &[BuildResult] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<BuildResult> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
