//! Repository contract for build history.

use loadout_core::BuildResult;

use crate::error::Result;

/// Repository for the persisted build history.
///
/// Every mutating operation returns the list as it stands afterwards, newest
/// first, so callers can render it without a second load.
pub trait HistoryRepository: Send + Sync {
    /// Load the whole history, newest first.
    fn load(&self) -> Result<Vec<BuildResult>>;

    /// Add a build, replacing any entry with the same identifier.
    fn add(&self, build: &BuildResult) -> Result<Vec<BuildResult>>;

    /// Flip the favorite flag of the entry with `identifier`.
    ///
    /// Unknown identifiers leave the list unchanged.
    fn toggle_favorite(&self, identifier: &str) -> Result<Vec<BuildResult>>;

    /// Remove the entry with `identifier`, if present.
    fn remove(&self, identifier: &str) -> Result<Vec<BuildResult>>;

    /// Remove every entry.
    fn clear(&self) -> Result<Vec<BuildResult>>;

    /// Find a single entry by identifier.
    fn get(&self, identifier: &str) -> Result<Option<BuildResult>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|build| build.identifier == identifier))
    }
}
