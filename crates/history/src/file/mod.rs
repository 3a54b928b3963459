//! File-based HistoryRepository implementation.
//!
//! The whole history is one pretty-printed JSON array, rewritten on every
//! mutation through a temp file and an atomic rename.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use loadout_core::BuildResult;

use crate::error::{HistoryError, Result};
use crate::list::HistoryList;
use crate::traits::HistoryRepository;

/// File-based implementation of HistoryRepository.
///
/// A missing, unreadable or corrupted file loads as an empty history; the next
/// mutation overwrites it.
pub struct FileHistoryRepository {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileHistoryRepository {
    /// Create a repository backed by `path`, creating parent directories.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_list(&self) -> HistoryList {
        if !self.path.exists() {
            return HistoryList::new();
        }

        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Ignoring unreadable history {}: {}", self.path.display(), e);
                return HistoryList::new();
            }
        };

        match serde_json::from_str::<Vec<BuildResult>>(&json) {
            Ok(entries) => HistoryList::from_entries(entries),
            Err(e) => {
                tracing::warn!("Ignoring corrupted history {}: {}", self.path.display(), e);
                HistoryList::new()
            }
        }
    }

    fn write_list(&self, list: &HistoryList) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let json =
            serde_json::to_string_pretty(list).map_err(|e| HistoryError::Json(e.to_string()))?;
        if let Err(e) = fs::write(&temp_path, json).and_then(|()| fs::rename(&temp_path, &self.path))
        {
            // The temp file is absent when the write itself failed.
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::debug!("Saved {} history entries to {}", list.len(), self.path.display());
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut HistoryList)) -> Result<Vec<BuildResult>> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| HistoryError::LockPoisoned)?;

        let mut list = self.read_list();
        f(&mut list);
        self.write_list(&list)?;
        Ok(list.into_entries())
    }
}

impl HistoryRepository for FileHistoryRepository {
    fn load(&self) -> Result<Vec<BuildResult>> {
        Ok(self.read_list().into_entries())
    }

    fn add(&self, build: &BuildResult) -> Result<Vec<BuildResult>> {
        self.update(|list| list.add(build.clone()))
    }

    fn toggle_favorite(&self, identifier: &str) -> Result<Vec<BuildResult>> {
        self.update(|list| {
            if !list.toggle_favorite(identifier) {
                tracing::debug!("No history entry {:?} to toggle", identifier);
            }
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
