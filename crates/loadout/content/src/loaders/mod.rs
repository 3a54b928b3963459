//! Content loaders for reading game catalogs from files.
//!
//! This module provides loaders that convert RON files into game definitions
//! ready for `loadout_core::GameRegistry`.

pub mod catalog;
pub mod factory;

pub use catalog::CatalogLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
