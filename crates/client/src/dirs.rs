//! Platform-specific directory utilities
//!
//! Follows platform conventions through `directories::ProjectDirs`, e.g. on
//! Linux `~/.config/loadout`, `~/.local/share/loadout` and `~/.cache/loadout`.

use std::path::PathBuf;

use directories::ProjectDirs;

const APP_NAME: &str = "loadout";
const FALLBACK_DIR: &str = "/tmp/loadout";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Default location of the optional `loadout.toml` file.
pub fn config_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DIR))
        .join("loadout.toml")
}

/// Default location of the build history file.
pub fn history_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DIR))
        .join("history.json")
}

/// Default log directory.
pub fn log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DIR))
        .join("logs")
}
