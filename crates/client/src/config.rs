//! Client configuration structures and loaders.
//!
//! Values are layered, later layers winning:
//! 1. built-in defaults (platform directories, game `lol`)
//! 2. a TOML file: `$LOADOUT_CONFIG`, or `loadout.toml` in the config directory
//! 3. environment variables
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::dirs;

/// Configuration required to run the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Game used when a command does not name one.
    pub default_game: String,
    /// JSON file holding the build history.
    pub history_path: PathBuf,
    /// Extra catalogs under `<data_dir>/games/*.ron`. Built-ins only when unset.
    pub data_dir: Option<PathBuf>,
    pub log_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_game: loadout_content::LOL.to_string(),
            history_path: dirs::history_file(),
            data_dir: None,
            log_dir: dirs::log_dir(),
        }
    }
}

/// One layer of optional overrides, as read from a file or the environment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub default_game: Option<String>,
    pub history_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl ConfigLayer {
    /// Parse a layer from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration file")
    }

    /// Read a layer from process environment variables.
    ///
    /// Environment variables:
    /// - `LOADOUT_DEFAULT_GAME` - Game used when none is given (default: lol)
    /// - `LOADOUT_HISTORY_PATH` - History file (default: platform data dir)
    /// - `LOADOUT_DATA_DIR` - Directory with extra `games/*.ron` catalogs
    /// - `LOADOUT_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        Self {
            default_game: read_env("LOADOUT_DEFAULT_GAME"),
            history_path: read_env("LOADOUT_HISTORY_PATH"),
            data_dir: read_env("LOADOUT_DATA_DIR"),
            log_dir: read_env("LOADOUT_LOG_DIR"),
        }
    }
}

impl ClientConfig {
    /// Build the configuration from defaults, the config file and the environment.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(layer) = read_config_file()? {
            config.apply(layer);
        }
        config.apply(ConfigLayer::from_env());

        Ok(config)
    }

    /// Overwrite every field the layer sets.
    pub fn apply(&mut self, layer: ConfigLayer) {
        if let Some(game) = layer.default_game.filter(|g| !g.trim().is_empty()) {
            self.default_game = game.trim().to_string();
        }
        if let Some(path) = layer.history_path {
            self.history_path = path;
        }
        if let Some(dir) = layer.data_dir {
            self.data_dir = Some(dir);
        }
        if let Some(dir) = layer.log_dir {
            self.log_dir = dir;
        }
    }
}

/// An explicit `LOADOUT_CONFIG` must exist; the default file is optional.
fn read_config_file() -> Result<Option<ConfigLayer>> {
    match env::var_os("LOADOUT_CONFIG") {
        Some(path) => load_layer(Path::new(&path)).map(Some),
        None => {
            let path = dirs::config_file();
            if path.exists() {
                load_layer(&path).map(Some)
            } else {
                Ok(None)
            }
        }
    }
}

fn load_layer(path: &Path) -> Result<ConfigLayer> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    ConfigLayer::from_toml(&text).with_context(|| format!("In {}", path.display()))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
