//! Command implementations for the `loadout` binary
//!
//! Each command is a separate module that implements its own CLI args and
//! execution logic against a shared [`AppContext`].

mod catalog;
mod generate;
mod history;
mod output;
mod preview;
mod replay;

pub use catalog::Catalog;
pub use generate::Generate;
pub use history::HistoryCommand;
pub use preview::Preview;
pub use replay::Replay;

use anyhow::{Context, Result};
use loadout_content::{ContentFactory, builtin_registry};
use loadout_core::{BuildGenerator, GameRegistry};
use loadout_history::{FileHistoryRepository, HistoryRepository};

use crate::config::ClientConfig;

/// Everything a command needs: configuration, catalogs and history.
pub struct AppContext {
    pub config: ClientConfig,
    pub registry: GameRegistry,
    pub history: Box<dyn HistoryRepository>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let registry = match &config.data_dir {
            Some(dir) => ContentFactory::new(dir)
                .load_registry()
                .with_context(|| format!("Failed to load catalogs from {}", dir.display()))?,
            None => builtin_registry().context("Embedded catalog is invalid")?,
        };
        tracing::debug!("Loaded {} game catalog(s)", registry.len());

        let history = FileHistoryRepository::new(&config.history_path).with_context(|| {
            format!("Failed to open history at {}", config.history_path.display())
        })?;

        Ok(Self {
            config,
            registry,
            history: Box::new(history),
        })
    }

    pub fn generator(&self) -> BuildGenerator<'_, GameRegistry> {
        BuildGenerator::new(&self.registry)
    }
}
