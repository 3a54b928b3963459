//! `loadout` command-line client.
//!
//! Composition root that assembles configuration, logging, the game registry
//! (embedded catalogs plus an optional data directory) and the file-backed
//! history, then runs one subcommand.
//!
//! # Examples
//!
//! ```bash
//! loadout generate --champion ahri --role mid --seed abc
//! loadout replay eyJ2IjoxLCJnIjoibG9sIiwicyI6ImFiYyIsImMiOiJhaHJpIiwiciI6Ik1JRCIsImNoIjowfQ
//! loadout history list --favorites
//! ```

mod commands;
mod config;
mod dirs;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{AppContext, Catalog, Generate, HistoryCommand, Preview, Replay};
use config::ClientConfig;

/// Random item builds you can share and replay
#[derive(Parser)]
#[command(name = "loadout")]
#[command(about = "Random item builds you can share and replay", long_about = None)]
#[command(version)]
struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate a new build
    Generate(Generate),

    /// Replay a build from its code
    Replay(Replay),

    /// Show what a build code describes
    Preview(Preview),

    /// List roles, champions and items of a game
    Catalog(Catalog),

    /// Saved builds
    #[command(subcommand)]
    History(HistoryCommand),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ClientConfig::load()?;

    logging::setup_logging(&config.log_dir, cli.verbose)?;
    tracing::debug!("Configuration: {:?}", config);

    let ctx = AppContext::new(config)?;

    match cli.command {
        Command::Generate(cmd) => cmd.execute(&ctx),
        Command::Replay(cmd) => cmd.execute(&ctx),
        Command::Preview(cmd) => cmd.execute(&ctx),
        Command::Catalog(cmd) => cmd.execute(&ctx),
        Command::History(cmd) => cmd.execute(&ctx),
    }
}
