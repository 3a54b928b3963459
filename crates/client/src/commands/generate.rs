//! Generate a new build.

use anyhow::{Context, Result};
use clap::Parser;
use loadout_core::{BuildInput, Role};

use super::AppContext;
use super::output::{OutputFormat, print_build};

/// Generate a random build for a champion and role
#[derive(Parser, Debug)]
pub struct Generate {
    /// Champion id (e.g. ahri)
    #[arg(short, long)]
    champion: String,

    /// Role: TOP, JUNGLE, MID, ADC or SUPPORT (case-insensitive)
    #[arg(short, long)]
    role: Role,

    /// Game id (defaults to the configured game)
    #[arg(short, long)]
    game: Option<String>,

    /// Favor fun items
    #[arg(long)]
    chaos: bool,

    /// Seed text; a fresh one is generated when omitted
    #[arg(short, long)]
    seed: Option<String>,

    /// Add the build to history
    #[arg(long)]
    save: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl Generate {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let game = self
            .game
            .unwrap_or_else(|| ctx.config.default_game.clone());

        let mut input = BuildInput::new(game.as_str(), self.champion, self.role)
            .with_chaos(self.chaos);
        if let Some(seed) = self.seed {
            input = input.with_seed(seed);
        }

        let build = ctx
            .generator()
            .generate(&input)
            .context("Failed to generate build")?;

        if self.save {
            ctx.history.add(&build).context("Failed to save build")?;
            tracing::info!("Saved build {} to history", build.identifier);
        }

        print_build(&build, self.format)
    }
}
