//! Replay a build from its shareable code.

use anyhow::{Context, Result};
use clap::Parser;

use super::AppContext;
use super::output::{OutputFormat, print_build};

/// Rebuild the exact item list behind a build code
#[derive(Parser, Debug)]
pub struct Replay {
    /// Build code, as printed after `Code:`
    #[arg(value_name = "CODE")]
    code: String,

    /// Do not add the replayed build to history
    #[arg(long)]
    no_save: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl Replay {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let Some(build) = ctx
            .generator()
            .generate_from_identifier(&self.code)
            .context("Failed to replay build")?
        else {
            anyhow::bail!("Invalid or unsupported build code");
        };

        if !self.no_save {
            ctx.history.add(&build).context("Failed to save build")?;
        }

        print_build(&build, self.format)
    }
}
