//! Show what a build code describes without generating it.

use anyhow::Result;
use clap::Parser;

use super::AppContext;
use super::output::print_preview;

/// Decode a build code and show its parameters
#[derive(Parser, Debug)]
pub struct Preview {
    /// Build code
    #[arg(value_name = "CODE")]
    code: String,
}

impl Preview {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        match ctx.generator().preview_from_identifier(&self.code) {
            Some(preview) => {
                print_preview(&preview);
                Ok(())
            }
            None => anyhow::bail!("Invalid or unsupported build code"),
        }
    }
}
