//! Inspect and edit the build history.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use loadout_core::BuildResult;

use super::AppContext;
use super::output::{OutputFormat, print_history_line};

/// Build history commands
#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// List saved builds, newest first
    List(List),

    /// Toggle the favorite mark of a saved build
    Favorite {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Remove a saved build
    Remove {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Remove every saved build
    Clear,
}

#[derive(Parser, Debug)]
pub struct List {
    /// Only show favorites
    #[arg(long)]
    favorites: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl HistoryCommand {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let history = &ctx.history;

        match self {
            HistoryCommand::List(list) => {
                let entries = history.load().context("Failed to load history")?;
                list.print(entries)
            }
            HistoryCommand::Favorite { code } => {
                let code = code.trim();
                let entries = history.toggle_favorite(code)?;
                match entries.iter().find(|b| b.identifier == code) {
                    Some(build) if build.favorite => println!("Marked as favorite"),
                    Some(_) => println!("Removed from favorites"),
                    None => anyhow::bail!("No saved build with code {code}"),
                }
                Ok(())
            }
            HistoryCommand::Remove { code } => {
                let code = code.trim();
                let before = history.load()?.len();
                let entries = history.remove(code)?;
                if entries.len() == before {
                    anyhow::bail!("No saved build with code {code}");
                }
                println!("Removed ({} left)", entries.len());
                Ok(())
            }
            HistoryCommand::Clear => {
                history.clear()?;
                println!("History cleared");
                Ok(())
            }
        }
    }
}

impl List {
    fn print(self, entries: Vec<BuildResult>) -> Result<()> {
        let entries: Vec<BuildResult> = entries
            .into_iter()
            .filter(|b| !self.favorites || b.favorite)
            .collect();

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
            OutputFormat::Text if entries.is_empty() => println!("No saved builds"),
            OutputFormat::Text => entries.iter().for_each(print_history_line),
        }
        Ok(())
    }
}
