//! Terminal rendering of builds.

use anyhow::Result;
use console::style;
use loadout_core::{BuildPreview, BuildResult};

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Full JSON output
    Json,
}

pub fn print_build(build: &BuildResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_build_text(build);
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(build)?);
            Ok(())
        }
    }
}

fn print_build_text(build: &BuildResult) {
    println!("{}", style(build.title()).bold().green());
    for (slot, item) in build.items.iter().enumerate() {
        println!(
            "  {}. {} {}",
            slot + 1,
            item.name,
            style(format!("[{}]", item.kind)).dim()
        );
    }
    println!("{} {}", style("Seed:").bold().cyan(), build.seed);
    println!("{} {}", style("Code:").bold().cyan(), build.identifier);
}

/// One line per history entry: star, title and code.
pub fn print_history_line(build: &BuildResult) {
    let star = if build.favorite { "★" } else { "☆" };
    println!(
        "{} {} {} {}",
        style(star).yellow(),
        build.title(),
        style(build.created_at.format("%Y-%m-%d %H:%M")).dim(),
        build.identifier
    );
}

pub fn print_preview(preview: &BuildPreview) {
    println!("{} {}", style("Game:").bold().cyan(), preview.game_id);
    println!("{} {}", style("Champion:").bold().cyan(), preview.entity_id);
    println!("{} {}", style("Role:").bold().cyan(), preview.role);
    println!(
        "{} {}",
        style("Chaos:").bold().cyan(),
        if preview.chaos { "on" } else { "off" }
    );
}
