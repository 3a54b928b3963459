//! List the contents of a game catalog.

use anyhow::Result;
use clap::Parser;
use console::style;
use loadout_core::{CatalogOracle, GameDefinition, GameId, Item, ItemKind};

use super::AppContext;

/// Show roles, champions and items of a game
#[derive(Parser, Debug)]
pub struct Catalog {
    /// Game id (defaults to the configured game)
    #[arg(short, long)]
    game: Option<String>,
}

impl Catalog {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let id = GameId::new(
            self.game
                .unwrap_or_else(|| ctx.config.default_game.clone()),
        );

        let Some(game) = ctx.registry.game(&id) else {
            let known: Vec<String> = ctx
                .registry
                .games()
                .map(|game| format!("{} ({} champions)", game.id, game.entities.len()))
                .collect();
            anyhow::bail!("Unknown game '{}' (available: {})", id, known.join(", "));
        };

        print_catalog(game);
        Ok(())
    }
}

fn print_catalog(game: &GameDefinition) {
    println!("{} {}", style("Game:").bold().cyan(), game.id);

    let roles: Vec<String> = game.roles.iter().map(ToString::to_string).collect();
    println!("{} {}", style("Roles:").bold().cyan(), roles.join(", "));
    println!();

    println!("{}", style("Champions:").bold().yellow());
    for entity in &game.entities {
        let roles: Vec<String> = entity.roles.iter().map(ToString::to_string).collect();
        println!("  {:<10} {} {}", entity.id, entity.name, style(roles.join("/")).dim());
    }

    for kind in [ItemKind::Starter, ItemKind::Boots, ItemKind::Core, ItemKind::Fun] {
        println!();
        println!("{}", style(format!("{kind} items:")).bold().yellow());
        for item in game.items_of(kind) {
            println!("  {:<14} {}{}", item.id, item.name, describe_tags(item));
        }
    }
}

fn describe_tags(item: &Item) -> String {
    if item.tags.is_empty() {
        String::new()
    } else {
        format!(" {}", style(format!("[{}]", item.tags.join(", "))).dim())
    }
}
