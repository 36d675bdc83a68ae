//! Mutating commands.
//!
//! The container store lives in memory, so changes last for the duration of
//! the command. Each command prints the resolved state afterwards.

use anyhow::Result;
use clap::Parser;
use satchel_runtime::RuntimeConfig;

use super::{open, parse_form, print_diagnostics, print_flag, print_form};

/// Insert a stack, optionally owned
#[derive(Parser)]
pub struct Insert {
    #[arg(value_name = "CONTAINER")]
    container: String,

    #[arg(value_name = "ITEM")]
    item: String,

    /// Number of units to insert
    #[arg(value_name = "COUNT", allow_hyphen_values = true)]
    count: i32,

    /// Actor or faction to own the new stack
    #[arg(short, long, value_name = "OWNER")]
    owner: Option<String>,
}

impl Insert {
    pub fn execute(self, config: RuntimeConfig) -> Result<()> {
        let (session, diagnostics) = open(config)?;
        let catalog = session.catalog();
        let container = parse_form(catalog, &self.container)?;
        let item = parse_form(catalog, &self.item)?;
        let owner = match &self.owner {
            Some(owner) => parse_form(catalog, owner)?,
            None => None,
        };

        let functions = session.functions();
        let stored = functions.add_form_with_owner(container, item, self.count, owner);
        let actor = functions.get_form_actor_owner(container, item);
        let faction = functions.get_form_faction_owner(container, item);

        print_diagnostics(&diagnostics);
        print_flag("Stored:", stored);
        print_form("Actor owner:", actor);
        print_form("Faction owner:", faction);
        Ok(())
    }
}

/// Rewrite the owner of an item's existing ownership slots
#[derive(Parser)]
pub struct SetOwner {
    #[arg(value_name = "CONTAINER")]
    container: String,

    #[arg(value_name = "ITEM")]
    item: String,

    /// New owner
    #[arg(value_name = "OWNER")]
    owner: String,

    /// Treat the owner as a faction rather than an actor
    #[arg(short, long)]
    faction: bool,
}

impl SetOwner {
    pub fn execute(self, config: RuntimeConfig) -> Result<()> {
        let (session, diagnostics) = open(config)?;
        let catalog = session.catalog();
        let container = parse_form(catalog, &self.container)?;
        let item = parse_form(catalog, &self.item)?;
        let owner = parse_form(catalog, &self.owner)?;

        let functions = session.functions();
        let changed = if self.faction {
            functions.set_form_faction_owner(container, item, owner)
        } else {
            functions.set_form_actor_owner(container, item, owner)
        };
        let stolen = functions.is_form_stolen(container, item);

        print_diagnostics(&diagnostics);
        print_flag("Changed:", changed);
        print_flag("Stolen:", stolen);
        Ok(())
    }
}
