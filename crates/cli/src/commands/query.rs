//! Read-only queries.

use anyhow::Result;
use clap::Parser;
use console::style;
use satchel_runtime::RuntimeConfig;

use super::{open, parse_form, print_diagnostics, print_flag, print_form};

/// Resolve the owner of an item in a container
#[derive(Parser)]
pub struct Owner {
    /// Container form id
    #[arg(value_name = "CONTAINER")]
    container: String,

    /// Item reference (editor id, Plugin|0xLOCAL, or 0x form id)
    #[arg(value_name = "ITEM")]
    item: String,
}

impl Owner {
    pub fn execute(self, config: RuntimeConfig) -> Result<()> {
        let (session, diagnostics) = open(config)?;
        let container = parse_form(session.catalog(), &self.container)?;
        let item = parse_form(session.catalog(), &self.item)?;

        let functions = session.functions();
        let actor = functions.get_form_actor_owner(container, item);
        let faction = functions.get_form_faction_owner(container, item);

        print_diagnostics(&diagnostics);
        print_form("Actor owner:", actor);
        print_form("Faction owner:", faction);
        Ok(())
    }
}

/// Check whether an item in a container is stolen
#[derive(Parser)]
pub struct Stolen {
    #[arg(value_name = "CONTAINER")]
    container: String,

    #[arg(value_name = "ITEM")]
    item: String,
}

impl Stolen {
    pub fn execute(self, config: RuntimeConfig) -> Result<()> {
        let (session, diagnostics) = open(config)?;
        let container = parse_form(session.catalog(), &self.container)?;
        let item = parse_form(session.catalog(), &self.item)?;

        let stolen = session.functions().is_form_stolen(container, item);
        print_diagnostics(&diagnostics);
        print_flag("Stolen:", stolen);
        Ok(())
    }
}

/// Resolve the effective enchantment of an item in a container
#[derive(Parser)]
pub struct Enchantment {
    #[arg(value_name = "CONTAINER")]
    container: String,

    #[arg(value_name = "ITEM")]
    item: String,
}

impl Enchantment {
    pub fn execute(self, config: RuntimeConfig) -> Result<()> {
        let (session, diagnostics) = open(config)?;
        let container = parse_form(session.catalog(), &self.container)?;
        let item = parse_form(session.catalog(), &self.item)?;

        let enchantment = session.functions().get_form_enchantment(container, item);
        print_diagnostics(&diagnostics);
        print_form("Enchantment:", enchantment);
        Ok(())
    }
}

/// Count items whose effective enchantment carries a keyword
#[derive(Parser)]
pub struct CountKeyword {
    #[arg(value_name = "CONTAINER")]
    container: String,

    /// Magic effect keyword (e.g. MagicDamageFire)
    #[arg(value_name = "KEYWORD")]
    keyword: String,
}

impl CountKeyword {
    pub fn execute(self, config: RuntimeConfig) -> Result<()> {
        let (session, diagnostics) = open(config)?;
        let container = parse_form(session.catalog(), &self.container)?;
        let keyword = parse_form(session.catalog(), &self.keyword)?;

        let count = session
            .functions()
            .get_num_enchanted_forms_with_keyword(container, keyword);
        print_diagnostics(&diagnostics);
        println!("{} {}", style("Enchanted items:").bold().cyan(), count);
        Ok(())
    }
}

/// Total gold value of an item for the acting player
#[derive(Parser)]
pub struct Value {
    #[arg(value_name = "ITEM")]
    item: String,
}

impl Value {
    pub fn execute(self, config: RuntimeConfig) -> Result<()> {
        let (session, diagnostics) = open(config)?;
        let item = parse_form(session.catalog(), &self.item)?;

        let value = session.functions().get_total_gold_value(item);
        print_diagnostics(&diagnostics);
        println!("{} {}", style("Gold value:").bold().cyan(), value);
        Ok(())
    }
}

/// Check whether an item may be stored in a container
#[derive(Parser)]
pub struct Storable {
    #[arg(value_name = "ITEM")]
    item: String,
}

impl Storable {
    pub fn execute(self, config: RuntimeConfig) -> Result<()> {
        let (session, diagnostics) = open(config)?;
        let item = parse_form(session.catalog(), &self.item)?;

        let storable = session.functions().is_form_storable(item);
        print_diagnostics(&diagnostics);
        print_flag("Storable:", storable);
        Ok(())
    }
}
