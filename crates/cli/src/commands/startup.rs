//! Data-loaded startup pass.

use anyhow::Result;
use clap::Parser;
use console::style;
use satchel_runtime::{Message, RuntimeConfig};

use super::{open, print_diagnostics, print_form};

/// Run the data-loaded startup pass and report what it found
#[derive(Parser)]
pub struct Startup {
    /// Mod object keys to look up afterwards (e.g. FenceLedger, 1|StartingGear)
    #[arg(value_name = "KEY")]
    keys: Vec<String>,
}

impl Startup {
    pub fn execute(self, config: RuntimeConfig) -> Result<()> {
        let (mut session, diagnostics) = open(config)?;
        session.on_message(Message::DataLoaded)?;
        print_diagnostics(&diagnostics);

        println!("{}", style("=== Settings ===").bold().green());
        println!(
            "{} {}",
            style("Folder:").bold().cyan(),
            session.config().resolved_settings_dir().display()
        );
        if let Some(report) = session.settings_report() {
            for path in &report.accepted {
                println!("  {} {}", style("accepted").green(), path.display());
            }
            for path in &report.skipped {
                println!("  {} {}", style("skipped").yellow(), path.display());
            }
        }

        println!("{}", style("=== Mod Objects ===").bold().green());
        let Some(mod_objects) = session.mod_objects() else {
            println!("  {}", style("none defined").dim());
            return Ok(());
        };
        println!("{} {}", style("Preloaded:").bold().cyan(), mod_objects.len());
        for key in &self.keys {
            match mod_objects.get(key) {
                Ok(form) => print_form(&format!("  {}:", key), Some(form)),
                Err(err) => println!("  {} {}", style("error").red().bold(), err),
            }
        }
        Ok(())
    }
}
