//! Subcommands and the helpers they share.

mod functions;
mod mutate;
mod query;
mod startup;

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use console::style;
use satchel_content::resolve_form;
use satchel_core::{FormId, SnapshotCatalogOracle};
use satchel_runtime::{Plugin, RecordingDiagnostics, RuntimeConfig, Session, Severity};

pub use functions::{Call, Functions};
pub use mutate::{Insert, SetOwner};
pub use query::{CountKeyword, Enchantment, Owner, Stolen, Storable, Value};
pub use startup::Startup;

/// Loads a session whose diagnostics are kept for printing.
fn open(config: RuntimeConfig) -> Result<(Session, Arc<RecordingDiagnostics>)> {
    let diagnostics = Arc::new(RecordingDiagnostics::new());
    let data_dir = config.data_dir.clone();
    let session = Plugin::load(config, diagnostics.clone())
        .with_context(|| format!("Failed to load data directory: {}", data_dir.display()))?;
    Ok((session, diagnostics))
}

/// Parses a form argument.
///
/// Accepts `none`, a raw `0x` form id, `Plugin.esp|0xLOCAL`, or an editor id.
fn parse_form(catalog: &SnapshotCatalogOracle, input: &str) -> Result<Option<FormId>> {
    if input.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    if let Some(hex) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        let raw = u32::from_str_radix(hex, 16)
            .with_context(|| format!("Invalid form id: {}", input))?;
        return Ok(Some(FormId(raw)));
    }
    resolve_form(catalog, input)
        .map(Some)
        .ok_or_else(|| anyhow!("Form {} does not resolve in the catalog", input))
}

/// Prints and clears every diagnostic recorded so far.
fn print_diagnostics(diagnostics: &RecordingDiagnostics) {
    for entry in diagnostics.drain() {
        let label = match entry.severity {
            Severity::Info => style("info").cyan(),
            Severity::Warning => style("warning").yellow(),
            Severity::Error => style("error").red(),
        };
        eprintln!("{} [{}] {}", label.bold(), entry.function, entry.message);
    }
}

fn print_form(label: &str, form: Option<FormId>) {
    match form {
        Some(form) => println!("{} {}", style(label).bold().cyan(), form),
        None => println!("{} {}", style(label).bold().cyan(), style("None").dim()),
    }
}

fn print_flag(label: &str, value: bool) {
    let value = if value {
        style("true").green()
    } else {
        style("false").red()
    };
    println!("{} {}", style(label).bold().cyan(), value);
}
