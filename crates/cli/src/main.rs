//! Developer entry point for the satchel script functions.
//!
//! Loads a data directory the way the host would and evaluates script
//! functions against it. Run with: `satchel --data-dir <DIR> <command>`
mod commands;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use satchel_runtime::RuntimeConfig;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use commands::{
    Call, CountKeyword, Enchantment, Functions, Insert, Owner, SetOwner, Startup, Stolen,
    Storable, Value,
};

/// Inventory override queries against a satchel data directory
#[derive(Parser)]
#[command(name = "satchel")]
#[command(about = "Evaluate satchel script functions", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory (overrides SATCHEL_DATA_DIR)
    #[arg(short, long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Also print log output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List bound script functions
    Functions(Functions),

    /// Call a script function by name
    Call(Call),

    /// Resolve the owner of an item in a container
    Owner(Owner),

    /// Check whether an item in a container is stolen
    Stolen(Stolen),

    /// Resolve the effective enchantment of an item in a container
    Enchantment(Enchantment),

    /// Count items whose enchantment carries a keyword
    CountKeyword(CountKeyword),

    /// Total gold value of an item
    Value(Value),

    /// Check whether an item may be stored in a container
    Storable(Storable),

    /// Insert a stack, optionally owned
    Insert(Insert),

    /// Rewrite the owner of an item's existing ownership slots
    SetOwner(SetOwner),

    /// Run the data-loaded startup pass (settings and mod objects)
    Startup(Startup),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = RuntimeConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }

    setup_logging(&config.resolved_log_dir(), cli.verbose)?;

    match cli.command {
        Command::Functions(cmd) => cmd.execute(config),
        Command::Call(cmd) => cmd.execute(config),
        Command::Owner(cmd) => cmd.execute(config),
        Command::Stolen(cmd) => cmd.execute(config),
        Command::Enchantment(cmd) => cmd.execute(config),
        Command::CountKeyword(cmd) => cmd.execute(config),
        Command::Value(cmd) => cmd.execute(config),
        Command::Storable(cmd) => cmd.execute(config),
        Command::Insert(cmd) => cmd.execute(config),
        Command::SetOwner(cmd) => cmd.execute(config),
        Command::Startup(cmd) => cmd.execute(config),
    }
}

/// Setup logging to a file, and to stderr when `verbose` is set
fn setup_logging(log_dir: &Path, verbose: bool) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, "satchel.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(if verbose {
            LevelFilter::TRACE
        } else {
            LevelFilter::OFF
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    tracing::info!("Log file: {}/satchel.log", log_dir.display());

    Ok(())
}
