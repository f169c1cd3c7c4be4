//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod build;
pub mod cache;
pub mod config;
pub mod geocode;
pub mod lookup;

use crate::error::{Error, Result};
use clap::{Args, Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Geocode suburb lists and cache each suburb's nearest neighbours
#[derive(Parser)]
#[command(name = "suburb-nearby")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Geocode the place names file
    Geocode(geocode::GeocodeArgs),

    /// Build the nearby cache from geocoded places
    Cache(cache::CacheArgs),

    /// Geocode and build the nearby cache in one run
    Build(build::BuildArgs),

    /// Show the cached nearby places for a place
    Lookup(lookup::LookupArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Dataset selection shared by the data commands
#[derive(Args, Debug, Clone, Copy)]
pub struct DatasetArgs {
    /// Use the full dataset instead of the demo one
    #[arg(long, short = 'F')]
    pub full: bool,
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Geocode(args) => geocode::run(args).await,
        Commands::Cache(args) => cache::run(args).await,
        Commands::Build(args) => build::run(args).await,
        Commands::Lookup(args) => lookup::run(args),
        Commands::Config(args) => config::run(args),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

/// A token that fires on Ctrl-C
pub(crate) fn cancel_on_ctrl_c() -> CancellationToken {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling");
            trigger.cancel();
        }
    });
    cancel
}

/// Fail with `Error::Cancelled` once the token has fired
pub(crate) fn check_cancelled(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }
    Ok(())
}
