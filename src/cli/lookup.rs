//! Lookup command handler
//!
//! Prints the cached nearby places for one place, the way the page generator
//! reads them.

use crate::cli::DatasetArgs;
use crate::config::Config;
use crate::dataset::DatasetPaths;
use crate::error::Result;
use crate::nearby::lookup_nearby;
use crate::store;
use clap::Args;
use std::path::PathBuf;

/// Lookup command arguments
#[derive(Args)]
pub struct LookupArgs {
    /// Place name as it appears in the cache
    pub name: String,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Cache file (defaults to the dataset's)
    #[arg(long)]
    pub cache: Option<PathBuf>,

    /// Print as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Run the lookup command
pub fn run(args: LookupArgs) -> Result<()> {
    let config = Config::load()?;
    let paths = DatasetPaths::resolve(&config.paths, args.dataset.full);
    let cache_path = args.cache.unwrap_or(paths.cache);

    let cache = store::load_cache(&cache_path)?;
    let nearby = lookup_nearby(&cache, &args.name);

    if args.json {
        println!("{}", serde_json::to_string(nearby)?);
    } else if nearby.is_empty() {
        eprintln!("No nearby places cached for '{}'", args.name);
    } else {
        for name in nearby {
            println!("{}", name);
        }
    }

    Ok(())
}
