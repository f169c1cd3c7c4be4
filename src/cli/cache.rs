//! Cache command handler
//!
//! Builds the nearby cache from a place data file.

use crate::cli::{cancel_on_ctrl_c, check_cancelled, DatasetArgs};
use crate::config::Config;
use crate::dataset::DatasetPaths;
use crate::error::Result;
use crate::nearby::{build_cache, CacheBuild};
use crate::place::PlaceRecord;
use crate::store;
use clap::Args;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Cache command arguments
#[derive(Args)]
pub struct CacheArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Nearby places to keep per place
    #[arg(long = "count", short = 'k')]
    pub count: Option<usize>,

    /// Place data file (defaults to the dataset's)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Cache file to write (defaults to the dataset's)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Run the cache command
pub async fn run(args: CacheArgs) -> Result<()> {
    let config = Config::load()?;
    let paths = DatasetPaths::resolve(&config.paths, args.dataset.full);
    let input = args.input.unwrap_or(paths.places);
    let output = args.output.unwrap_or(paths.cache);
    let count = args.count.unwrap_or(config.nearby.count);

    let places = store::load_places(&input)?;
    info!("{} places from {}", places.len(), input.display());

    let cancel = cancel_on_ctrl_c();
    write_cache(&places, count, &output, &cancel)?;
    Ok(())
}

/// Build the cache, write it and log the summary
///
/// Nothing is written if `cancel` has fired by the time the cache is built.
pub(crate) fn write_cache(
    places: &[PlaceRecord],
    count: usize,
    output: &Path,
    cancel: &CancellationToken,
) -> Result<CacheBuild> {
    let start = Instant::now();
    info!("===== Nearby Locations Cacher =====");

    check_cancelled(cancel)?;
    let build = build_cache(places, count);
    check_cancelled(cancel)?;
    store::save_cache(output, &build.cache)?;

    info!(
        "Cached {} places ({} nearby each) to {}",
        build.cache.len(),
        count,
        output.display()
    );
    if !build.duplicates.is_empty() {
        warn!(
            "{} duplicate names, later records kept: {}",
            build.duplicates.len(),
            build.duplicates.join(", ")
        );
    }
    if !build.excluded.is_empty() {
        let names: Vec<&str> = build.excluded.iter().map(|e| e.name.as_str()).collect();
        warn!(
            "{} places excluded for invalid coordinates: {}",
            names.len(),
            names.join(", ")
        );
    }
    info!("Completed in {:.3} seconds", start.elapsed().as_secs_f64());

    Ok(build)
}
