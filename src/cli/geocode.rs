//! Geocode command handler
//!
//! Resolves every name in the names file and writes the place data file.

use crate::cli::{cancel_on_ctrl_c, check_cancelled, DatasetArgs};
use crate::config::Config;
use crate::dataset::DatasetPaths;
use crate::error::Result;
use crate::geo::batch::{geocode_batch, BatchOptions, GeocodeReport};
use crate::geo::get_geocoder;
use crate::place::input::read_names;
use crate::store;
use clap::Args;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Geocoder overrides shared by `geocode` and `build`
#[derive(Args, Debug, Clone)]
pub struct GeocoderArgs {
    /// Geocoding backend (nominatim, google)
    #[arg(long, short = 'b')]
    pub backend: Option<String>,

    /// Maximum lookups in flight
    #[arg(long, short = 'c')]
    pub concurrency: Option<usize>,

    /// Per-lookup timeout in seconds
    #[arg(long, short = 't', value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl GeocoderArgs {
    /// Apply command-line overrides on top of config
    pub fn apply(&self, config: &mut Config) {
        if let Some(backend) = &self.backend {
            config.geocoder.backend = backend.clone();
        }
        if let Some(concurrency) = self.concurrency {
            config.geocoder.concurrency = concurrency;
        }
        if let Some(timeout) = self.timeout {
            config.geocoder.timeout_secs = timeout;
        }
    }
}

/// Geocode command arguments
#[derive(Args)]
pub struct GeocodeArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub geocoder: GeocoderArgs,

    /// Names file (defaults to the dataset's)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Place data file to write (defaults to the dataset's)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Run the geocode command
pub async fn run(args: GeocodeArgs) -> Result<()> {
    let mut config = Config::load()?;
    args.geocoder.apply(&mut config);

    let paths = DatasetPaths::resolve(&config.paths, args.dataset.full);
    let input = args.input.unwrap_or(paths.names);
    let output = args.output.unwrap_or(paths.places);

    let cancel = cancel_on_ctrl_c();
    let report = geocode_names(&config, &input, &cancel).await?;

    check_cancelled(&cancel)?;
    store::save_places(&output, &report.places)?;
    info!("Place data written to {}", output.display());

    Ok(())
}

/// Geocode a names file and log the summary
pub(crate) async fn geocode_names(
    config: &Config,
    input: &Path,
    cancel: &CancellationToken,
) -> Result<GeocodeReport> {
    let names = read_names(input)?;
    let geocoder = get_geocoder(config)?;
    let options = BatchOptions::from_config(&config.geocoder);

    info!("===== Geocoder - {} =====", geocoder.name());
    info!(
        "{} names from {} ({} at a time, {}s timeout)",
        names.len(),
        input.display(),
        options.concurrency,
        options.timeout.as_secs()
    );

    let report = geocode_batch(&geocoder, &names, &options, cancel).await?;

    info!(
        "Geocoded {} of {} in {:.3} seconds",
        report.places.len(),
        report.attempted,
        report.elapsed.as_secs_f64()
    );
    if let Some(warning) = report.incomplete() {
        warn!("{}", warning);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        let args = GeocoderArgs {
            backend: Some("google".to_string()),
            concurrency: None,
            timeout: Some(30),
        };
        args.apply(&mut config);

        assert_eq!(config.geocoder.backend, "google");
        assert_eq!(config.geocoder.concurrency, 8);
        assert_eq!(config.geocoder.timeout_secs, 30);
    }

    #[test]
    fn test_zero_timeout_flag_rejected() {
        use crate::cli::Cli;
        use clap::Parser;

        assert!(Cli::try_parse_from(["suburb-nearby", "geocode", "--timeout", "0"]).is_err());
        assert!(Cli::try_parse_from(["suburb-nearby", "geocode", "--timeout", "5"]).is_ok());
    }
}
