//! Build command handler
//!
//! Geocodes the names file, saves the place data and builds the cache from
//! it, all in one run. Nothing is written if the run is cancelled.

use crate::cli::cache::write_cache;
use crate::cli::geocode::{geocode_names, GeocoderArgs};
use crate::cli::{cancel_on_ctrl_c, check_cancelled, DatasetArgs};
use crate::config::Config;
use crate::dataset::DatasetPaths;
use crate::error::Result;
use crate::place::PlaceRecord;
use crate::store;
use clap::Args;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Build command arguments
#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub geocoder: GeocoderArgs,

    /// Nearby places to keep per place
    #[arg(long = "count", short = 'k')]
    pub count: Option<usize>,

    /// Names file (defaults to the dataset's)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Cache file to write (defaults to the dataset's)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Place data file to write (defaults to the dataset's, or next to
    /// --output when --input is given)
    #[arg(long, short = 'p')]
    pub places: Option<PathBuf>,

    /// Don't save the intermediate place data file
    #[arg(long, conflicts_with = "places")]
    pub no_places: bool,
}

/// Run the build command
pub async fn run(args: BuildArgs) -> Result<()> {
    let mut config = Config::load()?;
    args.geocoder.apply(&mut config);

    let paths = DatasetPaths::resolve(&config.paths, args.dataset.full);
    let output = args.output.unwrap_or(paths.cache);
    let places_path = match (args.no_places, args.places) {
        (true, _) => None,
        (false, Some(places)) => Some(places),
        (false, None) if args.input.is_some() => Some(places_beside(&output)),
        (false, None) => Some(paths.places),
    };
    let input = args.input.unwrap_or(paths.names);
    let count = args.count.unwrap_or(config.nearby.count);

    let cancel = cancel_on_ctrl_c();
    let report = geocode_names(&config, &input, &cancel).await?;

    write_outputs(&report.places, places_path.as_deref(), count, &output, &cancel)
}

/// Place data path for a custom names file, kept next to its cache
fn places_beside(output: &Path) -> PathBuf {
    output.with_extension("places.json")
}

fn write_outputs(
    places: &[PlaceRecord],
    places_path: Option<&Path>,
    count: usize,
    output: &Path,
    cancel: &CancellationToken,
) -> Result<()> {
    if let Some(path) = places_path {
        check_cancelled(cancel)?;
        store::save_places(path, places)?;
        info!("Place data written to {}", path.display());
    }

    write_cache(places, count, output, cancel)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use tempfile::TempDir;

    fn places() -> Vec<PlaceRecord> {
        vec![
            PlaceRecord::new("Manly", -33.797, 151.284),
            PlaceRecord::new("Fairlight", -33.794, 151.274),
            PlaceRecord::new("Dee Why", -33.752, 151.288),
        ]
    }

    #[test]
    fn test_write_outputs() {
        let temp_dir = TempDir::new().unwrap();
        let places_path = temp_dir.path().join("demo-location-data.json");
        let output = temp_dir.path().join("demo-locations-cache.json");

        write_outputs(&places(), Some(&places_path), 2, &output, &CancellationToken::new())
            .unwrap();

        assert_eq!(store::load_places(&places_path).unwrap(), places());
        assert_eq!(store::load_cache(&output).unwrap().len(), 3);
    }

    #[test]
    fn test_cancelled_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let places_path = temp_dir.path().join("demo-location-data.json");
        let output = temp_dir.path().join("demo-locations-cache.json");

        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = write_outputs(&places(), Some(&places_path), 2, &output, &cancel).unwrap_err();
        assert!(matches!(err, crate::error::Error::Cancelled));
        assert!(!places_path.exists());
        assert!(!output.exists());
    }

    #[test]
    fn test_places_beside_output() {
        assert_eq!(
            places_beside(Path::new("out/north-shore.json")),
            PathBuf::from("out/north-shore.places.json")
        );
    }

    #[test]
    fn test_parse_places_override() {
        let cli = Cli::try_parse_from([
            "suburb-nearby",
            "build",
            "-i",
            "north-shore.txt",
            "--places",
            "north-shore-data.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Build(args) => {
                assert_eq!(args.places, Some(PathBuf::from("north-shore-data.json")));
                assert!(!args.no_places);
            }
            _ => panic!("expected build command"),
        }

        let conflict = Cli::try_parse_from([
            "suburb-nearby",
            "build",
            "--no-places",
            "--places",
            "x.json",
        ]);
        assert!(conflict.is_err());
    }
}
