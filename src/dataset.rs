//! Dataset file selection
//!
//! Each run works on either the demo dataset or the full one. Demo files
//! carry a `demo-` prefix: `demo-locations.txt`, `demo-location-data.json`,
//! `demo-locations-cache.json`.

use crate::config::PathsConfig;
use crate::constants::files::DEMO_PREFIX;
use std::path::{Path, PathBuf};

/// Resolved file locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    /// Place names input
    pub names: PathBuf,
    /// Geocoded places
    pub places: PathBuf,
    /// Nearby cache output
    pub cache: PathBuf,
}

impl DatasetPaths {
    /// Resolve dataset files under the configured data directory
    pub fn resolve(paths: &PathsConfig, full: bool) -> Self {
        let dir = paths.data_dir.as_path();
        Self {
            names: dataset_file(dir, &paths.names_file, full),
            places: dataset_file(dir, &paths.places_file, full),
            cache: dataset_file(dir, &paths.cache_file, full),
        }
    }
}

fn dataset_file(dir: &Path, file: &str, full: bool) -> PathBuf {
    if full {
        dir.join(file)
    } else {
        dir.join(format!("{}{}", DEMO_PREFIX, file))
    }
}
