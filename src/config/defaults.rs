//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default number of nearby places kept per place
pub const DEFAULT_NEARBY_COUNT: usize = 6;

/// Default geocoding backend
pub const DEFAULT_GEOCODER: &str = "nominatim";

/// Default maximum number of geocoding requests in flight
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Default per-request geocoding timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default directory holding the dataset files
pub const DEFAULT_DATA_DIR: &str = ".";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "suburb-nearby";
