//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/suburb-nearby/config.toml

pub mod defaults;

use crate::constants::api::GOOGLE_API_KEY_ENV;
use crate::constants::files::{CACHE_FILE, NAMES_FILE, PLACES_FILE};
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Nearest-neighbour settings
    #[serde(default)]
    pub nearby: NearbyConfig,

    /// Geocoding settings
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// Dataset locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// API keys for various services
    #[serde(default)]
    pub api_keys: ApiKeysConfig,
}

/// Nearest-neighbour settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyConfig {
    /// How many nearby places to keep per place
    #[serde(default = "default_nearby_count")]
    pub count: usize,
}

/// Geocoding settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Backend name ("nominatim" or "google")
    #[serde(default = "default_geocoder")]
    pub backend: String,

    /// Maximum requests in flight
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Dataset file locations
///
/// File names are relative to `data_dir`; the demo prefix is applied on top.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_names_file")]
    pub names_file: String,

    #[serde(default = "default_places_file")]
    pub places_file: String,

    #[serde(default = "default_cache_file")]
    pub cache_file: String,
}

/// API keys for external services
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiKeysConfig {
    /// Google Maps Geocoding API key
    #[serde(default)]
    pub google: String,
}

// Default value functions for serde
fn default_nearby_count() -> usize {
    DEFAULT_NEARBY_COUNT
}
fn default_geocoder() -> String {
    DEFAULT_GEOCODER.to_string()
}
fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}
fn default_names_file() -> String {
    NAMES_FILE.to_string()
}
fn default_places_file() -> String {
    PLACES_FILE.to_string()
}
fn default_cache_file() -> String {
    CACHE_FILE.to_string()
}

impl Default for NearbyConfig {
    fn default() -> Self {
        Self {
            count: default_nearby_count(),
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            backend: default_geocoder(),
            concurrency: default_concurrency(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            names_file: default_names_file(),
            places_file: default_places_file(),
            cache_file: default_cache_file(),
        }
    }
}

impl GeocoderConfig {
    /// Per-request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Google API key, preferring the environment over the config file
    pub fn google_api_key(&self) -> Option<String> {
        std::env::var(GOOGLE_API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| Some(self.api_keys.google.clone()).filter(|key| !key.is_empty()))
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["nearby", "count"] => Some(self.nearby.count.to_string()),

            ["geocoder", "backend"] => Some(self.geocoder.backend.clone()),
            ["geocoder", "concurrency"] => Some(self.geocoder.concurrency.to_string()),
            ["geocoder", "timeout_secs"] => Some(self.geocoder.timeout_secs.to_string()),

            ["paths", "data_dir"] => Some(self.paths.data_dir.display().to_string()),
            ["paths", "names_file"] => Some(self.paths.names_file.clone()),
            ["paths", "places_file"] => Some(self.paths.places_file.clone()),
            ["paths", "cache_file"] => Some(self.paths.cache_file.clone()),

            ["api_keys", "google"] => Some(self.api_keys.google.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["nearby", "count"] => {
                self.nearby.count = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid count value: {}", value))
                })?;
            }

            ["geocoder", "backend"] => {
                if !crate::geo::available_geocoders().contains(&value) {
                    return Err(Error::Config(format!("Unknown geocoder: {}", value)));
                }
                self.geocoder.backend = value.to_string();
            }
            ["geocoder", "concurrency"] => {
                let concurrency: usize = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid concurrency value: {}", value))
                })?;
                if concurrency == 0 {
                    return Err(Error::Config("Concurrency must be at least 1".to_string()));
                }
                self.geocoder.concurrency = concurrency;
            }
            ["geocoder", "timeout_secs"] => {
                let timeout_secs: u64 = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid timeout value: {}", value))
                })?;
                if timeout_secs == 0 {
                    return Err(Error::Config("Timeout must be at least 1 second".to_string()));
                }
                self.geocoder.timeout_secs = timeout_secs;
            }

            ["paths", "data_dir"] => {
                self.paths.data_dir = PathBuf::from(value);
            }
            ["paths", "names_file"] => {
                self.paths.names_file = value.to_string();
            }
            ["paths", "places_file"] => {
                self.paths.places_file = value.to_string();
            }
            ["paths", "cache_file"] => {
                self.paths.cache_file = value.to_string();
            }

            ["api_keys", "google"] => {
                self.api_keys.google = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "nearby.count",
            "geocoder.backend",
            "geocoder.concurrency",
            "geocoder.timeout_secs",
            "paths.data_dir",
            "paths.names_file",
            "paths.places_file",
            "paths.cache_file",
            "api_keys.google",
        ]
    }
}
