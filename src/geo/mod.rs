//! Geocoding module
//!
//! Resolves place names to coordinates through an external service. Backends
//! implement [`GeoBackend`]; [`Geocoder`] picks one by configured name and
//! [`batch::geocode_batch`] runs a whole names file through it.

pub mod batch;
pub mod google;
pub mod nominatim;

use crate::config::Config;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A geocoded location result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Display name (address or description)
    pub display_name: String,
}

/// Trait for geocoding backends
pub trait GeoBackend: Send + Sync {
    /// Geocode a location string to coordinates
    ///
    /// Returns the best match for the query, or None if not found
    fn geocode(&self, query: &str) -> impl std::future::Future<Output = Result<Option<GeoLocation>>> + Send;
}

/// The configured geocoding backend
#[derive(Debug, Clone)]
pub enum Geocoder {
    Nominatim(nominatim::NominatimBackend),
    Google(google::GoogleBackend),
}

impl Geocoder {
    /// Backend name as used in config
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nominatim(_) => "nominatim",
            Self::Google(_) => "google",
        }
    }
}

impl GeoBackend for Geocoder {
    async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>> {
        match self {
            Self::Nominatim(backend) => backend.geocode(query).await,
            Self::Google(backend) => backend.geocode(query).await,
        }
    }
}

/// Names accepted for `geocoder.backend`
pub fn available_geocoders() -> Vec<&'static str> {
    vec!["nominatim", "google"]
}

/// Get the geocoding backend selected in config
pub fn get_geocoder(config: &Config) -> Result<Geocoder> {
    match config.geocoder.backend.as_str() {
        "nominatim" => Ok(Geocoder::Nominatim(nominatim::NominatimBackend::new()?)),
        "google" => {
            let api_key = config.google_api_key().ok_or_else(|| {
                Error::Config(format!(
                    "Google geocoding needs an API key: set api_keys.google or {}",
                    crate::constants::api::GOOGLE_API_KEY_ENV
                ))
            })?;
            Ok(Geocoder::Google(google::GoogleBackend::new(api_key)?))
        }
        other => Err(Error::Config(format!("Unknown geocoder: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geocoder() {
        let geocoder = get_geocoder(&Config::default()).unwrap();
        assert_eq!(geocoder.name(), "nominatim");
    }

    #[test]
    fn test_unknown_geocoder() {
        let mut config = Config::default();
        config.geocoder.backend = "bing".to_string();
        assert!(matches!(get_geocoder(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_google_with_configured_key() {
        let mut config = Config::default();
        config.geocoder.backend = "google".to_string();
        config.api_keys.google = "test-key".to_string();

        let geocoder = get_geocoder(&config).unwrap();
        assert_eq!(geocoder.name(), "google");
    }

    #[test]
    fn test_available_geocoders_match_config_default() {
        let config = Config::default();
        assert!(available_geocoders().contains(&config.geocoder.backend.as_str()));
    }
}
