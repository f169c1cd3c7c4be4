//! Nominatim geocoding backend (OpenStreetMap)
//!
//! Uses the free Nominatim API for geocoding. No key is required, but the
//! public instance expects an identifying User-Agent and modest request rates.

use crate::constants::api::NOMINATIM_URL;
use crate::error::{Error, Result};
use crate::geo::{GeoBackend, GeoLocation};
use serde::Deserialize;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Nominatim geocoding backend
#[derive(Debug, Clone)]
pub struct NominatimBackend {
    client: reqwest::Client,
}

/// Nominatim search response item
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    display_name: String,
}

impl NominatimBackend {
    /// Create a new Nominatim backend
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Parse lat/lng strings to f64
    fn parse_coords(lat: &str, lng: &str) -> Result<(f64, f64)> {
        let lat: f64 = lat
            .parse()
            .map_err(|_| Error::Geo(format!("Invalid latitude: {}", lat)))?;
        let lng: f64 = lng
            .parse()
            .map_err(|_| Error::Geo(format!("Invalid longitude: {}", lng)))?;
        Ok((lat, lng))
    }

    /// Take the first search result, if any
    fn first_location(results: Vec<NominatimResult>) -> Result<Option<GeoLocation>> {
        match results.into_iter().next() {
            Some(result) => {
                let (lat, lng) = Self::parse_coords(&result.lat, &result.lon)?;
                Ok(Some(GeoLocation {
                    lat,
                    lng,
                    display_name: result.display_name,
                }))
            }
            None => Ok(None),
        }
    }
}

impl GeoBackend for NominatimBackend {
    async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>> {
        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            NOMINATIM_URL,
            urlencoding::encode(query)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Geo(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geo(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| Error::Geo(format!("Failed to parse Nominatim response: {}", e)))?;

        Self::first_location(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coords() {
        let (lat, lng) = NominatimBackend::parse_coords("-33.8915", "151.2767").unwrap();
        assert!((lat - (-33.8915)).abs() < 0.0001);
        assert!((lng - 151.2767).abs() < 0.0001);
    }

    #[test]
    fn test_parse_coords_invalid() {
        assert!(NominatimBackend::parse_coords("invalid", "0").is_err());
        assert!(NominatimBackend::parse_coords("0", "invalid").is_err());
    }

    #[test]
    fn test_first_location() {
        let json = r#"[
            {"lat": "-33.8914", "lon": "151.2766", "display_name": "Bondi, Sydney, NSW, Australia"},
            {"lat": "-37.0", "lon": "145.0", "display_name": "Somewhere else"}
        ]"#;
        let results: Vec<NominatimResult> = serde_json::from_str(json).unwrap();

        let location = NominatimBackend::first_location(results).unwrap().unwrap();
        assert!((location.lat - (-33.8914)).abs() < 1e-9);
        assert!(location.display_name.starts_with("Bondi"));
    }

    #[test]
    fn test_no_results() {
        assert!(NominatimBackend::first_location(Vec::new()).unwrap().is_none());
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("suburb-nearby/"));
    }
}
