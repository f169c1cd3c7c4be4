//! Google Maps geocoding backend
//!
//! Requires an API key, taken from config or the environment.
//! API documentation: https://developers.google.com/maps/documentation/geocoding

use crate::constants::api::GOOGLE_GEOCODE_URL;
use crate::error::{Error, Result};
use crate::geo::{GeoBackend, GeoLocation};
use serde::Deserialize;

/// Google geocoding backend
#[derive(Clone)]
pub struct GoogleBackend {
    client: reqwest::Client,
    api_key: String,
}

impl std::fmt::Debug for GoogleBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleBackend")
            .field("api_key", &"***")
            .finish()
    }
}

/// Geocoding API response
///
/// Example: `{"status": "OK", "results": [{"formatted_address": "...", "geometry": {"location": {"lat": -33.89, "lng": 151.27}}}]}`
#[derive(Debug, Deserialize)]
struct GoogleResponse {
    status: String,
    #[serde(default)]
    results: Vec<GoogleResult>,
    /// Present on error statuses
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleResult {
    #[serde(default)]
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl GoogleBackend {
    /// Create a new Google backend
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            api_key: api_key.into(),
        })
    }

    /// Interpret a response body
    ///
    /// `ZERO_RESULTS` is a miss, not an error; every other non-OK status is.
    fn interpret(response: GoogleResponse) -> Result<Option<GeoLocation>> {
        match response.status.as_str() {
            "OK" => Ok(response.results.into_iter().next().map(|result| GeoLocation {
                lat: result.geometry.location.lat,
                lng: result.geometry.location.lng,
                display_name: result.formatted_address,
            })),
            "ZERO_RESULTS" => Ok(None),
            status => Err(Error::Geo(match response.error_message {
                Some(message) => format!("Google returned {}: {}", status, message),
                None => format!("Google returned {}", status),
            })),
        }
    }
}

impl GeoBackend for GoogleBackend {
    async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>> {
        let url = format!(
            "{}?address={}&key={}",
            GOOGLE_GEOCODE_URL,
            urlencoding::encode(query),
            urlencoding::encode(&self.api_key)
        );

        // reqwest errors carry the URL, which carries the key
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Geo(format!("Google request failed: {}", e.without_url())))?;

        if !response.status().is_success() {
            return Err(Error::Geo(format!(
                "Google returned HTTP status: {}",
                response.status()
            )));
        }

        let body: GoogleResponse = response.json().await.map_err(|e| {
            Error::Geo(format!("Failed to parse Google response: {}", e.without_url()))
        })?;

        Self::interpret(body)
    }
}
