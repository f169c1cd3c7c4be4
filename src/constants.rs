//! Centralized constants for the suburb-nearby crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in meters (WGS84 approximation)
    pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
}

/// External API endpoints
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// Google Maps Geocoding API
    pub const GOOGLE_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

    /// Environment variable consulted for the Google API key
    pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";
}

/// Dataset file names
pub mod files {
    /// Prefix applied to every dataset file unless the full dataset is selected
    pub const DEMO_PREFIX: &str = "demo-";

    /// Place names, one per line
    pub const NAMES_FILE: &str = "locations.txt";

    /// Geocoded place records
    pub const PLACES_FILE: &str = "location-data.json";

    /// Nearest-neighbour cache read by the page generator
    pub const CACHE_FILE: &str = "locations-cache.json";
}
