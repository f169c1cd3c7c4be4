//! Error types for suburb-nearby

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for suburb-nearby operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Geocoding failed for '{name}': {reason}")]
    GeocodeLookupFailed { name: String, reason: String },

    #[error("Geocoding incomplete: {} of {expected} lookups failed ({})", .missing.len(), .missing.join(", "))]
    BatchIncomplete {
        expected: usize,
        missing: Vec<String>,
    },

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Failed to write {}: {source}", .path.display())]
    CacheWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Geo error: {0}")]
    Geo(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for suburb-nearby operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_incomplete_message() {
        let err = Error::BatchIncomplete {
            expected: 3,
            missing: vec!["Bondi, NSW".to_string(), "Manly".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Geocoding incomplete: 2 of 3 lookups failed (Bondi, NSW, Manly)"
        );
    }

    #[test]
    fn test_cache_write_failed_message() {
        let err = Error::CacheWriteFailed {
            path: PathBuf::from("out/locations-cache.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("out/locations-cache.json"));
        assert!(msg.contains("denied"));
    }
}
