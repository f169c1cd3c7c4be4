//! Named places
//!
//! A place is a name plus the coordinates the geocoder resolved it to. Raw
//! input lines may carry a disambiguator after a comma ("Bondi, NSW"); the
//! full line is sent to the geocoder but only the part before the comma is
//! kept as the place's name.

pub mod input;

use crate::coord::Coordinates;
use serde::{Deserialize, Serialize};

/// A geocoded place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Place name (raw input up to the first comma)
    #[serde(alias = "nme")]
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl PlaceRecord {
    /// Create a record with an already-stripped name
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
        }
    }

    /// Create a record from the raw query that was geocoded
    pub fn from_query(query: &str, coords: Coordinates) -> Self {
        Self::new(base_name(query), coords.lat, coords.lng)
    }

    /// This record's position
    pub fn coords(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// The part of a raw place string before the first comma, trimmed
///
/// "Bondi, NSW, Australia" -> "Bondi"
pub fn base_name(raw: &str) -> &str {
    raw.split(',').next().unwrap_or(raw).trim()
}
