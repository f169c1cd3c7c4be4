//! suburb-nearby: nearby-suburb cache builder
//!
//! Geocodes a list of place names and records, for every place, the names of
//! its nearest other places by great-circle distance. The resulting JSON map
//! is read by the site's page generator to render "nearby suburbs" lists.
//!
//! ## Pipeline
//!
//! - [`place::input`] reads the names file (one place per line)
//! - [`geo::batch`] geocodes every name concurrently through a [`geo::GeoBackend`]
//! - [`nearby::build_cache`] computes the K nearest places for each place
//! - [`store`] writes place data and the cache as pretty-printed JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use suburb_nearby::nearby::{build_cache, lookup_nearby};
//! use suburb_nearby::PlaceRecord;
//!
//! let places = vec![
//!     PlaceRecord::new("Bondi", -33.8915, 151.2767),
//!     PlaceRecord::new("Bronte", -33.9036, 151.2680),
//!     PlaceRecord::new("Manly", -33.7969, 151.2840),
//! ];
//!
//! let build = build_cache(&places, 1);
//! assert_eq!(lookup_nearby(&build.cache, "Bondi"), ["Bronte"]);
//! assert!(lookup_nearby(&build.cache, "Nowhere").is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod nearby;
pub mod place;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use nearby::{lookup_nearby, NearbyCache};
pub use place::PlaceRecord;
