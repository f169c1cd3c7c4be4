//! Nearest-neighbour cache construction
//!
//! For each place, every other place is measured by great-circle distance,
//! sorted nearest first and cut to `k`. That is O(N² log N) across the batch,
//! which is fine at suburb-list scale (hundreds to low thousands of places).
//! A spatial index would be the place to start if N grows well beyond that.

use crate::coord::haversine_distance;
use crate::error::{Error, Result};
use crate::nearby::NearbyCache;
use crate::place::PlaceRecord;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A place left out of the cache
#[derive(Debug, Clone, PartialEq)]
pub struct ExcludedPlace {
    pub name: String,
    pub reason: String,
}

/// Result of building a cache
#[derive(Debug, Clone)]
pub struct CacheBuild {
    /// The nearby cache
    pub cache: NearbyCache,

    /// Places with unusable coordinates
    pub excluded: Vec<ExcludedPlace>,

    /// Names that appeared more than once (the last record won)
    pub duplicates: Vec<String>,
}

/// Names of the `k` places nearest to `place`, nearest first
///
/// `place` itself is skipped by name, so distinct places sharing the same
/// coordinates still see each other. Equal distances keep the order they
/// have in `candidates`. Fewer than `k` candidates yields all of them.
/// Candidates with invalid coordinates are skipped; an invalid `place` is an
/// error.
pub fn nearest(place: &PlaceRecord, candidates: &[PlaceRecord], k: usize) -> Result<Vec<String>> {
    let origin = place.coords();
    origin.validate().map_err(|e| match e {
        Error::InvalidCoordinates(msg) => {
            Error::InvalidCoordinates(format!("{}: {}", place.name, msg))
        }
        other => other,
    })?;

    let mut distances: Vec<(&str, f64)> = Vec::with_capacity(candidates.len());
    for other in candidates.iter().filter(|other| other.name != place.name) {
        let coords = other.coords();
        if let Err(e) = coords.validate() {
            warn!("Skipping {} as a neighbour of {}: {}", other.name, place.name, e);
            continue;
        }
        distances.push((other.name.as_str(), haversine_distance(origin, coords)));
    }

    distances.sort_by(|a, b| a.1.total_cmp(&b.1));

    Ok(distances
        .into_iter()
        .take(k)
        .map(|(name, _)| name.to_string())
        .collect())
}

/// Build the nearby cache for a set of places
///
/// Duplicate names resolve last-write-wins. Places with invalid coordinates
/// are dropped before any distances are computed, so they neither get an
/// entry nor appear in anyone else's list.
pub fn build_cache(places: &[PlaceRecord], k: usize) -> CacheBuild {
    let (unique, duplicates) = dedupe(places);

    let mut excluded = Vec::new();
    let mut valid = Vec::with_capacity(unique.len());
    for place in unique {
        match place.coords().validate() {
            Ok(()) => valid.push(place),
            Err(e) => {
                warn!("Excluding {}: {}", place.name, e);
                excluded.push(ExcludedPlace {
                    name: place.name,
                    reason: e.to_string(),
                });
            }
        }
    }

    let results: Vec<(&str, Result<Vec<String>>)> = valid
        .par_iter()
        .map(|place| (place.name.as_str(), nearest(place, &valid, k)))
        .collect();

    let mut cache = NearbyCache::new();
    for (i, (name, result)) in results.into_iter().enumerate() {
        match result {
            Ok(nearby) => {
                debug!("Made: {}. {}", i + 1, name);
                cache.insert(name, nearby);
            }
            Err(e) => {
                warn!("Excluding {}: {}", name, e);
                excluded.push(ExcludedPlace {
                    name: name.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    CacheBuild {
        cache,
        excluded,
        duplicates,
    }
}

/// Collapse records sharing a name; the last record wins but keeps the
/// first one's position
fn dedupe(places: &[PlaceRecord]) -> (Vec<PlaceRecord>, Vec<String>) {
    let mut unique: Vec<PlaceRecord> = Vec::with_capacity(places.len());
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(places.len());
    let mut duplicates = Vec::new();

    for place in places {
        match seen.get(place.name.as_str()) {
            Some(&index) => {
                warn!("Duplicate place name {}, keeping the later record", place.name);
                unique[index] = place.clone();
                if !duplicates.contains(&place.name) {
                    duplicates.push(place.name.clone());
                }
            }
            None => {
                seen.insert(place.name.as_str(), unique.len());
                unique.push(place.clone());
            }
        }
    }

    (unique, duplicates)
}
