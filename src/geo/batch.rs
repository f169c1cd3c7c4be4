//! Batch geocoding
//!
//! Every name in a batch is looked up concurrently, up to a fixed number of
//! requests in flight, each bounded by a timeout. A failed lookup is recorded
//! and the batch carries on; the batch finishes once every lookup has
//! resolved one way or the other.

use crate::config::GeocoderConfig;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::geo::GeoBackend;
use crate::place::PlaceRecord;
use futures::stream::{self, StreamExt};
use std::pin::pin;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Concurrency and timeout limits for a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Maximum lookups in flight
    pub concurrency: usize,
    /// Per-lookup timeout
    pub timeout: Duration,
}

impl BatchOptions {
    pub fn from_config(config: &GeocoderConfig) -> Self {
        Self {
            concurrency: config.concurrency,
            timeout: config.timeout(),
        }
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self::from_config(&GeocoderConfig::default())
    }
}

/// A query the geocoder could not resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedLookup {
    pub query: String,
    pub reason: String,
}

/// Outcome of a geocoding batch
#[derive(Debug, Clone)]
pub struct GeocodeReport {
    /// Resolved places, in input order
    pub places: Vec<PlaceRecord>,
    /// Failed queries, in input order
    pub failed: Vec<FailedLookup>,
    /// Number of lookups attempted
    pub attempted: usize,
    /// Wall-clock time for the batch
    pub elapsed: Duration,
}

impl GeocodeReport {
    /// Raw queries that failed
    pub fn failed_queries(&self) -> Vec<&str> {
        self.failed.iter().map(|f| f.query.as_str()).collect()
    }

    /// A `BatchIncomplete` warning if any lookup failed
    pub fn incomplete(&self) -> Option<Error> {
        if self.failed.is_empty() {
            return None;
        }
        Some(Error::BatchIncomplete {
            expected: self.attempted,
            missing: self.failed.iter().map(|f| f.query.clone()).collect(),
        })
    }
}

/// Geocode every query in `queries`
///
/// The full query is sent to the backend; the resulting record is named by
/// the part before the first comma. Returns `Error::Cancelled` if `cancel`
/// fires before the batch completes.
pub async fn geocode_batch<B: GeoBackend>(
    backend: &B,
    queries: &[String],
    options: &BatchOptions,
    cancel: &CancellationToken,
) -> Result<GeocodeReport> {
    let start = Instant::now();
    let timeout = options.timeout;

    let mut lookups = pin!(stream::iter(queries.iter().enumerate())
        .map(|(index, query)| async move {
            let outcome = match tokio::time::timeout(timeout, backend.geocode(query)).await {
                Ok(Ok(Some(location))) => Ok(Coordinates::new(location.lat, location.lng)),
                Ok(Ok(None)) => Err("no results".to_string()),
                Ok(Err(e)) => Err(e.to_string()),
                Err(_) => Err(format!("timed out after {:?}", timeout)),
            };
            (index, outcome)
        })
        .buffer_unordered(options.concurrency.max(1)));

    let mut resolved: Vec<(usize, PlaceRecord)> = Vec::with_capacity(queries.len());
    let mut failed: Vec<(usize, FailedLookup)> = Vec::new();

    loop {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            next = lookups.next() => next,
        };
        let Some((index, outcome)) = next else {
            break;
        };

        let query = &queries[index];
        match outcome {
            Ok(coords) => {
                let record = PlaceRecord::from_query(query, coords);
                info!("Geocoded: {}. {}", resolved.len() + 1, record.name);
                resolved.push((index, record));
            }
            Err(reason) => {
                let err = Error::GeocodeLookupFailed {
                    name: query.clone(),
                    reason: reason.clone(),
                };
                warn!("{}", err);
                failed.push((
                    index,
                    FailedLookup {
                        query: query.clone(),
                        reason,
                    },
                ));
            }
        }
    }

    resolved.sort_by_key(|(index, _)| *index);
    failed.sort_by_key(|(index, _)| *index);

    Ok(GeocodeReport {
        places: resolved.into_iter().map(|(_, record)| record).collect(),
        failed: failed.into_iter().map(|(_, failure)| failure).collect(),
        attempted: queries.len(),
        elapsed: start.elapsed(),
    })
}
