//! Nearby-place cache
//!
//! Maps each place name to the names of its nearest other places, nearest
//! first. Built once per run from a set of geocoded places and then read by
//! the page generator through [`lookup_nearby`].
//!
//! Note that "nearby" is not symmetric: Q can be among P's nearest places
//! while P is not among Q's.

pub mod builder;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use builder::{build_cache, nearest, CacheBuild, ExcludedPlace};

/// Place name -> nearest other place names, nearest first
///
/// Keys are kept ordered so the serialized file is stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NearbyCache {
    entries: BTreeMap<String, Vec<String>>,
}

impl NearbyCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nearby list for a place, returning the previous list
    pub fn insert(&mut self, name: impl Into<String>, nearby: Vec<String>) -> Option<Vec<String>> {
        self.entries.insert(name.into(), nearby)
    }

    /// Nearby list for a place, if cached
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Number of places in the cache
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over places and their nearby lists, ordered by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, nearby)| (name.as_str(), nearby.as_slice()))
    }
}

impl FromIterator<(String, Vec<String>)> for NearbyCache {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Nearby places for `name`, or an empty list if it isn't cached
pub fn lookup_nearby<'a>(cache: &'a NearbyCache, name: &str) -> &'a [String] {
    cache.get(name).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_present() {
        let mut cache = NearbyCache::new();
        cache.insert("Bondi", vec!["Bronte".to_string(), "Tamarama".to_string()]);

        assert_eq!(lookup_nearby(&cache, "Bondi"), ["Bronte", "Tamarama"]);
    }

    #[test]
    fn test_lookup_missing_is_empty() {
        let cache = NearbyCache::new();
        assert!(lookup_nearby(&cache, "Nonexistent").is_empty());
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let cache: NearbyCache = vec![
            ("Bronte".to_string(), vec!["Bondi".to_string()]),
            ("Bondi".to_string(), vec!["Bronte".to_string()]),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&cache).unwrap();
        assert_eq!(json, r#"{"Bondi":["Bronte"],"Bronte":["Bondi"]}"#);

        let parsed: NearbyCache = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cache);
    }

    #[test]
    fn test_iter_is_ordered() {
        let mut cache = NearbyCache::new();
        cache.insert("Manly", vec![]);
        cache.insert("Balmoral", vec![]);

        let names: Vec<&str> = cache.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Balmoral", "Manly"]);
        assert_eq!(cache.len(), 2);
    }
}
