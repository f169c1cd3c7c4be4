//! JSON persistence for place data and the nearby cache
//!
//! Files are pretty-printed with a 4-space indent. Writes go to a temporary
//! file in the destination directory and are renamed into place, so readers
//! never observe a partially written file.

use crate::error::{Error, Result};
use crate::nearby::NearbyCache;
use crate::place::PlaceRecord;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

/// Serialize a value as 4-space indented JSON
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write a value as JSON, replacing `path` atomically
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = to_pretty_json(value)?;
    write_atomic(path, &content).map_err(|source| Error::CacheWriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = Builder::new()
        .prefix(".suburb-nearby-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    file.write_all(content)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Save geocoded places
pub fn save_places(path: &Path, places: &[PlaceRecord]) -> Result<()> {
    write_json(path, places)
}

/// Load geocoded places
pub fn load_places(path: &Path) -> Result<Vec<PlaceRecord>> {
    read_json(path)
}

/// Save the nearby cache
pub fn save_cache(path: &Path, cache: &NearbyCache) -> Result<()> {
    write_json(path, cache)
}

/// Load the nearby cache
pub fn load_cache(path: &Path) -> Result<NearbyCache> {
    read_json(path)
}
