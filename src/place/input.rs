//! Place-name input files
//!
//! Plain UTF-8 text, one place per line. Blank lines and `#` comments are
//! ignored.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read the place names listed in a file
pub fn read_names(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Input(format!("Failed to read {}: {}", path.display(), e))
    })?;

    Ok(parse_names(&content))
}

/// Split file content into place names
pub fn parse_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_names() {
        let names = parse_names("# Eastern suburbs\nBondi, NSW\r\nBronte, NSW\n\n  Tamarama, NSW  \n");
        assert_eq!(names, vec!["Bondi, NSW", "Bronte, NSW", "Tamarama, NSW"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_names("\n\n").is_empty());
    }

    #[test]
    fn test_read_names() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("demo-locations.txt");
        fs::write(&path, "Manly\nDee Why\n").unwrap();

        assert_eq!(read_names(&path).unwrap(), vec!["Manly", "Dee Why"]);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_names(&temp_dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }
}
