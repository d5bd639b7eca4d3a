//! Writes `metadata.json` at the target root

use std::fs;
use std::path::Path;

use crate::domain::Metadata;
use crate::error::{self, Result};

/// Serialize `metadata` as single-line JSON to `path`, replacing any existing file.
pub fn write_metadata(path: &Path, metadata: &Metadata) -> Result<()> {
    let json = serde_json::to_string(metadata)?;
    fs::write(path, json).map_err(|e| error::metadata_write_failed(path, &e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GamepackError;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_write_metadata_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("metadata.json");

        write_metadata(
            &path,
            &Metadata::new(vec!["snake".to_string(), "pong".to_string()]),
        )
        .unwrap();

        assert_eq!(
            read_json(&path),
            json!({"gameNames": ["snake", "pong"], "numberOfGames": 2})
        );
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_write_metadata_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("metadata.json");

        write_metadata(&path, &Metadata::new(Vec::new())).unwrap();

        assert_eq!(
            read_json(&path),
            json!({"gameNames": [], "numberOfGames": 0})
        );
    }

    #[test]
    fn test_write_metadata_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("metadata.json");
        fs::write(&path, "{\"old\": true, \"padding\": \"xxxxxxxxxxxxxxxxxxxxxxxx\"}").unwrap();

        write_metadata(&path, &Metadata::new(vec!["demo".to_string()])).unwrap();

        assert_eq!(
            read_json(&path),
            json!({"gameNames": ["demo"], "numberOfGames": 1})
        );
    }

    #[test]
    fn test_write_metadata_missing_parent_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing/metadata.json");

        let err = write_metadata(&path, &Metadata::new(Vec::new())).unwrap_err();

        assert!(matches!(err, GamepackError::MetadataWriteFailed { .. }));
    }
}
