// checkledger - app/store.rs
//
// Checklist persistence: save and restore the checklist between runs.
//
// Design principles:
// - Saves are atomic (write→temp, rename→final) so a crash during save
//   never corrupts the previous good file.
// - A missing file is a normal first run and loads an empty checklist.
// - A malformed file is surfaced as an error rather than silently
//   replaced: the checklist is user data, unlike a session cache.

use crate::core::checklist::Checklist;
use crate::util::error::StoreError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Version stamp for forward-compatibility checks.
///
/// Increment whenever `StoredChecklist` changes in a breaking way.
pub const STORE_VERSION: u32 = 1;

/// On-disk shape of the checklist file.
#[derive(Debug, Serialize, Deserialize)]
struct StoredChecklist {
    /// Schema version - must equal `STORE_VERSION` to be accepted.
    version: u32,

    /// The checklist itself. serde defaults on its fields tolerate
    /// minor additions without a version bump.
    #[serde(default)]
    checklist: Checklist,
}

/// Load the checklist from `path`.
///
/// A missing file yields an empty checklist (first run). Anything else
/// that goes wrong is an error the caller must surface; guessing at
/// corrupt user data would be worse than stopping.
pub fn load(path: &Path) -> Result<Checklist, StoreError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No checklist file; starting empty");
            return Ok(Checklist::default());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let stored: StoredChecklist =
        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    if stored.version != STORE_VERSION {
        return Err(StoreError::VersionMismatch {
            path: path.to_path_buf(),
            found: stored.version,
            expected: STORE_VERSION,
        });
    }

    tracing::debug!(path = %path.display(), items = stored.checklist.len(), "Checklist loaded");
    Ok(stored.checklist)
}

/// Save `checklist` to `path` atomically, creating parent directories
/// as needed.
pub fn save(checklist: &Checklist, path: &Path) -> Result<(), StoreError> {
    let io_err = |p: &Path| {
        let p = p.to_path_buf();
        move |source| StoreError::Io { path: p, source }
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err(parent))?;
    }

    let stored = StoredChecklist {
        version: STORE_VERSION,
        checklist: checklist.clone(),
    };
    let json = serde_json::to_string_pretty(&stored).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    // Atomic write: temp file then rename. A crash between the two
    // loses this save but never the previous file.
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(io_err(&tmp))?;
    std::fs::rename(&tmp, path).map_err(|source| {
        let _ = std::fs::remove_file(&tmp);
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::debug!(path = %path.display(), items = checklist.len(), "Checklist saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use tempfile::TempDir;

    fn ts() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-01-15 09:30:00", TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checklist.json");

        let mut original = Checklist::default();
        original.add("Buy milk", ts());
        let done_id = original.add("Walk dog", ts()).id;
        original.complete(done_id);

        save(&original, &path).expect("save should succeed");
        let loaded = load(&path).expect("load should succeed");

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.items()[0].text, "Buy milk");
        assert!(!loaded.items()[0].done);
        assert!(loaded.get(done_id).unwrap().done);

        // IDs keep advancing from the persisted counter.
        let mut loaded = loaded;
        assert_eq!(loaded.add("next", ts()).id, 2);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let loaded = load(&dir.path().join("nope.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checklist.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load(&path), Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn test_version_mismatch_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checklist.json");
        std::fs::write(&path, r#"{"version": 99, "checklist": {"items": [], "next_id": 0}}"#)
            .unwrap();

        assert!(matches!(
            load(&path),
            Err(StoreError::VersionMismatch { found: 99, .. })
        ));
    }

    #[test]
    fn test_save_creates_parent_dirs_and_no_temp_left() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("checklist.json");

        save(&Checklist::default(), &path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
