//! Rating storage interface and implementations
//!
//! This module defines the interface for persisting and retrieving ratings,
//! with a file-backed implementation (one JSON record per event) and an
//! in-memory implementation for tests and embedding.

use crate::error::{Result, ScorebookError};
use crate::types::{EventId, Rating};
use anyhow::Context;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

/// Filename prefix for rating record files
const RECORD_PREFIX: &str = "rating_";

/// Filename extension for rating record files
const RECORD_EXTENSION: &str = "json";

/// Trait for rating storage operations
pub trait RatingStore: Send + Sync {
    /// Load every stored rating (order unspecified)
    fn load_all(&self) -> Result<Vec<Rating>>;

    /// Store or overwrite the rating for its event (last-write-wins)
    fn save(&self, rating: &Rating) -> Result<()>;
}

/// File-backed rating storage: one `rating_<event_id>.json` record per event
/// inside a configured directory.
#[derive(Debug, Clone)]
pub struct FileRatingStore {
    dir: PathBuf,
}

impl FileRatingStore {
    /// Create a store rooted at the given directory (created lazily on use)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The storage directory this store reads and writes
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the record for an event, derived deterministically from its id
    fn record_path(&self, event_id: EventId) -> PathBuf {
        self.dir
            .join(format!("{RECORD_PREFIX}{event_id}.{RECORD_EXTENSION}"))
    }

    /// Create the storage directory (and missing parents) if absent.
    /// Idempotent; a pre-existing directory is not an error.
    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            ScorebookError::ConfigurationError {
                message: format!(
                    "cannot create ratings directory {}: {}",
                    self.dir.display(),
                    e
                ),
            }
            .into()
        })
    }

    /// Whether a directory entry looks like a rating record file
    fn is_record_file(path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        name.starts_with(RECORD_PREFIX)
            && path.extension().and_then(|e| e.to_str()) == Some(RECORD_EXTENSION)
    }

    /// Read and deserialize a single rating record
    fn read_record(path: &Path) -> Result<Rating> {
        let contents = fs::read_to_string(path).map_err(|e| ScorebookError::MalformedRecord {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let rating =
            serde_json::from_str(&contents).map_err(|e| ScorebookError::MalformedRecord {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(rating)
    }
}

impl RatingStore for FileRatingStore {
    fn load_all(&self) -> Result<Vec<Rating>> {
        self.ensure_dir()?;

        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read ratings directory {}", self.dir.display()))?;

        let mut ratings = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| {
                    format!("failed to enumerate ratings directory {}", self.dir.display())
                })?
                .path();

            if !Self::is_record_file(&path) {
                continue;
            }

            // Policy: a record that fails to deserialize is skipped with a
            // warning so one corrupt file cannot block the rest of the load.
            match Self::read_record(&path) {
                Ok(rating) => ratings.push(rating),
                Err(e) => warn!("Skipping malformed rating record: {}", e),
            }
        }

        debug!(
            "Loaded {} rating(s) from {}",
            ratings.len(),
            self.dir.display()
        );
        Ok(ratings)
    }

    fn save(&self, rating: &Rating) -> Result<()> {
        self.ensure_dir()?;

        let path = self.record_path(rating.event_id);
        let json = serde_json::to_string(rating)
            .with_context(|| format!("failed to serialize rating for event {}", rating.event_id))?;

        // Write to a sibling temp file and rename over the target, so a
        // failed write never leaves a half-written record behind.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .with_context(|| format!("failed to write rating record {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("failed to replace rating record {}", path.display()))?;

        debug!(
            "Saved rating {} for event {} to {}",
            rating.score,
            rating.event_id,
            path.display()
        );
        Ok(())
    }
}

/// In-memory rating storage implementation
#[derive(Debug, Default)]
pub struct InMemoryRatingStore {
    ratings: RwLock<HashMap<EventId, Rating>>,
}

impl InMemoryRatingStore {
    /// Create a new empty in-memory rating store
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset ratings (for testing)
    pub fn preset(&self, ratings: Vec<Rating>) -> Result<()> {
        let mut storage = self
            .ratings
            .write()
            .map_err(|_| ScorebookError::InternalError {
                message: "Failed to acquire ratings write lock".to_string(),
            })?;

        *storage = ratings.into_iter().map(|r| (r.event_id, r)).collect();
        Ok(())
    }
}

impl RatingStore for InMemoryRatingStore {
    fn load_all(&self) -> Result<Vec<Rating>> {
        let ratings = self
            .ratings
            .read()
            .map_err(|_| ScorebookError::InternalError {
                message: "Failed to acquire ratings read lock".to_string(),
            })?;

        Ok(ratings.values().cloned().collect())
    }

    fn save(&self, rating: &Rating) -> Result<()> {
        let mut ratings = self
            .ratings
            .write()
            .map_err(|_| ScorebookError::InternalError {
                message: "Failed to acquire ratings write lock".to_string(),
            })?;

        ratings.insert(rating.event_id, rating.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, FileRatingStore) {
        let dir = TempDir::new().unwrap();
        let store = FileRatingStore::new(dir.path().join("ratings"));
        (dir, store)
    }

    #[test]
    fn test_load_creates_missing_directory() {
        let (_guard, store) = temp_store();
        assert!(!store.dir().exists());

        let ratings = store.load_all().unwrap();
        assert!(ratings.is_empty());
        assert!(store.dir().is_dir());

        // A second load against the now-existing directory still succeeds
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_guard, store) = temp_store();

        let rating = Rating::new(3, 8.5);
        store.save(&rating).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![rating]);
    }

    #[test]
    fn test_double_save_keeps_one_record() {
        let (_guard, store) = temp_store();

        let rating = Rating::new(5, 6.0);
        store.save(&rating).unwrap();
        store.save(&rating).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![rating]);
    }

    #[test]
    fn test_overwrite_is_last_write_wins() {
        let (_guard, store) = temp_store();

        store.save(&Rating::new(5, 3.0)).unwrap();
        store.save(&Rating::new(5, 7.0)).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].event_id, 5);
        assert_eq!(loaded[0].score, 7.0);
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let (_guard, store) = temp_store();

        store.save(&Rating::new(1, 9.0)).unwrap();
        fs::write(store.dir().join("rating_2.json"), "{\"event_id\": 2}").unwrap();
        fs::write(store.dir().join("rating_3.json"), "not json at all").unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![Rating::new(1, 9.0)]);
    }

    #[test]
    fn test_unrelated_files_are_ignored() {
        let (_guard, store) = temp_store();

        store.save(&Rating::new(1, 4.0)).unwrap();
        fs::write(store.dir().join("notes.txt"), "not a record").unwrap();
        fs::write(store.dir().join("summary.json"), "{}").unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![Rating::new(1, 4.0)]);
    }

    #[test]
    fn test_record_path_is_deterministic() {
        let store = FileRatingStore::new("ratings");
        assert_eq!(
            store.record_path(17),
            Path::new("ratings").join("rating_17.json")
        );
    }

    #[test]
    fn test_in_memory_store_round_trip() {
        let store = InMemoryRatingStore::new();
        assert!(store.load_all().unwrap().is_empty());

        store.save(&Rating::new(1, 2.0)).unwrap();
        store.save(&Rating::new(1, 5.0)).unwrap();
        store.save(&Rating::new(2, 9.0)).unwrap();

        let mut loaded = store.load_all().unwrap();
        loaded.sort_by_key(|r| r.event_id);
        assert_eq!(loaded, vec![Rating::new(1, 5.0), Rating::new(2, 9.0)]);
    }

    #[test]
    fn test_in_memory_preset() {
        let store = InMemoryRatingStore::new();
        store
            .preset(vec![Rating::new(1, 1.0), Rating::new(2, 2.0)])
            .unwrap();

        assert_eq!(store.load_all().unwrap().len(), 2);
    }
}
