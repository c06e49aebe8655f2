//! Test fixtures and helpers for integration testing

use scorebook::rating::FileRatingStore;
use scorebook::types::Event;
use std::sync::Arc;
use tempfile::TempDir;

/// Three sample events for collection-session scenarios
pub fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            name: "Opening keynote".to_string(),
        },
        Event {
            id: 2,
            name: "Lightning talks".to_string(),
        },
        Event {
            id: 3,
            name: "Closing party".to_string(),
        },
    ]
}

/// A file store rooted in a fresh temporary directory.
///
/// The returned `TempDir` guard must be kept alive for the store's lifetime.
pub fn temp_file_store() -> (TempDir, Arc<FileRatingStore>) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let store = Arc::new(FileRatingStore::new(dir.path().join("ratings")));
    (dir, store)
}
