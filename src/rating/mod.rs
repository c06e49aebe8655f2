//! Rating persistence and unrated-event filtering
//!
//! This module provides the storage interface for rating records and the
//! pure filter that computes which events still lack a rating.

pub mod filter;
pub mod storage;

// Re-export commonly used types
pub use filter::filter_unrated;
pub use storage::{FileRatingStore, InMemoryRatingStore, RatingStore};
