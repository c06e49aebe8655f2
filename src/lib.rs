//! Scorebook - persistent quality ratings for events
//!
//! This crate persists operator-supplied ratings (one JSON record per event),
//! computes which events are still unrated, and drives an interactive console
//! session that collects missing scores.

pub mod config;
pub mod error;
pub mod rating;
pub mod session;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, ScorebookError};
pub use types::*;

// Re-export key components
pub use rating::{filter_unrated, FileRatingStore, InMemoryRatingStore, RatingStore};
pub use session::{ConsolePrompt, RatingCollector, ScorePrompt, SessionOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
