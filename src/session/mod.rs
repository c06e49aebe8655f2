//! Interactive rating collection session
//!
//! This module drives the human-in-the-loop collection of one rating per
//! unrated event, reading scores through a prompt abstraction.

pub mod collector;
pub mod prompt;

// Re-export commonly used types
pub use collector::{RatingCollector, SessionEnd, SessionOutcome};
pub use prompt::{ConsolePrompt, PromptOutcome, ScorePrompt, ScriptedPrompt};
