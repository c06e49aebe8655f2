//! Sequential collection of ratings from the operator
//!
//! One prompt per unrated event, in order; an empty line or a cancellation
//! signal ends the session early, leaving the remaining events unrated.

use crate::error::Result;
use crate::rating::RatingStore;
use crate::session::prompt::{PromptOutcome, ScorePrompt};
use crate::types::{Event, Rating};
use crate::utils::score_in_advisory_range;
use std::sync::Arc;
use tracing::{info, warn};

/// Prompt shown for every event
const SCORE_PROMPT: &str = "Rate from 0 to 10 (Enter to exit): ";

/// How a collection session terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every event was rated
    Exhausted,
    /// Operator ended the session with an empty line
    EndOfSession,
    /// Operator cancelled the session (Ctrl-C / Ctrl-D)
    Cancelled,
}

/// Terminal state of one collection session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Number of ratings persisted before termination
    pub ratings_saved: usize,
    pub end: SessionEnd,
}

/// Drives the interactive collection loop, persisting each collected rating
/// through the store before moving on to the next event.
pub struct RatingCollector {
    store: Arc<dyn RatingStore>,
    prompt: Box<dyn ScorePrompt>,
}

impl RatingCollector {
    pub fn new(store: Arc<dyn RatingStore>, prompt: Box<dyn ScorePrompt>) -> Self {
        Self { store, prompt }
    }

    /// Collect and persist one rating per event, in order, until the list is
    /// exhausted or the operator leaves. Ratings saved before an early exit
    /// are kept.
    pub fn run(&mut self, events: &[Event]) -> Result<SessionOutcome> {
        let total = events.len();
        let mut ratings_saved = 0;

        for (i, event) in events.iter().enumerate() {
            println!("\nEvent ({}/{}):\n  {}", i + 1, total, event);

            match self.prompt.read_score(SCORE_PROMPT)? {
                PromptOutcome::Score(score) => {
                    if !score_in_advisory_range(score) {
                        warn!("Score {} is outside the advisory 0-10 range", score);
                    }

                    let rating = Rating::new(event.id, score);
                    println!("Saving rating '{}' for event '{}'...", rating.score, event.name);
                    self.store.save(&rating)?;
                    ratings_saved += 1;
                }
                PromptOutcome::EndOfSession => {
                    println!("Exiting.");
                    info!(
                        "Session ended by operator after {} of {} event(s)",
                        ratings_saved, total
                    );
                    return Ok(SessionOutcome {
                        ratings_saved,
                        end: SessionEnd::EndOfSession,
                    });
                }
                PromptOutcome::Cancelled => {
                    println!("\nSession cancelled.");
                    info!(
                        "Session cancelled after {} of {} event(s)",
                        ratings_saved, total
                    );
                    return Ok(SessionOutcome {
                        ratings_saved,
                        end: SessionEnd::Cancelled,
                    });
                }
            }
        }

        info!("Rated all {} event(s)", total);
        Ok(SessionOutcome {
            ratings_saved,
            end: SessionEnd::Exhausted,
        })
    }
}
