//! Pure computation of the events that still lack a rating

use crate::types::{Event, Rating};
use std::collections::HashSet;

/// Return the events with no matching rating, preserving input order.
///
/// Equality is by `id` value; duplicate `event_id`s among `ratings` are
/// absorbed by the set. Cannot fail for well-formed inputs.
pub fn filter_unrated(events: &[Event], ratings: &[Rating]) -> Vec<Event> {
    let rated_ids: HashSet<_> = ratings.iter().map(|rating| rating.event_id).collect();
    events
        .iter()
        .filter(|event| !rated_ids.contains(&event.id))
        .cloned()
        .collect()
}
