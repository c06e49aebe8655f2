//! Common types used throughout the rating subsystem

use serde::{Deserialize, Serialize};

/// Unique identifier for events
pub type EventId = u64;

/// An externally defined item eligible for rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.id, self.name)
    }
}

/// One operator-supplied score for one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub event_id: EventId,
    pub score: f64,
}

impl Rating {
    pub fn new(event_id: EventId, score: f64) -> Self {
        Self { event_id, score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let event = Event {
            id: 42,
            name: "Rust workshop".to_string(),
        };
        assert_eq!(event.to_string(), "[42] Rust workshop");
    }

    #[test]
    fn test_rating_json_shape() {
        let rating = Rating::new(7, 8.5);
        let json = serde_json::to_string(&rating).unwrap();
        assert_eq!(json, r#"{"event_id":7,"score":8.5}"#);

        let parsed: Rating = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rating);
    }
}
