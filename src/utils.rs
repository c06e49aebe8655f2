//! Utility functions for the rating subsystem

/// Advisory score range requested from the operator (not enforced)
pub const SCORE_RANGE: (f64, f64) = (0.0, 10.0);

/// Check whether a score falls inside the advisory 0-10 range
pub fn score_in_advisory_range(score: f64) -> bool {
    score >= SCORE_RANGE.0 && score <= SCORE_RANGE.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_in_advisory_range() {
        assert!(score_in_advisory_range(0.0));
        assert!(score_in_advisory_range(10.0));
        assert!(score_in_advisory_range(7.5));
        assert!(!score_in_advisory_range(-0.5));
        assert!(!score_in_advisory_range(10.1));
    }
}
