//! End-of-game summary.

use serde::{Deserialize, Serialize};

/// Totals reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Rounds submitted.
    pub round_count: u32,
    /// Sum of each round's correct count.
    pub score: u32,
    /// `score / (round_count * 4) * 100`; 0 when no round was submitted.
    pub accuracy: f64,
}

impl SessionSummary {
    /// Computes the summary for the given totals.
    #[must_use]
    pub fn new(round_count: u32, score: u32) -> Self {
        let accuracy = if round_count == 0 {
            0.0
        } else {
            f64::from(score) / (f64::from(round_count) * 4.0) * 100.0
        };
        Self {
            round_count,
            score,
            accuracy,
        }
    }

    /// Accuracy with two decimals, as shown on the game-over dialog.
    #[must_use]
    pub fn accuracy_display(&self) -> String {
        format!("{:.2}", self.accuracy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_is_share_of_possible_points() {
        let summary = SessionSummary::new(3, 9);
        assert!((summary.accuracy - 75.0).abs() < 1e-9);
        assert_eq!(summary.accuracy_display(), "75.00");
    }

    #[test]
    fn test_no_rounds_means_zero_accuracy() {
        let summary = SessionSummary::new(0, 0);
        assert!(summary.accuracy.abs() < f64::EPSILON);
        assert_eq!(summary.accuracy_display(), "0.00");
    }

    #[test]
    fn test_accuracy_display_rounds_to_two_decimals() {
        assert_eq!(SessionSummary::new(3, 7).accuracy_display(), "58.33");
    }
}
