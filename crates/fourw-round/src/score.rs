//! Scoring outcome of one submitted round.

use fourw_core::category::Category;
use serde::{Deserialize, Serialize};

/// How one category was answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutcome {
    /// The category.
    pub category: Category,
    /// Text the player placed.
    pub placed: String,
    /// The item's correct answer.
    pub expected: String,
    /// `placed == expected`.
    pub correct: bool,
}

/// Per-category correctness of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// One entry per category, in presentation order.
    pub outcomes: Vec<CategoryOutcome>,
    /// Number of correct categories, 0..=4.
    pub correct_count: u32,
}

impl ScoreResult {
    /// Builds the result from per-category outcomes.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_outcomes(outcomes: Vec<CategoryOutcome>) -> Self {
        let correct_count = outcomes.iter().filter(|o| o.correct).count() as u32;
        Self {
            outcomes,
            correct_count,
        }
    }

    /// `true` if every category was answered correctly.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.correct_count as usize == Category::ALL.len()
    }

    /// One feedback line per category, e.g. `✓ Correct who`.
    #[must_use]
    pub fn feedback_lines(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .map(|o| {
                if o.correct {
                    format!("✓ Correct {}", o.category)
                } else {
                    format!("✗ Incorrect {}", o.category)
                }
            })
            .collect()
    }
}
