//! Domain error types.

use thiserror::Error;

use crate::category::Category;

/// Top-level error type shared by every Four W's crate.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The scenario feed could not be fetched or is structurally invalid.
    /// Fatal to the session; the shell must restart to retry.
    #[error("failed to load game data: {0}")]
    DataLoad(String),

    /// A submission was attempted while at least one slot was empty.
    #[error("please fill all answer slots before submitting (missing: {})", join_categories(.missing))]
    IncompleteAnswer {
        /// The empty categories, in presentation order.
        missing: Vec<Category>,
    },

    /// A command was issued in a phase that does not accept it, or named an
    /// option that is not part of the current round.
    #[error("validation error: {0}")]
    Validation(String),
}

fn join_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
