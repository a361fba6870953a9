//! Play-order policies over the combined scenario+story sequence.

use serde::{Deserialize, Serialize};

/// How the session walks the catalog once scenarios run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Scenarios in order, then stories in order, then the game ends.
    #[default]
    Linear,
    /// Scenarios in order, then stories repeated forever. The game only ends
    /// on an explicit end, or immediately after the scenarios if there are
    /// no stories at all.
    CycleStories,
}
