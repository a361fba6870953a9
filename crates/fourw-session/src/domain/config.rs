//! Session configuration supplied by the embedding shell.

use fourw_catalog::domain::traversal::Traversal;
use serde::{Deserialize, Serialize};

/// Tunables for a game session. Every field has a default, so an empty
/// document (`{}`) is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Play order once scenarios are exhausted.
    pub traversal: Traversal,
}
