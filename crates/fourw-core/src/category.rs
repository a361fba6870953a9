//! The four answer categories every scenario is built around.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four fixed answer slots.
///
/// Variants are declared in presentation order, so the derived `Ord` sorts
/// `Who < What < When < Why`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Who is involved.
    Who,
    /// What happened.
    What,
    /// When it happened.
    When,
    /// Why it happened.
    Why,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 4] = [Category::Who, Category::What, Category::When, Category::Why];

    /// Returns the lower-case name used in data feeds and feedback text.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Who => "who",
            Category::What => "what",
            Category::When => "when",
            Category::Why => "why",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
