//! Scenario and story records.

use std::collections::BTreeMap;

use fourw_core::category::Category;
use fourw_core::error::QuizError;
use serde::{Deserialize, Serialize};

/// Which list of the feed an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// An entry of the `scenarios` list.
    Scenario,
    /// An entry of the `stories` list.
    Story,
}

impl ItemKind {
    /// Singular name used in validation messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Scenario => "scenario",
            ItemKind::Story => "story",
        }
    }
}

/// The four correct answers of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    /// Correct "who".
    pub who: String,
    /// Correct "what".
    pub what: String,
    /// Correct "when".
    pub when: String,
    /// Correct "why".
    pub why: String,
}

impl Answers {
    /// Returns the correct answer for `category`.
    #[must_use]
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Who => &self.who,
            Category::What => &self.what,
            Category::When => &self.when,
            Category::Why => &self.why,
        }
    }
}

/// An immutable scenario or story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Scenario or story.
    pub kind: ItemKind,
    /// Stable identifier as given by the feed.
    pub id: String,
    /// Prompt shown to the player.
    pub text: String,
    /// The unique correct answer per category.
    pub answers: Answers,
    /// Distractors per category, in feed order. Categories without an entry
    /// offer none.
    pub incorrect: BTreeMap<Category, Vec<String>>,
}

impl CatalogItem {
    /// Returns the distractors for `category`, or an empty slice.
    #[must_use]
    pub fn distractors(&self, category: Category) -> &[String] {
        self.incorrect.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns `true` if any category carries distractors.
    #[must_use]
    pub fn has_distractors(&self) -> bool {
        self.incorrect.values().any(|d| !d.is_empty())
    }
}

/// Feed identifiers may be numbers or strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// An item as it appears in the feed, before validation.
#[derive(Debug, Deserialize)]
pub(crate) struct RawItem {
    id: Option<RawId>,
    text: Option<String>,
    who: Option<String>,
    what: Option<String>,
    when: Option<String>,
    why: Option<String>,
    #[serde(default)]
    incorrect: Option<BTreeMap<Category, Vec<String>>>,
}

impl RawItem {
    /// Validates the record and converts it into a `CatalogItem`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DataLoad` if `id`, `text`, or any of the four
    /// categories is missing.
    pub(crate) fn into_item(self, kind: ItemKind, position: usize) -> Result<CatalogItem, QuizError> {
        let missing = |field: &str| {
            QuizError::DataLoad(format!(
                "{} at position {position} is missing `{field}`",
                kind.as_str()
            ))
        };

        let id = match self.id.ok_or_else(|| missing("id"))? {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        };

        Ok(CatalogItem {
            kind,
            id,
            text: self.text.ok_or_else(|| missing("text"))?,
            answers: Answers {
                who: self.who.ok_or_else(|| missing("who"))?,
                what: self.what.ok_or_else(|| missing("what"))?,
                when: self.when.ok_or_else(|| missing("when"))?,
                why: self.why.ok_or_else(|| missing("why"))?,
            },
            incorrect: self.incorrect.unwrap_or_default(),
        })
    }
}
