//! The loaded scenario catalog.

use fourw_core::error::QuizError;
use fourw_core::feed::{FeedDocument, FeedFormat};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use super::item::{CatalogItem, ItemKind, RawItem};
use super::traversal::Traversal;

/// Top-level shape of a feed document.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    scenarios: Option<Vec<RawItem>>,
    stories: Option<Vec<RawItem>>,
}

/// Ordered, immutable collection of scenarios followed by stories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    scenarios: Vec<CatalogItem>,
    stories: Vec<CatalogItem>,
    fingerprint: String,
}

impl Catalog {
    /// Parses a fetched feed document in its declared format.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DataLoad` if the document is malformed or
    /// incomplete.
    pub fn from_document(document: &FeedDocument) -> Result<Self, QuizError> {
        match document.format {
            FeedFormat::Json => Self::from_json(&document.body),
            FeedFormat::Yaml => Self::from_yaml(&document.body),
        }
    }

    /// Parses a JSON feed document.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DataLoad` if the document is not valid JSON, lacks
    /// the `scenarios` or `stories` sequence, or contains an incomplete item.
    pub fn from_json(body: &str) -> Result<Self, QuizError> {
        let raw: RawCatalog = serde_json::from_str(body)
            .map_err(|e| QuizError::DataLoad(format!("malformed JSON feed: {e}")))?;
        Self::from_raw(raw, body)
    }

    /// Parses a YAML feed document.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DataLoad` under the same conditions as
    /// [`Catalog::from_json`].
    pub fn from_yaml(body: &str) -> Result<Self, QuizError> {
        let raw: RawCatalog = serde_yaml::from_str(body)
            .map_err(|e| QuizError::DataLoad(format!("malformed YAML feed: {e}")))?;
        Self::from_raw(raw, body)
    }

    fn from_raw(raw: RawCatalog, body: &str) -> Result<Self, QuizError> {
        let scenarios = raw
            .scenarios
            .ok_or_else(|| QuizError::DataLoad("feed is missing the `scenarios` sequence".into()))?;
        let stories = raw
            .stories
            .ok_or_else(|| QuizError::DataLoad("feed is missing the `stories` sequence".into()))?;

        Ok(Self {
            scenarios: validate(scenarios, ItemKind::Scenario)?,
            stories: validate(stories, ItemKind::Story)?,
            fingerprint: fingerprint_of(body),
        })
    }

    /// Number of scenarios.
    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    /// Number of stories.
    #[must_use]
    pub fn story_count(&self) -> usize {
        self.stories.len()
    }

    /// Scenarios plus stories.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.scenarios.len() + self.stories.len()
    }

    /// Returns `true` if the catalog holds neither scenarios nor stories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Item at `index` in the combined sequence: scenarios first, then
    /// stories. `None` past the end signals end-of-content.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&CatalogItem> {
        match index.checked_sub(self.scenarios.len()) {
            None => self.scenarios.get(index),
            Some(story_index) => self.stories.get(story_index),
        }
    }

    /// Item for play position `cursor` under `traversal`.
    #[must_use]
    pub fn position(&self, cursor: usize, traversal: Traversal) -> Option<&CatalogItem> {
        match traversal {
            Traversal::Linear => self.at(cursor),
            Traversal::CycleStories => match cursor.checked_sub(self.scenarios.len()) {
                None => self.scenarios.get(cursor),
                Some(_) if self.stories.is_empty() => None,
                Some(offset) => self.stories.get(offset % self.stories.len()),
            },
        }
    }

    /// Iterates all items in combined order.
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.scenarios.iter().chain(self.stories.iter())
    }

    /// Hex SHA-256 of the document the catalog was parsed from.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn validate(raw: Vec<RawItem>, kind: ItemKind) -> Result<Vec<CatalogItem>, QuizError> {
    raw.into_iter()
        .enumerate()
        .map(|(position, item)| item.into_item(kind, position))
        .collect()
}

fn fingerprint_of(body: &str) -> String {
    format!("{:x}", Sha256::digest(body.as_bytes()))
}
