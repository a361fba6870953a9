//! Scenario feed abstraction.
//!
//! A feed hands back the raw catalog document; parsing and validation live
//! in the catalog crate.

use std::path::Path;

use async_trait::async_trait;

use crate::error::QuizError;

/// Serialization format of a feed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    /// `{"scenarios": [...], "stories": [...]}`
    Json,
    /// The same shape written as YAML.
    Yaml,
}

impl FeedFormat {
    /// Infers the format from a file extension. Unknown or missing
    /// extensions fall back to JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                FeedFormat::Yaml
            }
            _ => FeedFormat::Json,
        }
    }
}

/// A fetched, still unparsed catalog document.
#[derive(Debug, Clone)]
pub struct FeedDocument {
    /// How `body` is encoded.
    pub format: FeedFormat,
    /// The document text.
    pub body: String,
}

/// One-shot source of the scenario catalog.
#[async_trait]
pub trait CatalogFeed: Send + Sync {
    /// Fetches the catalog document.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DataLoad` if the feed is unreachable.
    async fn fetch(&self) -> Result<FeedDocument, QuizError>;

    /// Human-readable description of where the feed comes from, for logs.
    fn describe(&self) -> String;
}
