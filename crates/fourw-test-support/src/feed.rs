//! Test feeds — in-memory `CatalogFeed` implementations for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use fourw_core::error::QuizError;
use fourw_core::feed::{CatalogFeed, FeedDocument, FeedFormat};

/// A feed that serves a fixed document and counts how often it was fetched.
#[derive(Debug)]
pub struct StaticFeed {
    format: FeedFormat,
    body: String,
    fetches: AtomicUsize,
}

impl StaticFeed {
    /// A feed serving `body` as JSON.
    #[must_use]
    pub fn json(body: impl Into<String>) -> Self {
        Self::new(FeedFormat::Json, body)
    }

    /// A feed serving `body` as YAML.
    #[must_use]
    pub fn yaml(body: impl Into<String>) -> Self {
        Self::new(FeedFormat::Yaml, body)
    }

    fn new(format: FeedFormat, body: impl Into<String>) -> Self {
        Self {
            format,
            body: body.into(),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of `fetch` calls served.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogFeed for StaticFeed {
    async fn fetch(&self) -> Result<FeedDocument, QuizError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(FeedDocument {
            format: self.format,
            body: self.body.clone(),
        })
    }

    fn describe(&self) -> String {
        "static test feed".to_owned()
    }
}

/// A feed that is always unreachable. Useful for testing load-failure paths.
#[derive(Debug)]
pub struct FailingFeed;

#[async_trait]
impl CatalogFeed for FailingFeed {
    async fn fetch(&self) -> Result<FeedDocument, QuizError> {
        Err(QuizError::DataLoad("connection refused".into()))
    }

    fn describe(&self) -> String {
        "failing test feed".to_owned()
    }
}
