//! Feed backed by a file on disk.

use std::path::PathBuf;

use async_trait::async_trait;
use fourw_core::error::QuizError;
use fourw_core::feed::{CatalogFeed, FeedDocument, FeedFormat};

/// Reads the catalog document from a local file. The format follows the
/// file extension (`.yaml`/`.yml` for YAML, anything else JSON).
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    /// Creates a feed for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogFeed for FileFeed {
    async fn fetch(&self) -> Result<FeedDocument, QuizError> {
        let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            QuizError::DataLoad(format!("cannot read {}: {e}", self.path.display()))
        })?;
        Ok(FeedDocument {
            format: FeedFormat::from_path(&self.path),
            body,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
