//! One-shot catalog load from a feed.

use fourw_core::error::QuizError;
use fourw_core::feed::CatalogFeed;
use tracing::{info, warn};

use crate::domain::catalog::Catalog;

/// Fetches the feed document and parses it into a `Catalog`.
///
/// There is no retry: a failure here is terminal for the session and must be
/// reported to the player before any round begins.
///
/// # Errors
///
/// Returns `QuizError::DataLoad` if the feed is unreachable or the document
/// is structurally invalid.
pub async fn load(feed: &dyn CatalogFeed) -> Result<Catalog, QuizError> {
    let source = feed.describe();

    let parsed = match feed.fetch().await {
        Ok(document) => Catalog::from_document(&document),
        Err(err) => Err(err),
    };

    match parsed {
        Ok(catalog) => {
            info!(
                %source,
                scenarios = catalog.scenario_count(),
                stories = catalog.story_count(),
                fingerprint = catalog.fingerprint(),
                "catalog loaded"
            );
            if catalog.is_empty() {
                warn!(%source, "catalog has no scenarios or stories; the game ends at start");
            }
            Ok(catalog)
        }
        Err(err) => {
            warn!(%source, error = %err, "catalog load failed");
            Err(err)
        }
    }
}
