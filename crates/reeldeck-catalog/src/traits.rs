use async_trait::async_trait;
use reeldeck_models::MovieSummary;

use crate::error::CatalogError;

/// The remote movie feed as the core sees it: a paginated popularity feed
/// plus a secondary trailer lookup. Tests substitute an in-memory fake.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of the popularity feed, in upstream order. Pages are
    /// 1-based; the caller owns accumulation across pages.
    async fn fetch_page(&self, page: u32) -> Result<Vec<MovieSummary>, CatalogError>;

    /// Resolve a playable trailer URL for a movie. A well-formed response
    /// with no usable trailer is `Ok(None)`, not an error.
    async fn trailer_for(&self, movie_id: u64) -> Result<Option<String>, CatalogError>;
}
