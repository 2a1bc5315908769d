use reeldeck_catalog::{CatalogError, CatalogSource};
use reeldeck_models::{MovieSummary, WatchedEntry};
use tracing::debug;

use crate::library::MovieLibrary;

/// The authoritative record for a movie id, tagged by where it was found.
#[derive(Debug, Clone)]
pub enum ResolvedMovie {
    Watched(WatchedEntry),
    Liked(MovieSummary),
    Catalog(MovieSummary),
}

impl ResolvedMovie {
    pub fn id(&self) -> u64 {
        match self {
            ResolvedMovie::Watched(e) => e.id,
            ResolvedMovie::Liked(m) | ResolvedMovie::Catalog(m) => m.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ResolvedMovie::Watched(e) => &e.title,
            ResolvedMovie::Liked(m) | ResolvedMovie::Catalog(m) => &m.title,
        }
    }

    pub fn poster_path(&self) -> Option<&str> {
        match self {
            ResolvedMovie::Watched(e) => e.poster_path.as_deref(),
            ResolvedMovie::Liked(m) | ResolvedMovie::Catalog(m) => m.poster_path.as_deref(),
        }
    }

    pub fn overview(&self) -> Option<&str> {
        match self {
            ResolvedMovie::Watched(e) => e.overview.as_deref(),
            ResolvedMovie::Liked(m) | ResolvedMovie::Catalog(m) => m.overview.as_deref(),
        }
    }

    pub fn release_date(&self) -> Option<&str> {
        match self {
            ResolvedMovie::Watched(e) => e.release_date.as_deref(),
            ResolvedMovie::Liked(m) | ResolvedMovie::Catalog(m) => m.release_date.as_deref(),
        }
    }

    pub fn trailer_url(&self) -> Option<&str> {
        match self {
            ResolvedMovie::Watched(e) => e.trailer_url.as_deref(),
            ResolvedMovie::Liked(m) | ResolvedMovie::Catalog(m) => m.trailer_url.as_deref(),
        }
    }

    pub fn is_watched(&self) -> bool {
        matches!(self, ResolvedMovie::Watched(_))
    }

    /// Rating to show on a detail card: the personal rating for a watched
    /// entry, the catalog vote average otherwise.
    pub fn display_rating(&self) -> Option<f32> {
        match self {
            ResolvedMovie::Watched(e) => Some(f32::from(e.user_rating)),
            ResolvedMovie::Liked(m) | ResolvedMovie::Catalog(m) => m.vote_average,
        }
    }
}

/// Resolve an id against the personal lists and the catalog cache, in
/// precedence order Watched, then Liked, then Catalog: a watched entry can
/// carry user-edited fields that must shadow any stale catalog copy.
pub fn resolve_movie(
    id: u64,
    library: &MovieLibrary,
    catalog: &[MovieSummary],
) -> Option<ResolvedMovie> {
    if let Some(entry) = library.watched.get(id) {
        return Some(ResolvedMovie::Watched(entry.clone()));
    }
    if let Some(movie) = library.liked.get(id) {
        return Some(ResolvedMovie::Liked(movie.clone()));
    }
    let resolved = catalog
        .iter()
        .find(|m| m.id == id)
        .map(|m| ResolvedMovie::Catalog(m.clone()));
    if resolved.is_none() {
        debug!("Movie {} not found in watched, liked, or catalog", id);
    }
    resolved
}

/// Playable trailer for a resolved movie: the stored URL when one was
/// already resolved, otherwise one lazy lookup against the catalog.
pub async fn trailer_url_for<C: CatalogSource>(
    movie: &ResolvedMovie,
    source: &C,
) -> Result<Option<String>, CatalogError> {
    if let Some(url) = movie.trailer_url() {
        return Ok(Some(url.to_string()));
    }
    source.trailer_for(movie.id()).await
}
