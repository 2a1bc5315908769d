use reeldeck_catalog::{CatalogError, CatalogSource};
use reeldeck_models::MovieSummary;
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::library::MovieLibrary;

/// Prefetch fires once the filtered queue is this short, hiding network
/// latency behind the remaining swipe-able cards.
pub const PREFETCH_THRESHOLD: usize = 3;

/// The swipe queue engine: accumulates catalog pages, derives the live
/// candidate queue by filtering out everything in the user's lists, and
/// consumes it through commit-left / commit-right events.
///
/// State transitions run to completion per event; the only suspension
/// points are the fetch conveniences at the bottom, guarded by `loading`.
pub struct SwipeDeck {
    raw_catalog: Vec<MovieSummary>,
    page: u32,
    loading: bool,
    // Ids decided by a swipe this session. Kept separately from the lists
    // so a skipped movie cannot resurface on refetch overlap.
    committed: HashSet<u64>,
}

impl SwipeDeck {
    pub fn new() -> Self {
        Self {
            raw_catalog: Vec::new(),
            page: 0,
            loading: false,
            committed: HashSet::new(),
        }
    }

    /// All fetched pages concatenated, in fetch order.
    pub fn catalog(&self) -> &[MovieSummary] {
        &self.raw_catalog
    }

    /// Last fetched page number; 0 before any fetch completes.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The live candidate sequence: catalog order, minus anything already
    /// liked or watched.
    pub fn queue<'a>(&'a self, library: &MovieLibrary) -> Vec<&'a MovieSummary> {
        let excluded = library.excluded_ids();
        self.raw_catalog
            .iter()
            .filter(|m| !excluded.contains(&m.id))
            .collect()
    }

    /// The card currently on top.
    pub fn head<'a>(&'a self, library: &MovieLibrary) -> Option<&'a MovieSummary> {
        let excluded = library.excluded_ids();
        self.raw_catalog.iter().find(|m| !excluded.contains(&m.id))
    }

    /// Like the top card. The movie joins the liked list and leaves the raw
    /// catalog in the same step, so no observable state has it both liked
    /// and queued. No-op on an empty queue.
    pub fn commit_right(&mut self, library: &mut MovieLibrary) -> Option<MovieSummary> {
        let movie = self.head(library)?.clone();
        library.liked.add(movie.clone());
        self.dismiss(movie.id);
        debug!("Swipe right: liked movie {} ({})", movie.id, movie.title);
        Some(movie)
    }

    /// Skip the top card. Removed from the raw catalog and remembered for
    /// the session, but deliberately not persisted. No-op on an empty
    /// queue.
    pub fn commit_left(&mut self, library: &MovieLibrary) -> Option<MovieSummary> {
        let movie = self.head(library)?.clone();
        self.dismiss(movie.id);
        debug!("Swipe left: skipped movie {} ({})", movie.id, movie.title);
        Some(movie)
    }

    fn dismiss(&mut self, id: u64) {
        self.committed.insert(id);
        self.raw_catalog.retain(|m| m.id != id);
    }

    /// Which page to fetch next, if any. Yields once the queue has drained
    /// to the threshold and no fetch is outstanding; the driver checks this
    /// after every queue-affecting event, not only on startup.
    pub fn next_page_wanted(&self, library: &MovieLibrary) -> Option<u32> {
        if self.loading {
            return None;
        }
        if self.queue(library).len() <= PREFETCH_THRESHOLD {
            Some(self.page + 1)
        } else {
            None
        }
    }

    /// A fetch for `page` went out. Guards against a second concurrent
    /// prefetch; swipe commits stay allowed while loading.
    pub fn fetch_started(&mut self, page: u32) {
        debug!("Catalog fetch started for page {}", page);
        self.loading = true;
    }

    /// A fetch response arrived. Page 1 replaces the accumulated catalog
    /// (restart/refresh without duplicate buildup); later pages append.
    /// Appending deduplicates by id: committed ids are dropped, a known id
    /// keeps its queue position but takes the newer copy's display fields.
    pub fn fetch_completed(&mut self, page: u32, movies: Vec<MovieSummary>) {
        self.loading = false;

        if page == 1 {
            self.raw_catalog.clear();
        }

        let incoming = movies.len();
        let mut skipped_committed = 0;
        let mut merged_existing = 0;

        for movie in movies {
            if self.committed.contains(&movie.id) {
                skipped_committed += 1;
                continue;
            }
            if let Some(existing) = self.raw_catalog.iter_mut().find(|m| m.id == movie.id) {
                // Upstream feed drift: the newest copy wins the display
                // fields, the original position stays.
                *existing = movie;
                merged_existing += 1;
                continue;
            }
            self.raw_catalog.push(movie);
        }

        self.page = page;

        info!(
            "Catalog page {} applied: incoming={}, skipped_committed={}, merged_existing={}, catalog_size={}",
            page, incoming, skipped_committed, merged_existing,
            self.raw_catalog.len()
        );
    }

    /// A fetch failed. The catalog and page counter stay untouched so the
    /// next trigger retries the same page.
    pub fn fetch_failed(&mut self, page: u32, err: &CatalogError) {
        warn!("Catalog fetch for page {} failed: {}", page, err);
        self.loading = false;
    }

    /// Fire at most one prefetch when the queue has run low. Returns
    /// whether a fetch ran; errors are retryable and leave the queue state
    /// intact.
    pub async fn prefetch_if_low<C: CatalogSource>(
        &mut self,
        source: &C,
        library: &MovieLibrary,
    ) -> Result<bool, CatalogError> {
        let Some(page) = self.next_page_wanted(library) else {
            return Ok(false);
        };
        self.fetch_started(page);
        match source.fetch_page(page).await {
            Ok(movies) => {
                self.fetch_completed(page, movies);
                Ok(true)
            }
            Err(e) => {
                self.fetch_failed(page, &e);
                Err(e)
            }
        }
    }

    /// Explicit restart: refetch page 1, replacing whatever accumulated.
    /// Skipped while another fetch is outstanding.
    pub async fn refresh<C: CatalogSource>(&mut self, source: &C) -> Result<(), CatalogError> {
        if self.loading {
            debug!("Refresh requested while a fetch is outstanding, skipping");
            return Ok(());
        }
        self.fetch_started(1);
        match source.fetch_page(1).await {
            Ok(movies) => {
                self.fetch_completed(1, movies);
                Ok(())
            }
            Err(e) => {
                self.fetch_failed(1, &e);
                Err(e)
            }
        }
    }
}

impl Default for SwipeDeck {
    fn default() -> Self {
        Self::new()
    }
}
