use reeldeck_models::{clamp_rating, clip_review, MovieSummary, WatchedEntry, WatchedUpdate};
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::store::ListStore;

const LIST_KEY: &str = "watched";

/// Movies the user has watched, most-recent-first, each with a personal
/// rating and optional review. Unique by id; persisted on every mutation
/// once the initial load has run.
pub struct WatchedMovies {
    store: ListStore,
    entries: Vec<WatchedEntry>,
    loaded: bool,
}

impl WatchedMovies {
    pub fn new(store: ListStore) -> Self {
        Self {
            store,
            entries: Vec::new(),
            loaded: false,
        }
    }

    pub fn load(&mut self) {
        self.entries = self.store.load(LIST_KEY);
        self.loaded = true;
        info!("Loaded {} watched entries", self.entries.len());
    }

    pub fn entries(&self) -> &[WatchedEntry] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&WatchedEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn ids(&self) -> HashSet<u64> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create an entry from a catalog/liked summary or a hand-entered
    /// movie. A duplicate id is a no-op returning false, which also guards
    /// against double promotion.
    pub fn add_from_source(
        &mut self,
        movie: &MovieSummary,
        user_rating: u8,
        review: Option<String>,
        added_by_user: bool,
    ) -> bool {
        if self.contains(movie.id) {
            debug!("Watched add: id {} already present, skipping", movie.id);
            return false;
        }
        let entry = WatchedEntry::from_summary(movie, user_rating, review, added_by_user);
        self.entries.insert(0, entry);
        self.persist();
        true
    }

    /// Merge an update into an existing entry. Fields left `None` are
    /// unchanged; an empty review string clears the review. Display-field
    /// overrides only apply to user-added entries; catalog-sourced entries
    /// keep the feed's copy.
    pub fn update(&mut self, id: u64, update: WatchedUpdate) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            debug!("Watched update: id {} not present, skipping", id);
            return false;
        };

        if let Some(rating) = update.user_rating {
            entry.user_rating = clamp_rating(rating);
        }
        if let Some(review) = update.review {
            entry.review = clip_review(Some(review));
        }
        if let Some(overrides) = update.overrides {
            if entry.added_by_user {
                if let Some(title) = overrides.title {
                    entry.title = title;
                }
                if let Some(poster_path) = overrides.poster_path {
                    entry.poster_path = Some(poster_path);
                }
                if let Some(overview) = overrides.overview {
                    entry.overview = Some(overview);
                }
                if let Some(trailer_url) = overrides.trailer_url {
                    entry.trailer_url = Some(trailer_url);
                }
            } else {
                warn!(
                    "Ignoring display overrides for catalog-sourced watched entry {}",
                    id
                );
            }
        }

        self.persist();
        true
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            debug!("Watched remove: id {} not present, skipping", id);
            return false;
        }
        self.persist();
        true
    }

    fn persist(&self) {
        if !self.loaded {
            debug!("Watched list not loaded yet, suppressing persist");
            return;
        }
        if let Err(e) = self.store.save(LIST_KEY, &self.entries) {
            warn!("Failed to persist watched list: {:#}", e);
        }
    }
}
