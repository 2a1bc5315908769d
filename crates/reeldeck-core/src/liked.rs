use reeldeck_models::MovieSummary;
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::store::ListStore;

const LIST_KEY: &str = "liked";

/// Movies the user swiped right on. Unique by id, insertion order
/// preserved; persisted on every mutation once the initial load has run.
pub struct LikedMovies {
    store: ListStore,
    movies: Vec<MovieSummary>,
    loaded: bool,
}

impl LikedMovies {
    pub fn new(store: ListStore) -> Self {
        Self {
            store,
            movies: Vec::new(),
            loaded: false,
        }
    }

    /// Read the persisted list. Must run before any mutation is allowed to
    /// persist, or an empty startup state would clobber the stored one.
    pub fn load(&mut self) {
        self.movies = self.store.load(LIST_KEY);
        self.loaded = true;
        info!("Loaded {} liked movies", self.movies.len());
    }

    pub fn movies(&self) -> &[MovieSummary] {
        &self.movies
    }

    pub fn get(&self, id: u64) -> Option<&MovieSummary> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.movies.iter().any(|m| m.id == id)
    }

    pub fn ids(&self) -> HashSet<u64> {
        self.movies.iter().map(|m| m.id).collect()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Append a movie; a duplicate id is a no-op.
    pub fn add(&mut self, movie: MovieSummary) {
        if self.contains(movie.id) {
            debug!("Liked add: id {} already present, skipping", movie.id);
            return;
        }
        self.movies.push(movie);
        self.persist();
    }

    /// Remove by id; absent ids are a no-op.
    pub fn remove(&mut self, id: u64) {
        let before = self.movies.len();
        self.movies.retain(|m| m.id != id);
        if self.movies.len() == before {
            debug!("Liked remove: id {} not present, skipping", id);
            return;
        }
        self.persist();
    }

    fn persist(&self) {
        if !self.loaded {
            debug!("Liked list not loaded yet, suppressing persist");
            return;
        }
        if let Err(e) = self.store.save(LIST_KEY, &self.movies) {
            warn!("Failed to persist liked list: {:#}", e);
        }
    }
}
