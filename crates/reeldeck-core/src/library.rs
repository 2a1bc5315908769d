use reeldeck_models::MovieSummary;
use std::collections::HashSet;
use tracing::debug;

use crate::liked::LikedMovies;
use crate::store::ListStore;
use crate::watched::WatchedMovies;

/// The user's personal state, owned in one place and passed explicitly to
/// the components that need it. Also the exclusion set the swipe queue
/// filters against.
pub struct MovieLibrary {
    pub liked: LikedMovies,
    pub watched: WatchedMovies,
}

impl MovieLibrary {
    pub fn new(store: &ListStore) -> Self {
        Self {
            liked: LikedMovies::new(store.clone()),
            watched: WatchedMovies::new(store.clone()),
        }
    }

    /// Load both lists from the store. Run once at startup, before any
    /// mutation.
    pub fn load(&mut self) {
        self.liked.load();
        self.watched.load();
    }

    /// Whether the id is in either personal list.
    pub fn contains(&self, id: u64) -> bool {
        self.liked.contains(id) || self.watched.contains(id)
    }

    /// Union of liked and watched ids.
    pub fn excluded_ids(&self) -> HashSet<u64> {
        let mut ids = self.liked.ids();
        ids.extend(self.watched.ids());
        ids
    }

    /// Mark a movie watched and drop it from the liked list in the same
    /// step. The liked removal runs even when the watched add was a
    /// duplicate no-op, so the two lists stay disjoint.
    pub fn promote(&mut self, movie: &MovieSummary, user_rating: u8, review: Option<String>) -> bool {
        let added = self
            .watched
            .add_from_source(movie, user_rating, review, false);
        self.liked.remove(movie.id);
        debug!(
            "Promoted movie {} to watched (newly_added={})",
            movie.id, added
        );
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reeldeck_config::PathManager;

    fn create_library(dir: &tempfile::TempDir) -> MovieLibrary {
        let paths = PathManager::with_base(dir.path().to_path_buf());
        let store = ListStore::new(&paths).unwrap();
        let mut library = MovieLibrary::new(&store);
        library.load();
        library
    }

    fn create_movie(id: u64) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {}", id),
            poster_path: None,
            overview: None,
            release_date: None,
            vote_average: None,
            trailer_url: None,
        }
    }

    #[test]
    fn test_promote_moves_liked_to_watched() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = create_library(&dir);

        let movie = create_movie(5);
        library.liked.add(movie.clone());
        assert!(library.promote(&movie, 4, Some("solid".to_string())));

        assert!(!library.liked.contains(5));
        assert!(library.watched.contains(5));
        assert_eq!(library.watched.get(5).unwrap().user_rating, 4);
    }

    #[test]
    fn test_promote_from_catalog_without_liked_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = create_library(&dir);

        let movie = create_movie(6);
        assert!(library.promote(&movie, 3, None));
        assert!(library.watched.contains(6));
        assert!(library.liked.is_empty());
    }

    #[test]
    fn test_promote_duplicate_still_restores_disjointness() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = create_library(&dir);

        let movie = create_movie(7);
        assert!(library.promote(&movie, 5, None));

        // A stray liked entry for an already-watched movie is cleaned up
        // even though the watched add is a no-op.
        library.liked.add(movie.clone());
        assert!(!library.promote(&movie, 1, None));
        assert!(!library.liked.contains(7));
        assert_eq!(library.watched.get(7).unwrap().user_rating, 5);
    }

    #[test]
    fn test_excluded_ids_union() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = create_library(&dir);

        library.liked.add(create_movie(1));
        library
            .watched
            .add_from_source(&create_movie(2), 3, None, false);

        let ids = library.excluded_ids();
        assert!(ids.contains(&1));
        assert!(ids.contains(&2));
        assert_eq!(ids.len(), 2);
        assert!(library.contains(1));
        assert!(library.contains(2));
        assert!(!library.contains(3));
    }
}
