pub mod deck;
pub mod library;
pub mod liked;
pub mod resolver;
pub mod store;
pub mod watched;

pub use deck::{SwipeDeck, PREFETCH_THRESHOLD};
pub use library::MovieLibrary;
pub use liked::LikedMovies;
pub use resolver::{resolve_movie, trailer_url_for, ResolvedMovie};
pub use store::ListStore;
pub use watched::WatchedMovies;
