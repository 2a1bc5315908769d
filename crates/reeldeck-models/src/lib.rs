pub mod movie;
pub mod watched;

pub use movie::MovieSummary;
pub use watched::{
    clamp_rating, clip_review, DisplayOverrides, WatchedEntry, WatchedUpdate, RATING_MAX,
    RATING_MIN, REVIEW_MAX_CHARS,
};
