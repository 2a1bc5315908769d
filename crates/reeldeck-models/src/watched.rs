use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::movie::MovieSummary;

/// Personal rating scale (inclusive).
pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

/// Upper bound on stored review text, in characters.
pub const REVIEW_MAX_CHARS: usize = 2000;

/// A movie the user has marked as watched. Owns a copy of the display
/// fields so a stale catalog cache can never rewrite a personal record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchedEntry {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>,
    pub user_rating: u8, // RATING_MIN..=RATING_MAX
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    pub watched_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>, // sort / tie-break key
    pub added_by_user: bool, // hand-entered rather than promoted from the catalog
}

impl WatchedEntry {
    pub fn from_summary(
        movie: &MovieSummary,
        user_rating: u8,
        review: Option<String>,
        added_by_user: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            overview: movie.overview.clone(),
            release_date: movie.release_date.clone(),
            vote_average: movie.vote_average,
            trailer_url: movie.trailer_url.clone(),
            user_rating: clamp_rating(user_rating),
            review: clip_review(review),
            watched_at: now,
            created_at: now,
            added_by_user,
        }
    }
}

/// Merge patch for an existing watched entry. `None` fields are left
/// unchanged; an empty review string clears the stored review.
#[derive(Debug, Clone, Default)]
pub struct WatchedUpdate {
    pub user_rating: Option<u8>,
    pub review: Option<String>,
    pub overrides: Option<DisplayOverrides>,
}

/// Display-field edits, only honored for entries with `added_by_user` set.
#[derive(Debug, Clone, Default)]
pub struct DisplayOverrides {
    pub title: Option<String>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub trailer_url: Option<String>,
}

/// Force a rating into the valid scale.
pub fn clamp_rating(rating: u8) -> u8 {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        warn!(
            "Rating {} outside {}..={}, clamping",
            rating, RATING_MIN, RATING_MAX
        );
    }
    rating.clamp(RATING_MIN, RATING_MAX)
}

/// Bound review text to `REVIEW_MAX_CHARS`, cutting on a char boundary.
/// Empty input collapses to `None`.
pub fn clip_review(review: Option<String>) -> Option<String> {
    let text = review?;
    if text.is_empty() {
        return None;
    }
    if text.chars().count() <= REVIEW_MAX_CHARS {
        return Some(text);
    }
    warn!(
        "Review of {} chars exceeds limit {}, clipping",
        text.chars().count(),
        REVIEW_MAX_CHARS
    );
    Some(text.chars().take(REVIEW_MAX_CHARS).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_movie(id: u64) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {}", id),
            poster_path: Some(format!("/poster{}.jpg", id)),
            overview: Some("An overview".to_string()),
            release_date: Some("2024-01-01".to_string()),
            vote_average: Some(7.2),
            trailer_url: None,
        }
    }

    #[test]
    fn test_from_summary_copies_display_fields() {
        let movie = create_movie(42);
        let entry = WatchedEntry::from_summary(&movie, 4, Some("good".to_string()), false);
        assert_eq!(entry.id, 42);
        assert_eq!(entry.title, movie.title);
        assert_eq!(entry.poster_path, movie.poster_path);
        assert_eq!(entry.vote_average, movie.vote_average);
        assert_eq!(entry.user_rating, 4);
        assert_eq!(entry.review.as_deref(), Some("good"));
        assert!(!entry.added_by_user);
    }

    #[test]
    fn test_clamp_rating_bounds() {
        assert_eq!(clamp_rating(0), RATING_MIN);
        assert_eq!(clamp_rating(3), 3);
        assert_eq!(clamp_rating(9), RATING_MAX);
    }

    #[test]
    fn test_clip_review_respects_char_boundary() {
        let long: String = "ł".repeat(REVIEW_MAX_CHARS + 10);
        let clipped = clip_review(Some(long)).unwrap();
        assert_eq!(clipped.chars().count(), REVIEW_MAX_CHARS);
    }

    #[test]
    fn test_clip_review_empty_collapses_to_none() {
        assert_eq!(clip_review(Some(String::new())), None);
        assert_eq!(clip_review(None), None);
    }
}
