use serde::{Deserialize, Serialize};

/// One movie as the catalog reports it. Immutable once fetched; the watched
/// list takes its own copy of these fields rather than referencing them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>, // relative catalog path or absolute URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_url: Option<String>, // resolved lazily, not part of the feed
}

impl MovieSummary {
    /// Displayable poster URL. Absolute paths pass through untouched,
    /// relative catalog paths are joined onto the configured image base.
    pub fn poster_url(&self, image_base: &str) -> Option<String> {
        self.poster_path.as_ref().map(|path| {
            if path.starts_with("http") {
                path.clone()
            } else {
                format!("{}{}", image_base, path)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_movie(id: u64, poster_path: Option<&str>) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {}", id),
            poster_path: poster_path.map(|s| s.to_string()),
            overview: None,
            release_date: None,
            vote_average: None,
            trailer_url: None,
        }
    }

    #[test]
    fn test_poster_url_joins_relative_path() {
        let movie = create_movie(1, Some("/abc.jpg"));
        assert_eq!(
            movie.poster_url("https://image.tmdb.org/t/p/w500"),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg".to_string())
        );
    }

    #[test]
    fn test_poster_url_passes_absolute_through() {
        let movie = create_movie(1, Some("https://example.com/p.jpg"));
        assert_eq!(
            movie.poster_url("https://image.tmdb.org/t/p/w500"),
            Some("https://example.com/p.jpg".to_string())
        );
    }

    #[test]
    fn test_poster_url_none_without_path() {
        let movie = create_movie(1, None);
        assert_eq!(movie.poster_url("https://image.tmdb.org/t/p/w500"), None);
    }
}
