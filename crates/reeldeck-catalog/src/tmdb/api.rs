use reeldeck_models::MovieSummary;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::CatalogError;

pub const TRAILER_TYPE: &str = "Trailer";
pub const TRAILER_SITE: &str = "YouTube";

#[derive(Debug, Deserialize)]
struct PopularPage {
    results: Vec<TmdbMovie>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovie {
    id: u64,
    title: String,
    poster_path: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
    vote_average: Option<f32>,
}

impl From<TmdbMovie> for MovieSummary {
    fn from(movie: TmdbMovie) -> Self {
        MovieSummary {
            id: movie.id,
            title: movie.title,
            poster_path: movie.poster_path,
            overview: movie.overview,
            release_date: movie.release_date,
            vote_average: movie.vote_average,
            trailer_url: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct VideoList {
    results: Vec<Video>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Video {
    pub key: String,
    #[serde(rename = "type")]
    pub video_type: String,
    pub site: String,
}

/// First entry that is an actual trailer on the expected host, as a
/// playable URL. Anything else in the listing is ignored.
pub(crate) fn pick_trailer(videos: &[Video]) -> Option<String> {
    videos
        .iter()
        .find(|v| v.video_type == TRAILER_TYPE && v.site == TRAILER_SITE)
        .map(|v| format!("https://www.youtube.com/watch?v={}", v.key))
}

/// Fetch one page of the popular-movies feed.
pub async fn get_popular(
    client: &Client,
    base_url: &str,
    api_key: &str,
    language: &str,
    page: u32,
) -> Result<Vec<MovieSummary>, CatalogError> {
    if page == 0 {
        return Err(CatalogError::InvalidPage(page));
    }

    let endpoint = format!("{}/movie/popular", base_url);
    let page_param = page.to_string();
    let response = client
        .get(&endpoint)
        .query(&[
            ("api_key", api_key),
            ("language", language),
            ("page", page_param.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CatalogError::Status {
            endpoint,
            status,
            body,
        });
    }

    let page_data: PopularPage = response.json().await?;
    let movies: Vec<MovieSummary> = page_data.results.into_iter().map(Into::into).collect();

    debug!("Fetched popular page {}: {} movies", page, movies.len());

    Ok(movies)
}

/// Resolve a trailer URL via the videos listing. An empty or trailer-less
/// listing is a clean `None`; only transport/parse failures are errors.
pub async fn get_trailer(
    client: &Client,
    base_url: &str,
    api_key: &str,
    movie_id: u64,
) -> Result<Option<String>, CatalogError> {
    let endpoint = format!("{}/movie/{}/videos", base_url, movie_id);
    let response = client
        .get(&endpoint)
        .query(&[("api_key", api_key)])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CatalogError::Status {
            endpoint,
            status,
            body,
        });
    }

    let videos: VideoList = response.json().await?;
    let trailer = pick_trailer(&videos.results);

    debug!(
        "Trailer lookup for movie {}: {} videos listed, trailer_found={}",
        movie_id,
        videos.results.len(),
        trailer.is_some()
    );

    Ok(trailer)
}
