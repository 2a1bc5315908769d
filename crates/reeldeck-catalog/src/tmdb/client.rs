use async_trait::async_trait;
use reeldeck_config::TmdbConfig;
use reeldeck_models::MovieSummary;
use reqwest::Client;

use crate::error::CatalogError;
use crate::tmdb::api;
use crate::traits::CatalogSource;

/// Production catalog source backed by the TMDB HTTP API.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl CatalogClient {
    pub fn new(config: &TmdbConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        }
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_page(&self, page: u32) -> Result<Vec<MovieSummary>, CatalogError> {
        api::get_popular(
            &self.client,
            &self.base_url,
            &self.api_key,
            &self.language,
            page,
        )
        .await
    }

    async fn trailer_for(&self, movie_id: u64) -> Result<Option<String>, CatalogError> {
        api::get_trailer(&self.client, &self.base_url, &self.api_key, movie_id).await
    }
}
