//! Movie Catalog Client
//!
//! Date-range discovery against the TMDb v3 API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::cache::ClientIdentity;
use crate::catalog::DiscoverResponse;
use crate::error::CatalogError;

// == Discover Parameters ==
/// Query parameters of one discover call, minus the API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverParams {
    pub language: String,
    pub region: String,
    pub sort_by: String,
    /// Inclusive lower bound, `YYYY-MM-DD`
    pub release_date_gte: String,
    /// Inclusive upper bound, `YYYY-MM-DD`
    pub release_date_lte: String,
}

impl DiscoverParams {
    /// Korean-market, popularity-sorted query for an exact release date.
    pub fn exact_date(date: impl Into<String>) -> Self {
        let date = date.into();
        Self {
            language: "ko-KR".to_string(),
            region: "KR".to_string(),
            sort_by: "popularity.desc".to_string(),
            release_date_gte: date.clone(),
            release_date_lte: date,
        }
    }
}

// == Movie Catalog Trait ==
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Runs one discover query.
    async fn discover_movies(
        &self,
        api_key: &str,
        params: &DiscoverParams,
    ) -> Result<DiscoverResponse, CatalogError>;
}

// == TMDb Client ==
/// TMDb API client. Every call carries the configured timeout.
pub struct TmdbClient {
    client: Client,
    api_url: String,
}

impl TmdbClient {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn discover_movies(
        &self,
        api_key: &str,
        params: &DiscoverParams,
    ) -> Result<DiscoverResponse, CatalogError> {
        let response = self
            .client
            .get(format!("{}/3/discover/movie", self.api_url))
            .query(&[
                ("api_key", api_key),
                ("language", params.language.as_str()),
                ("region", params.region.as_str()),
                ("sort_by", params.sort_by.as_str()),
                ("primary_release_date.gte", params.release_date_gte.as_str()),
                ("primary_release_date.lte", params.release_date_lte.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                endpoint: "3/discover/movie".to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

/// Cache identity for a movie API key.
///
/// The key itself is never stored; two keys map to different identities
/// for the lifetime of the process.
pub fn api_key_identity(api_key: &str) -> ClientIdentity {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    api_key.hash(&mut hasher);
    ClientIdentity::new(format!("tmdb:{:016x}", hasher.finish()))
}
