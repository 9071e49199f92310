//! Music Catalog Client
//!
//! Album search against the Spotify Web API using the client-credentials
//! flow.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::ClientIdentity;
use crate::catalog::AlbumSearchResponse;
use crate::error::CatalogError;

/// Refresh the token this long before the catalog says it expires.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

// == Music Catalog Trait ==
/// An authenticated music catalog handle.
#[async_trait]
pub trait MusicCatalog: Send + Sync {
    /// Runs one album search.
    async fn search_albums(
        &self,
        query: &str,
        limit: u32,
        market: &str,
    ) -> Result<AlbumSearchResponse, CatalogError>;

    /// Stable identity used in cache keys.
    fn identity(&self) -> ClientIdentity;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    refresh_at: Instant,
}

// == Spotify Client ==
/// Spotify Web API client.
pub struct SpotifyClient {
    client: Client,
    client_id: String,
    client_secret: String,
    api_url: String,
    accounts_url: String,
    token: Mutex<Option<AccessToken>>,
}

impl SpotifyClient {
    /// Creates a client against the given API and accounts base URLs.
    ///
    /// `timeout` bounds every token exchange and search call.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        api_url: &str,
        accounts_url: &str,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_url: api_url.trim_end_matches('/').to_string(),
            accounts_url: accounts_url.trim_end_matches('/').to_string(),
            token: Mutex::new(None),
        })
    }

    // == Access Token ==
    /// Returns a valid bearer token, exchanging credentials if needed.
    async fn access_token(&self) -> Result<String, CatalogError> {
        let mut guard = self.token.lock().await;
        if let Some(token) = guard.as_ref() {
            if Instant::now() < token.refresh_at {
                return Ok(token.value.clone());
            }
        }

        debug!("Requesting Spotify access token");
        let response = self
            .client
            .post(format!("{}/api/token", self.accounts_url))
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::Auth(format!(
                "token endpoint returned {}",
                response.status().as_u16()
            )));
        }

        let body: TokenResponse = response.json().await?;
        let lifetime = Duration::from_secs(body.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
        let token = AccessToken {
            value: body.access_token,
            refresh_at: Instant::now() + lifetime,
        };
        let value = token.value.clone();
        *guard = Some(token);
        Ok(value)
    }
}

#[async_trait]
impl MusicCatalog for SpotifyClient {
    async fn search_albums(
        &self,
        query: &str,
        limit: u32,
        market: &str,
    ) -> Result<AlbumSearchResponse, CatalogError> {
        let token = self.access_token().await?;
        let limit = limit.to_string();

        let response = self
            .client
            .get(format!("{}/v1/search", self.api_url))
            .bearer_auth(token)
            .query(&[
                ("q", query),
                ("type", "album"),
                ("limit", limit.as_str()),
                ("market", market),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                endpoint: "v1/search".to_string(),
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        serde_json::from_value(body).map_err(|e| CatalogError::Malformed(e.to_string()))
    }

    fn identity(&self) -> ClientIdentity {
        ClientIdentity::new(format!("spotify:{}", self.client_id))
    }
}
