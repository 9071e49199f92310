//! Configuration Module
//!
//! Handles loading service configuration and API credentials from
//! environment variables.

use std::env;

/// Default TMDb v3 API root
pub const DEFAULT_TMDB_API_URL: &str = "https://api.themoviedb.org";
/// Default Spotify Web API root
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com";
/// Default Spotify accounts service root (token exchange)
pub const DEFAULT_SPOTIFY_ACCOUNTS_URL: &str = "https://accounts.spotify.com";

/// Service configuration parameters.
///
/// Credentials default to empty; a missing credential is reported as a
/// configuration error per request, not at startup.
#[derive(Clone, Default)]
pub struct Config {
    /// TMDb API key
    pub tmdb_api_key: String,
    /// Spotify client id
    pub spotify_client_id: String,
    /// Spotify client secret
    pub spotify_client_secret: String,
    /// HTTP server port
    pub server_port: u16,
    /// Per-call timeout for the movie catalog in seconds
    pub movie_timeout: u64,
    /// Per-call timeout for the music catalog in seconds
    pub music_timeout: u64,
    /// Movie catalog base URL
    pub tmdb_api_url: String,
    /// Music catalog base URL
    pub spotify_api_url: String,
    /// Music catalog token endpoint base URL
    pub spotify_accounts_url: String,
    /// Optional fixed seed for year sampling
    pub year_sample_seed: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TMDB_API_KEY` - TMDb API key (default: empty)
    /// - `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET` - Spotify app credentials
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MOVIE_REQUEST_TIMEOUT` - Movie call timeout in seconds (default: 10)
    /// - `MUSIC_REQUEST_TIMEOUT` - Music call timeout in seconds (default: 5)
    /// - `TMDB_API_URL`, `SPOTIFY_API_URL`, `SPOTIFY_ACCOUNTS_URL` - base URLs
    /// - `YEAR_SAMPLE_SEED` - deterministic sampling seed (default: entropy)
    pub fn from_env() -> Self {
        let defaults = Self::with_defaults();
        Self {
            tmdb_api_key: env::var("TMDB_API_KEY").unwrap_or_default(),
            spotify_client_id: env::var("SPOTIFY_CLIENT_ID").unwrap_or_default(),
            spotify_client_secret: env::var("SPOTIFY_CLIENT_SECRET").unwrap_or_default(),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            movie_timeout: env::var("MOVIE_REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.movie_timeout),
            music_timeout: env::var("MUSIC_REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.music_timeout),
            tmdb_api_url: env::var("TMDB_API_URL").unwrap_or(defaults.tmdb_api_url),
            spotify_api_url: env::var("SPOTIFY_API_URL").unwrap_or(defaults.spotify_api_url),
            spotify_accounts_url: env::var("SPOTIFY_ACCOUNTS_URL")
                .unwrap_or(defaults.spotify_accounts_url),
            year_sample_seed: env::var("YEAR_SAMPLE_SEED")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Configuration with every non-secret field at its default.
    pub fn with_defaults() -> Self {
        Self {
            server_port: 3000,
            movie_timeout: 10,
            music_timeout: 5,
            tmdb_api_url: DEFAULT_TMDB_API_URL.to_string(),
            spotify_api_url: DEFAULT_SPOTIFY_API_URL.to_string(),
            spotify_accounts_url: DEFAULT_SPOTIFY_ACCOUNTS_URL.to_string(),
            ..Self::default()
        }
    }

    /// Returns true if both Spotify credentials are present.
    pub fn has_music_credentials(&self) -> bool {
        !self.spotify_client_id.is_empty() && !self.spotify_client_secret.is_empty()
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("tmdb_api_key", &redact(&self.tmdb_api_key))
            .field("spotify_client_id", &self.spotify_client_id)
            .field("spotify_client_secret", &redact(&self.spotify_client_secret))
            .field("server_port", &self.server_port)
            .field("movie_timeout", &self.movie_timeout)
            .field("music_timeout", &self.music_timeout)
            .field("tmdb_api_url", &self.tmdb_api_url)
            .field("spotify_api_url", &self.spotify_api_url)
            .field("spotify_accounts_url", &self.spotify_accounts_url)
            .field("year_sample_seed", &self.year_sample_seed)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}
