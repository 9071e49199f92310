//! Release Service
//!
//! Owns the catalog clients, the credential, the result caches and the
//! sampling RNG, and exposes the two cached finders.

use std::sync::Arc;
use std::time::Duration;

use chrono::Datelike;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tracing::info;

use crate::cache::{CacheKey, CacheStats, FinderKind, ResultCache};
use crate::catalog::{
    api_key_identity, AlbumRecord, MovieCatalog, MovieRecord, MusicCatalog, SpotifyClient,
    TmdbClient,
};
use crate::config::Config;
use crate::error::{CatalogError, ReleaseError, Result};
use crate::finder::{find_kpop_releases, find_movie_releases, release_years, DateQuery};

type YearSource = Arc<dyn Fn() -> i32 + Send + Sync>;

// == Release Service ==
pub struct ReleaseService {
    /// None when the music credentials are not configured
    music: Option<Arc<dyn MusicCatalog>>,
    movies: Arc<dyn MovieCatalog>,
    tmdb_api_key: String,
    album_cache: ResultCache<AlbumRecord>,
    movie_cache: ResultCache<MovieRecord>,
    rng: Arc<Mutex<StdRng>>,
    current_year: YearSource,
}

impl ReleaseService {
    // == Constructor ==
    /// Creates a service over the given catalogs. The current year is read
    /// from the local clock on every lookup.
    pub fn new(
        music: Option<Arc<dyn MusicCatalog>>,
        movies: Arc<dyn MovieCatalog>,
        tmdb_api_key: impl Into<String>,
        rng: StdRng,
    ) -> Self {
        Self {
            music,
            movies,
            tmdb_api_key: tmdb_api_key.into(),
            album_cache: ResultCache::new(),
            movie_cache: ResultCache::new(),
            rng: Arc::new(Mutex::new(rng)),
            current_year: Arc::new(|| chrono::Local::now().year()),
        }
    }

    /// Builds the Spotify and TMDb clients described by `config`.
    pub fn from_config(config: &Config) -> std::result::Result<Self, CatalogError> {
        let music: Option<Arc<dyn MusicCatalog>> = if config.has_music_credentials() {
            Some(Arc::new(SpotifyClient::new(
                config.spotify_client_id.clone(),
                config.spotify_client_secret.clone(),
                &config.spotify_api_url,
                &config.spotify_accounts_url,
                Duration::from_secs(config.music_timeout),
            )?))
        } else {
            None
        };
        let movies = Arc::new(TmdbClient::new(
            &config.tmdb_api_url,
            Duration::from_secs(config.movie_timeout),
        )?);
        let rng = match config.year_sample_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self::new(music, movies, config.tmdb_api_key.clone(), rng))
    }

    /// Pins the current year instead of reading the clock.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Arc::new(move || year);
        self
    }

    // == Credentials ==
    /// Fails with a configuration error naming every missing credential.
    pub fn ensure_configured(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.music.is_none() {
            missing.push("SPOTIFY_CLIENT_ID/SPOTIFY_CLIENT_SECRET");
        }
        if self.tmdb_api_key.is_empty() {
            missing.push("TMDB_API_KEY");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ReleaseError::Configuration(format!(
                "API credentials not found: {}",
                missing.join(", ")
            )))
        }
    }

    // == K-Pop Releases ==
    /// Day-matching K-Pop albums from a sample of past years, memoized per
    /// (month, day, client).
    pub async fn kpop_releases(&self, query: DateQuery) -> Result<Arc<Vec<AlbumRecord>>> {
        let music = self.music.as_ref().ok_or_else(|| {
            ReleaseError::Configuration("Spotify credentials are not set".to_string())
        })?;
        let key = CacheKey::new(FinderKind::Kpop, query.month(), query.day(), music.identity());
        let music = Arc::clone(music);
        let rng = Arc::clone(&self.rng);
        let current_year = Arc::clone(&self.current_year);

        self.album_cache
            .get_or_fetch(key, move || async move {
                let years = {
                    let mut rng = rng.lock().await;
                    release_years(&mut *rng, current_year())
                };
                let run = find_kpop_releases(&*music, query, &years).await;
                info!(
                    month = query.month(),
                    day = query.day(),
                    years = run.years.len(),
                    skipped = run.skipped(),
                    found = run.records.len(),
                    "K-Pop search finished"
                );
                Ok::<_, ReleaseError>(run.records)
            })
            .await
    }

    // == Movie Releases ==
    /// Movies released on the day in each of the last twenty years,
    /// memoized per (month, day, api key).
    pub async fn movie_releases(&self, query: DateQuery) -> Result<Arc<Vec<MovieRecord>>> {
        let key = CacheKey::new(
            FinderKind::Movies,
            query.month(),
            query.day(),
            api_key_identity(&self.tmdb_api_key),
        );
        let movies = Arc::clone(&self.movies);
        let api_key = self.tmdb_api_key.clone();
        let current_year = Arc::clone(&self.current_year);

        self.movie_cache
            .get_or_fetch(key, move || async move {
                let run = find_movie_releases(&*movies, &api_key, query, current_year()).await?;
                info!(
                    month = query.month(),
                    day = query.day(),
                    skipped = run.skipped(),
                    found = run.records.len(),
                    "Movie discovery finished"
                );
                Ok::<_, ReleaseError>(run.records)
            })
            .await
    }

    // == Stats ==
    /// Cache statistics for the K-Pop and movie finders.
    pub async fn cache_stats(&self) -> (CacheStats, CacheStats) {
        (self.album_cache.stats().await, self.movie_cache.stats().await)
    }
}
