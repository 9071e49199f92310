//! API Handlers
//!
//! HTTP request handlers for each release finder endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::models::{HealthResponse, ReleasePath, ReleasesResponse, StatsResponse};
use crate::presenter::{album_section, movie_section};
use crate::service::ReleaseService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared finder service with its result caches
    pub service: Arc<ReleaseService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: ReleaseService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> std::result::Result<Self, CatalogError> {
        Ok(Self::new(ReleaseService::from_config(config)?))
    }
}

/// Handler for GET /releases/:month/:day
///
/// Runs both finders and returns the top albums and movies for the day.
/// Missing credentials fail the whole request before any lookup.
pub async fn releases_handler(
    State(state): State<AppState>,
    Path(path): Path<ReleasePath>,
) -> Result<Json<ReleasesResponse>> {
    let query = path.into_query()?;
    state.service.ensure_configured()?;

    info!(month = query.month(), day = query.day(), "Looking up birthday releases");
    let albums = state.service.kpop_releases(query).await?;
    let movies = state.service.movie_releases(query).await?;

    Ok(Json(ReleasesResponse {
        month: query.month(),
        day: query.day(),
        albums: album_section(&albums),
        movies: movie_section(&movies),
    }))
}

/// Handler for GET /stats
///
/// Returns result cache statistics for both finders.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let (kpop, movies) = state.service.cache_stats().await;

    Json(StatsResponse {
        kpop: kpop.into(),
        movies: movies.into(),
    })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
