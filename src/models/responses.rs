//! Response DTOs for the release finder API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// One album as shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct AlbumView {
    pub id: String,
    pub name: String,
    /// Artist names joined with ", "
    pub artists: String,
    /// First cover image, if any
    pub image_url: Option<String>,
    pub release_date: String,
    pub external_url: Option<String>,
}

/// One movie as shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct MovieView {
    pub id: i64,
    pub title: String,
    pub poster_url: Option<String>,
    pub release_date: String,
    pub vote_average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Found,
    NotFound,
}

/// A titled list of results, or an informational "not found" state
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseSection<T> {
    pub status: SectionStatus,
    pub message: String,
    pub items: Vec<T>,
}

impl<T> ReleaseSection<T> {
    /// Picks the status and message from whether `items` is empty.
    pub fn new(items: Vec<T>, found: &str, not_found: &str) -> Self {
        let (status, message) = if items.is_empty() {
            (SectionStatus::NotFound, not_found)
        } else {
            (SectionStatus::Found, found)
        };
        Self {
            status,
            message: message.to_string(),
            items,
        }
    }
}

/// Response body for `GET /releases/:month/:day`
#[derive(Debug, Clone, Serialize)]
pub struct ReleasesResponse {
    pub month: u32,
    pub day: u32,
    pub albums: ReleaseSection<AlbumView>,
    pub movies: ReleaseSection<MovieView>,
}

/// Statistics of one finder's result cache
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsView {
    pub hits: u64,
    pub misses: u64,
    pub total_entries: usize,
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsView {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub kpop: CacheStatsView,
    pub movies: CacheStatsView,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
