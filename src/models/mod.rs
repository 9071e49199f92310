//! Request and Response models for the release finder API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing path parameters and serializing response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::ReleasePath;
pub use responses::{
    AlbumView, CacheStatsView, HealthResponse, MovieView, ReleaseSection, ReleasesResponse,
    SectionStatus, StatsResponse,
};
