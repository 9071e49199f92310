//! Catalog Records
//!
//! Wire shapes returned by the music and movie catalogs.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// == Release Date Precision ==
/// Granularity of an album's stated release date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseDatePrecision {
    Day,
    Month,
    Year,
    #[serde(other)]
    Unknown,
}

/// Artist credit on an album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

/// Album cover image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

/// Links to the album outside the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

// == Album Record ==
/// An album as returned by the music catalog search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

impl AlbumRecord {
    /// Parsed release date, only for day-precision records.
    pub fn release_day(&self) -> Option<NaiveDate> {
        if self.release_date_precision != ReleaseDatePrecision::Day {
            return None;
        }
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d").ok()
    }

    /// True if the album was released on `month`/`day` of any year.
    pub fn released_on(&self, month: u32, day: u32) -> bool {
        self.release_day()
            .map(|date| date.month() == month && date.day() == day)
            .unwrap_or(false)
    }

    /// Link to the album's catalog page.
    pub fn external_url(&self) -> Option<&str> {
        self.external_urls.spotify.as_deref()
    }
}

/// Envelope of the album search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumSearchResponse {
    pub albums: AlbumPage,
}

/// One page of album search results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlbumPage {
    #[serde(default)]
    pub items: Vec<AlbumRecord>,
}

// == Movie Record ==
/// A movie as returned by the movie catalog discover endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// Envelope of the discover endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default)]
    pub results: Vec<MovieRecord>,
}
