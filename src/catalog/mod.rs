//! Catalog Module
//!
//! Record types and HTTP clients for the two external catalogs.

mod movies;
mod music;
mod records;

pub use movies::{api_key_identity, DiscoverParams, MovieCatalog, TmdbClient};
pub use music::{MusicCatalog, SpotifyClient};
pub use records::{
    AlbumPage, AlbumRecord, AlbumSearchResponse, Artist, DiscoverResponse, ExternalUrls, Image,
    MovieRecord, ReleaseDatePrecision,
};
