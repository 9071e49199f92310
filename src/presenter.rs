//! Presenter Module
//!
//! Post-processing between the finders' raw lists and the response body:
//! dedupe by id, sort by a single key, keep the top five.

use std::collections::HashMap;
use std::hash::Hash;

use crate::catalog::{AlbumRecord, MovieRecord};
use crate::models::{AlbumView, MovieView, ReleaseSection};

/// Maximum items shown per section.
pub const DISPLAY_LIMIT: usize = 5;

/// Poster base for movie catalog image paths.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Removes repeated ids. A repeated id keeps its first position and takes
/// the value of its last occurrence.
pub fn dedupe_by_id<T, K, F>(records: impl IntoIterator<Item = T>, id: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut unique: Vec<T> = Vec::new();

    for record in records {
        let key = id(&record);
        match positions.get(&key) {
            Some(&index) => unique[index] = record,
            None => {
                positions.insert(key, unique.len());
                unique.push(record);
            }
        }
    }

    unique
}

// == Albums ==
/// Unique albums, newest release date first, at most [`DISPLAY_LIMIT`].
pub fn top_albums(records: &[AlbumRecord]) -> Vec<AlbumRecord> {
    let mut albums = dedupe_by_id(records.iter().cloned(), |a| a.id.clone());
    albums.sort_by(|a, b| b.release_date.cmp(&a.release_date));
    albums.truncate(DISPLAY_LIMIT);
    albums
}

// == Movies ==
/// Unique movies, highest vote average first, at most [`DISPLAY_LIMIT`].
pub fn top_movies(records: &[MovieRecord]) -> Vec<MovieRecord> {
    let mut movies = dedupe_by_id(records.iter().cloned(), |m| m.id);
    movies.sort_by(|a, b| b.vote_average.total_cmp(&a.vote_average));
    movies.truncate(DISPLAY_LIMIT);
    movies
}

impl From<&AlbumRecord> for AlbumView {
    fn from(album: &AlbumRecord) -> Self {
        Self {
            id: album.id.clone(),
            name: album.name.clone(),
            artists: album
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            image_url: album.images.first().map(|i| i.url.clone()),
            release_date: album.release_date.clone(),
            external_url: album.external_url().map(str::to_string),
        }
    }
}

impl From<&MovieRecord> for MovieView {
    fn from(movie: &MovieRecord) -> Self {
        Self {
            id: movie.id,
            title: non_empty_or(&movie.title, "Untitled"),
            poster_url: movie
                .poster_path
                .as_ref()
                .filter(|p| !p.is_empty())
                .map(|p| format!("{}{}", POSTER_BASE_URL, p)),
            release_date: non_empty_or(&movie.release_date, "unknown"),
            vote_average: movie.vote_average,
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Display section for the albums found on a day.
pub fn album_section(records: &[AlbumRecord]) -> ReleaseSection<AlbumView> {
    let items: Vec<AlbumView> = top_albums(records).iter().map(AlbumView::from).collect();
    ReleaseSection::new(
        items,
        "These K-Pop albums were released on your birthday!",
        "No K-Pop albums released on your birthday were found.",
    )
}

/// Display section for the movies found on a day.
pub fn movie_section(records: &[MovieRecord]) -> ReleaseSection<MovieView> {
    let items: Vec<MovieView> = top_movies(records).iter().map(MovieView::from).collect();
    ReleaseSection::new(
        items,
        "These movies were released on your birthday!",
        "No movies released on your birthday were found.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Artist, ExternalUrls, Image, ReleaseDatePrecision};
    use crate::models::SectionStatus;

    fn album(id: &str, release_date: &str) -> AlbumRecord {
        AlbumRecord {
            id: id.to_string(),
            name: format!("Album {}", id),
            artists: vec![],
            release_date: release_date.to_string(),
            release_date_precision: ReleaseDatePrecision::Day,
            images: vec![],
            external_urls: ExternalUrls::default(),
        }
    }

    fn movie(id: i64, vote_average: f64) -> MovieRecord {
        MovieRecord {
            id,
            title: format!("Movie {}", id),
            release_date: "2010-01-01".to_string(),
            vote_average,
            poster_path: None,
        }
    }

    #[test]
    fn test_albums_deduped_and_sorted() {
        let records = vec![
            album("a", "2012-03-01"),
            album("a", "2012-03-01"),
            album("b", "2015-03-01"),
        ];
        let ids: Vec<_> = top_albums(&records).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_movies_sorted_by_vote() {
        let ids: Vec<_> = top_movies(&[movie(1, 7.2), movie(2, 9.0)])
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_truncated_to_five() {
        let records: Vec<_> = (0..9).map(|i| movie(i, i as f64)).collect();
        let top = top_movies(&records);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].id, 8);
        assert_eq!(top[4].id, 4);
    }

    #[test]
    fn test_dedupe_last_value_first_position() {
        let records = vec![(1, "first"), (2, "x"), (1, "last")];
        let unique = dedupe_by_id(records, |r| r.0);
        assert_eq!(unique, vec![(1, "last"), (2, "x")]);
    }

    #[test]
    fn test_album_view() {
        let mut record = album("a", "2012-03-01");
        record.artists = vec![
            Artist { name: "Jennie".to_string() },
            Artist { name: "Lisa".to_string() },
        ];
        record.images = vec![
            Image { url: "https://img/large".to_string() },
            Image { url: "https://img/small".to_string() },
        ];
        record.external_urls.spotify = Some("https://open.spotify.com/album/a".to_string());

        let view = AlbumView::from(&record);
        assert_eq!(view.artists, "Jennie, Lisa");
        assert_eq!(view.image_url.as_deref(), Some("https://img/large"));
        assert_eq!(view.external_url.as_deref(), Some("https://open.spotify.com/album/a"));
    }

    #[test]
    fn test_movie_view_fallbacks() {
        let record = MovieRecord {
            id: 3,
            title: String::new(),
            release_date: String::new(),
            vote_average: 0.0,
            poster_path: Some("/p.jpg".to_string()),
        };
        let view = MovieView::from(&record);
        assert_eq!(view.title, "Untitled");
        assert_eq!(view.release_date, "unknown");
        assert_eq!(view.poster_url.as_deref(), Some("https://image.tmdb.org/t/p/w500/p.jpg"));
    }

    #[test]
    fn test_empty_section_not_found() {
        let section = album_section(&[]);
        assert_eq!(section.status, SectionStatus::NotFound);
        assert!(section.items.is_empty());

        let section = movie_section(&[movie(1, 5.0)]);
        assert_eq!(section.status, SectionStatus::Found);
        assert_eq!(section.items.len(), 1);
    }
}
