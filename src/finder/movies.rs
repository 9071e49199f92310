//! Movie Release Finder
//!
//! Discovers movies released on a month/day across the trailing twenty
//! years.

use tracing::{debug, warn};

use crate::catalog::{DiscoverParams, MovieCatalog, MovieRecord};
use crate::error::{ReleaseError, Result};
use crate::finder::{DateQuery, FinderRun, YearOutcome};

/// Number of years searched, counting the current one.
pub const MOVIE_YEAR_WINDOW: i32 = 20;

/// Years searched for a lookup in `current_year`, newest first.
pub fn movie_years(current_year: i32) -> impl Iterator<Item = i32> {
    (current_year - MOVIE_YEAR_WINDOW + 1..=current_year).rev()
}

/// Queries every year of the window and concatenates all results.
///
/// Fails with [`ReleaseError::Configuration`] before any call if
/// `api_key` is empty. Failing years are skipped; there is no early exit.
pub async fn find_movie_releases<C>(
    catalog: &C,
    api_key: &str,
    query: DateQuery,
    current_year: i32,
) -> Result<FinderRun<MovieRecord>>
where
    C: MovieCatalog + ?Sized,
{
    if api_key.is_empty() {
        return Err(ReleaseError::Configuration(
            "TMDb API key is not set (TMDB_API_KEY)".to_string(),
        ));
    }

    let mut run = FinderRun::default();

    for year in movie_years(current_year) {
        let params = DiscoverParams::exact_date(query.in_year(year));
        let outcome = match catalog.discover_movies(api_key, &params).await {
            Ok(response) => {
                let kept = response.results.len();
                run.records.extend(response.results);
                debug!(year, kept, "Movie discovery year processed");
                YearOutcome::Fetched { year, kept }
            }
            Err(e) => {
                warn!(year, error = %e, "Movie discovery failed, skipping year");
                YearOutcome::Skipped {
                    year,
                    reason: e.to_string(),
                }
            }
        };
        run.years.push(outcome);
    }

    Ok(run)
}
