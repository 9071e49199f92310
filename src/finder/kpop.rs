//! K-Pop Release Finder
//!
//! Searches the music catalog year by year for K-Pop albums released on a
//! given month/day.

use tracing::{debug, warn};

use crate::catalog::{AlbumRecord, MusicCatalog};
use crate::finder::{DateQuery, FinderRun, YearOutcome};

/// Albums requested per yearly search.
pub const SEARCH_LIMIT: u32 = 50;
/// Market every search is restricted to.
pub const SEARCH_MARKET: &str = "KR";
/// Searching stops after a year that leaves more than this many matches.
pub const EARLY_STOP_THRESHOLD: usize = 5;

/// Catalog query for K-Pop albums released in `year`.
pub fn kpop_query(year: i32) -> String {
    format!("genre:\"k-pop\" year:{}", year)
}

/// Searches `years` in the given order and keeps day-precision albums
/// released on the queried month/day.
///
/// Results keep insertion order (year order, then catalog order) and may
/// repeat an id. A year whose search fails is skipped. The accumulator is
/// checked after each full year, so the run can end with more than
/// [`EARLY_STOP_THRESHOLD`] records.
pub async fn find_kpop_releases<C>(
    catalog: &C,
    query: DateQuery,
    years: &[i32],
) -> FinderRun<AlbumRecord>
where
    C: MusicCatalog + ?Sized,
{
    let mut run = FinderRun::default();

    for &year in years {
        let outcome = match catalog
            .search_albums(&kpop_query(year), SEARCH_LIMIT, SEARCH_MARKET)
            .await
        {
            Ok(response) => {
                let before = run.records.len();
                run.records.extend(
                    response
                        .albums
                        .items
                        .into_iter()
                        .filter(|album| album.released_on(query.month(), query.day())),
                );
                let kept = run.records.len() - before;
                debug!(year, kept, "K-Pop search year processed");
                YearOutcome::Fetched { year, kept }
            }
            Err(e) => {
                warn!(year, error = %e, "K-Pop search failed, skipping year");
                YearOutcome::Skipped {
                    year,
                    reason: e.to_string(),
                }
            }
        };
        run.years.push(outcome);

        if run.records.len() > EARLY_STOP_THRESHOLD {
            debug!(year, found = run.records.len(), "Enough K-Pop matches, stopping early");
            break;
        }
    }

    run
}
