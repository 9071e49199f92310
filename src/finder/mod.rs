//! Finder Module
//!
//! Year-by-year catalog lookups for a calendar day.
//!
//! Each finder issues one external call per year, sequentially, and turns
//! every call into a [`YearOutcome`]. A failing year never aborts the run.

mod kpop;
mod movies;
mod query;
mod sampler;


pub use kpop::{find_kpop_releases, kpop_query, EARLY_STOP_THRESHOLD, SEARCH_LIMIT, SEARCH_MARKET};
pub use movies::{find_movie_releases, movie_years, MOVIE_YEAR_WINDOW};
pub use query::{DateQuery, FinderRun, YearOutcome};
pub use sampler::{release_years, sample_years, FIRST_SAMPLE_YEAR, MAX_SAMPLED_YEARS};
