//! Release Year Sampler
//!
//! Picks a bounded random subset of years to search.

use rand::seq::SliceRandom;
use rand::Rng;

/// Earliest year the music catalog is searched from.
pub const FIRST_SAMPLE_YEAR: i32 = 2001;

/// Maximum years searched per K-Pop lookup.
pub const MAX_SAMPLED_YEARS: usize = 10;

/// Returns up to `max` distinct years from `first..=last`, in no particular order.
///
/// A range with `max` or fewer years is returned whole. An
/// empty range yields an empty list.
pub fn sample_years<R: Rng + ?Sized>(rng: &mut R, first: i32, last: i32, max: usize) -> Vec<i32> {
    if first > last {
        return Vec::new();
    }

    let candidates: Vec<i32> = (first..=last).collect();
    let amount = candidates.len().min(max);
    candidates.choose_multiple(rng, amount).copied().collect()
}

/// Years to search for a lookup made in `current_year`: at most
/// ten of 2001 through last year.
pub fn release_years<R: Rng + ?Sized>(rng: &mut R, current_year: i32) -> Vec<i32> {
    sample_years(rng, FIRST_SAMPLE_YEAR, current_year - 1, MAX_SAMPLED_YEARS)
}
