//! Finder inputs and per-year outcomes.

use serde::Serialize;

use crate::error::{ReleaseError, Result};

// == Date Query ==
/// A calendar day without a year.
///
/// Month and day are range-checked independently; impossible dates such
/// as February 30 are accepted and simply match nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateQuery {
    month: u32,
    day: u32,
}

impl DateQuery {
    pub fn new(month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ReleaseError::InvalidRequest(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        if !(1..=31).contains(&day) {
            return Err(ReleaseError::InvalidRequest(format!(
                "Day must be between 1 and 31, got {}",
                day
            )));
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// `YYYY-MM-DD` for this day in `year`, zero padded and not calendar
    /// checked.
    pub fn in_year(&self, year: i32) -> String {
        format!("{}-{:02}-{:02}", year, self.month, self.day)
    }
}

// == Year Outcome ==
/// What happened to one year's external query.
#[derive(Debug, Clone, PartialEq)]
pub enum YearOutcome {
    /// Query succeeded; `kept` records passed the filter
    Fetched { year: i32, kept: usize },
    /// Query failed and the year was skipped
    Skipped { year: i32, reason: String },
}

impl YearOutcome {
    pub fn year(&self) -> i32 {
        match self {
            YearOutcome::Fetched { year, .. } | YearOutcome::Skipped { year, .. } => *year,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, YearOutcome::Skipped { .. })
    }
}

// == Finder Run ==
/// Accumulated records plus the per-year trail that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct FinderRun<T> {
    pub records: Vec<T>,
    pub years: Vec<YearOutcome>,
}

impl<T> Default for FinderRun<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            years: Vec::new(),
        }
    }
}

impl<T> FinderRun<T> {
    /// Years that were actually queried, in query order.
    pub fn queried_years(&self) -> Vec<i32> {
        self.years.iter().map(YearOutcome::year).collect()
    }

    pub fn skipped(&self) -> usize {
        self.years.iter().filter(|o| o.is_skipped()).count()
    }
}
