//! Request DTOs for the release finder API
//!
//! Defines the structure of incoming path parameters.

use serde::Deserialize;

use crate::error::Result;
use crate::finder::DateQuery;

/// Path parameters of `GET /releases/:month/:day`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReleasePath {
    /// Month, 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
}

impl ReleasePath {
    /// Validates the parameters into a [`DateQuery`].
    pub fn into_query(self) -> Result<DateQuery> {
        DateQuery::new(self.month, self.day)
    }
}
