//! Cache Key Module
//!
//! Identifies one memoized finder invocation.

use std::fmt;

use serde::Serialize;

// == Finder Kind ==
/// Which finder produced a cached result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinderKind {
    Kpop,
    Movies,
}

// == Client Identity ==
/// Opaque, deterministic identity of the catalog client or credential a
/// result was fetched with.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ClientIdentity(String);

impl ClientIdentity {
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }
}

impl fmt::Debug for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientIdentity(..)")
    }
}

// == Cache Key ==
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub finder: FinderKind,
    pub month: u32,
    pub day: u32,
    pub client: ClientIdentity,
}

impl CacheKey {
    pub fn new(finder: FinderKind, month: u32, day: u32, client: ClientIdentity) -> Self {
        Self {
            finder,
            month,
            day,
            client,
        }
    }
}
