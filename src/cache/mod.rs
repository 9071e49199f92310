//! Cache Module
//!
//! Process-wide memoization of finder results, keyed by finder, date and
//! client identity.

mod key;
mod stats;
mod store;

// Re-export public types
pub use key::{CacheKey, ClientIdentity, FinderKind};
pub use stats::CacheStats;
pub use store::ResultCache;
