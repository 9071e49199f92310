//! Cache Statistics Module
//!
//! Counts how often a finder lookup was answered from memory versus
//! computed, per finder.

use serde::Serialize;

// == Cache Stats ==
/// Lookup counters for one finder's memo.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups answered without running the finder
    pub hits: u64,
    /// Lookups that ran the finder against the catalog
    pub misses: u64,
    /// Distinct (date, client) results currently held
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Lookup ==
    /// Counts one finished lookup; `computed` is true when the finder ran.
    pub fn record_lookup(&mut self, computed: bool) {
        if computed {
            self.misses += 1;
        } else {
            self.hits += 1;
        }
    }

    /// Share of lookups that skipped the catalog; 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
