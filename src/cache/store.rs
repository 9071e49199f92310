//! Result Cache Module
//!
//! Memoizes finder results for the lifetime of the process.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell, RwLock};
use tracing::{debug, error};

use crate::cache::{CacheKey, CacheStats};
use crate::error::{ReleaseError, Result};

type Slot<T> = Arc<OnceCell<Arc<Vec<T>>>>;

// == Result Cache ==
/// Unbounded memoization map from finder invocation to its records.
///
/// Entries never expire. Concurrent callers with the same key share one
/// in-flight computation; a failed computation stores nothing. The
/// computation runs on its own task, so a caller that gives up waiting
/// does not cancel it and the result is still stored.
#[derive(Debug)]
pub struct ResultCache<T> {
    /// One slot per key, filled at most once
    slots: RwLock<HashMap<CacheKey, Slot<T>>>,
    /// Hit/miss counters, shared with in-flight computations
    stats: Arc<Mutex<CacheStats>>,
}

impl<T> Default for ResultCache<T> {
    fn default() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            stats: Arc::new(Mutex::new(CacheStats::new())),
        }
    }
}

impl<T: Send + Sync + 'static> ResultCache<T> {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Get Or Fetch ==
    /// Returns the stored records for `key`, running `fetch` only if no
    /// result has been stored yet.
    pub async fn get_or_fetch<F, Fut>(&self, key: CacheKey, fetch: F) -> Result<Arc<Vec<T>>>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Vec<T>>> + Send + 'static,
    {
        let slot = self.slot(&key).await;
        if let Some(records) = slot.get() {
            debug!(finder = ?key.finder, month = key.month, day = key.day, "Result cache hit");
            self.stats.lock().await.record_lookup(false);
            return Ok(Arc::clone(records));
        }

        let stats = Arc::clone(&self.stats);
        let task = tokio::spawn(async move {
            let mut fetched = false;
            let result = slot
                .get_or_try_init(|| {
                    fetched = true;
                    async move { fetch().await.map(Arc::new) }
                })
                .await
                .map(Arc::clone);

            if fetched {
                debug!(finder = ?key.finder, month = key.month, day = key.day, "Result cache miss");
            } else {
                debug!(finder = ?key.finder, month = key.month, day = key.day, "Result cache hit");
            }
            stats.lock().await.record_lookup(fetched);
            result
        });

        task.await.map_err(|e| {
            error!("Result cache fetch task failed: {}", e);
            ReleaseError::Internal("release lookup did not complete".to_string())
        })?
    }

    /// Finds or inserts the slot for `key`.
    async fn slot(&self, key: &CacheKey) -> Slot<T> {
        if let Some(slot) = self.slots.read().await.get(key) {
            return slot.clone();
        }

        let mut slots = self.slots.write().await;
        slots
            .entry(key.clone())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let mut stats = self.stats.lock().await.clone();
        stats.set_total_entries(self.len().await);
        stats
    }

    // == Length ==
    /// Number of keys holding a stored result.
    pub async fn len(&self) -> usize {
        self.slots
            .read()
            .await
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
