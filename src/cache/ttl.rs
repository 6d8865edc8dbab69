use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::helpers::time::Clock;
use crate::observability::metrics::get_metrics;

/// Explicit cache key per logical call signature. The blog has one
/// cached call today; keying by enum keeps collisions impossible if
/// more arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    AllRecords,
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: i64, // UNIX seconds
}

/// Time-bounded memoization of expensive computations.
///
/// An entry is live iff `now - stored_at < ttl`. Expired entries are
/// inert until swept or overwritten. Whatever the computation
/// returns gets cached — including the empty result of a failed
/// upstream call, so an outage is sticky for the rest of its ttl
/// window. That trade-off is deliberate.
#[derive(Clone)]
pub struct TtlCache<V> {
    inner: Arc<RwLock<HashMap<CacheKey, CacheEntry<V>>>>,
    ttl_secs: i64,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl_secs: ttl_secs as i64,
            clock,
        }
    }

    /// Return the live value for `key`, or run `compute` and store its
    /// result. The computation runs with no lock held, so concurrent
    /// misses may both compute (a duplicate upstream call is wasteful
    /// but harmless); before storing, the write side re-checks and a
    /// racing writer's fresh entry wins.
    pub async fn get_or_compute<F, Fut>(&self, key: CacheKey, compute: F) -> V
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = V>,
    {
        let metrics = get_metrics().await;

        if let Some(value) = self.get(&key).await {
            metrics.cache_hits.inc();
            return value;
        }
        metrics.cache_misses.inc();

        let value = compute().await;

        let mut map = self.inner.write().await;
        let now = self.clock.now_unix();
        if let Some(entry) = map.get(&key) {
            if self.is_live(entry, now) {
                return entry.value.clone();
            }
        }
        map.insert(
            key,
            CacheEntry {
                value: value.clone(),
                stored_at: now,
            },
        );
        value
    }

    pub async fn get(&self, key: &CacheKey) -> Option<V> {
        let map = self.inner.read().await;
        let now = self.clock.now_unix();
        map.get(key)
            .filter(|entry| self.is_live(entry, now))
            .map(|entry| entry.value.clone())
    }

    /// Drop every entry older than the ttl. Runs opportunistically on
    /// inbound requests; there is no sweeper thread.
    pub async fn sweep(&self) -> usize {
        let mut map = self.inner.write().await;
        let now = self.clock.now_unix();
        let before = map.len();
        map.retain(|_, entry| self.is_live(entry, now));
        let removed = before - map.len();
        if removed > 0 {
            info!(removed, "swept expired cache entries");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    fn is_live(&self, entry: &CacheEntry<V>, now: i64) -> bool {
        now - entry.stored_at < self.ttl_secs
    }
}
