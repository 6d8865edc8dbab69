/// Blog module
///
/// The query facade: the single entry point the serving layer uses to
/// obtain the current record set. Wraps the fetch → normalize pipeline
/// in the TTL cache and converts every upstream failure into an empty
/// list, so a Feishu outage renders an empty blog instead of an error
/// page.
use std::sync::Arc;

use serde::Serialize;
use tracing::error;

use crate::cache::ttl::{CacheKey, TtlCache};
use crate::config::settings::Settings;
use crate::errors::BlogError;
use crate::helpers::time::{Clock, SystemClock};
use crate::observability::metrics::get_metrics;
use crate::records::display::DisplayRecord;
use crate::records::normalize::normalize;
use crate::upstream::records::RecordFetcher;

/// Shape of the health-check cache summary.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CacheStats {
    pub entries: usize,
}

pub struct Blog {
    fetcher: RecordFetcher,
    cache: TtlCache<Arc<Vec<DisplayRecord>>>,
}

impl Blog {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self::with_clock(settings, Arc::new(SystemClock))
    }

    /// Construction seam for tests: same facade, fake time.
    pub fn with_clock(settings: Arc<Settings>, clock: Arc<dyn Clock>) -> Self {
        let client = crate::upstream::build_client();
        let cache = TtlCache::new(settings.cache_ttl_secs, clock);
        Self {
            fetcher: RecordFetcher::new(client, settings),
            cache,
        }
    }

    /// Current record set, oldest-to-newest as upstream returns it,
    /// with the index-page preview derived per call (the cached copy
    /// keeps `preview` empty).
    pub async fn list_records(&self) -> Vec<DisplayRecord> {
        let cached = self
            .cache
            .get_or_compute(CacheKey::AllRecords, || async {
                Arc::new(self.fetch_and_normalize().await)
            })
            .await;

        cached.iter().map(|r| r.with_preview()).collect()
    }

    /// Linear scan by record id. The table holds tens of entries, not
    /// thousands; no secondary index is worth maintaining.
    pub async fn get_record(&self, id: &str) -> Result<DisplayRecord, BlogError> {
        self.list_records()
            .await
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| BlogError::RecordNotFound(id.to_string()))
    }

    pub async fn cache_stats(&self) -> CacheStats {
        CacheStats {
            entries: self.cache.len().await,
        }
    }

    /// Opportunistic expiry sweep, run by the serving layer once per
    /// inbound request.
    pub async fn sweep_expired(&self) -> usize {
        self.cache.sweep().await
    }

    /// The boundary where upstream failures stop: logged, counted,
    /// and replaced by an empty list. The empty list is cached like
    /// any other result (sticky failure).
    async fn fetch_and_normalize(&self) -> Vec<DisplayRecord> {
        match self.fetcher.fetch().await {
            Ok(raw) => normalize(raw),
            Err(e) => {
                error!("upstream fetch failed: {e}");
                get_metrics()
                    .await
                    .upstream_failures
                    .with_label_values(&[e.reason()])
                    .inc();
                Vec::new()
            }
        }
    }
}
