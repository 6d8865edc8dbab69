use std::sync::Arc;

use prometheus::{IntCounter, IntCounterVec, IntGauge, Opts, Registry};
use tokio::sync::OnceCell;
use tracing::info;

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the static `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE
        .get_or_init(|| async {
            info!("Initializing Metrics ...");
            Metrics::new()
        })
        .await
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Cache metrics
    pub cache_hits: IntCounter,
    pub cache_misses: IntCounter,

    // Upstream metrics
    pub upstream_requests: IntCounterVec,
    pub upstream_failures: IntCounterVec,

    // Runtime
    pub up: IntGauge,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("feishublog".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            cache_hits: IntCounter::new("cache_hits_total", "Record-set cache hits").unwrap(),
            cache_misses: IntCounter::new("cache_misses_total", "Record-set cache misses").unwrap(),

            upstream_requests: IntCounterVec::new(
                Opts::new("upstream_requests_total", "Requests sent upstream by endpoint"),
                &["endpoint"],
            )
            .unwrap(),
            upstream_failures: IntCounterVec::new(
                Opts::new("upstream_failures_total", "Upstream failures by reason"),
                &["reason"],
            )
            .unwrap(),

            up: IntGauge::new("up", "1 if service is healthy").unwrap(),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.cache_hits.clone())).unwrap();
        reg.register(Box::new(metrics.cache_misses.clone())).unwrap();
        reg.register(Box::new(metrics.upstream_requests.clone())).unwrap();
        reg.register(Box::new(metrics.upstream_failures.clone())).unwrap();
        reg.register(Box::new(metrics.up.clone())).unwrap();

        metrics
    }
}
