#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::cache::ttl::{CacheKey, TtlCache};
    use crate::tests::common::FakeClock;

    #[tokio::test]
    async fn second_call_within_ttl_is_a_hit() {
        let clock = FakeClock::new(1_000);
        let cache: TtlCache<String> = TtlCache::new(300, clock.clone());
        let computes = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let computes = computes.clone();
            let value = cache
                .get_or_compute(CacheKey::AllRecords, || async move {
                    computes.fetch_add(1, Ordering::SeqCst);
                    "records-v1".to_string()
                })
                .await;
            assert_eq!(value, "records-v1");
        }

        assert_eq!(computes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn expiry_triggers_exactly_one_recompute() {
        let clock = FakeClock::new(1_000);
        let cache: TtlCache<u32> = TtlCache::new(300, clock.clone());
        let computes = Arc::new(AtomicUsize::new(0));

        let compute = |n: u32| {
            let computes = computes.clone();
            move || async move {
                computes.fetch_add(1, Ordering::SeqCst);
                n
            }
        };

        assert_eq!(cache.get_or_compute(CacheKey::AllRecords, compute(1)).await, 1);
        clock.advance(299);
        // still live one second before the boundary
        assert_eq!(cache.get_or_compute(CacheKey::AllRecords, compute(2)).await, 1);
        clock.advance(1);
        // now - stored_at == ttl is no longer live
        assert_eq!(cache.get_or_compute(CacheKey::AllRecords, compute(3)).await, 3);
        assert_eq!(computes.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn sweep_removes_only_expired_entries() {
        let clock = FakeClock::new(0);
        let cache: TtlCache<&'static str> = TtlCache::new(60, clock.clone());

        cache
            .get_or_compute(CacheKey::AllRecords, || async { "v" })
            .await;
        assert_eq!(cache.len().await, 1);

        clock.advance(59);
        assert_eq!(cache.sweep().await, 0);
        assert_eq!(cache.len().await, 1);

        clock.advance(1);
        assert_eq!(cache.sweep().await, 1);
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn expired_entry_is_inert_until_overwritten() {
        let clock = FakeClock::new(0);
        let cache: TtlCache<&'static str> = TtlCache::new(10, clock.clone());

        cache
            .get_or_compute(CacheKey::AllRecords, || async { "stale" })
            .await;
        clock.advance(11);

        // expired: invisible to get, still occupying the slot
        assert!(cache.get(&CacheKey::AllRecords).await.is_none());
        assert_eq!(cache.len().await, 1);

        let value = cache
            .get_or_compute(CacheKey::AllRecords, || async { "fresh" })
            .await;
        assert_eq!(value, "fresh");
        assert_eq!(cache.len().await, 1);
    }
}
