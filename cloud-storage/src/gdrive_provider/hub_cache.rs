use crate::error::StorageResult;
use crate::gdrive_provider::drive_hub_adapter::{DriveHubAdapter, HubFactory};
use log::debug;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

struct CachedHub {
    hub: Arc<dyn DriveHubAdapter>,
    connected_at: Instant,
}

/// Keeps at most one connected hub alive for `ttl`.
///
/// A zero `ttl` disables reuse: every `acquire` goes back to the factory.
pub struct HubCache {
    factory: Arc<dyn HubFactory>,
    ttl: Duration,
    slot: Mutex<Option<CachedHub>>,
}

impl HubCache {
    pub fn new(factory: Arc<dyn HubFactory>, ttl: Duration) -> Self {
        Self {
            factory,
            ttl,
            slot: Mutex::new(None),
        }
    }

    pub fn factory(&self) -> Arc<dyn HubFactory> {
        Arc::clone(&self.factory)
    }

    pub async fn acquire(&self) -> StorageResult<Arc<dyn DriveHubAdapter>> {
        if self.ttl.is_zero() {
            return self.factory.connect().await;
        }

        let mut slot = self.slot.lock().await;
        if let Some(cached) = slot.as_ref() {
            if cached.connected_at.elapsed() < self.ttl {
                return Ok(Arc::clone(&cached.hub));
            }
            debug!("Cached Drive hub expired after {:?}", self.ttl);
        }

        let hub = self.factory.connect().await?;
        *slot = Some(CachedHub {
            hub: Arc::clone(&hub),
            connected_at: Instant::now(),
        });
        Ok(hub)
    }

    /// Drops the cached hub if it is still `failed`, so the next `acquire`
    /// reconnects. A hub cached by a later reconnect is kept.
    pub async fn invalidate(&self, failed: &Arc<dyn DriveHubAdapter>) {
        let mut slot = self.slot.lock().await;
        if slot.as_ref().is_some_and(|cached| Arc::ptr_eq(&cached.hub, failed)) {
            *slot = None;
            debug!("Dropped cached Drive hub");
        }
    }

    pub async fn is_cached(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use async_trait::async_trait;
    use bytes::Bytes;
    use google_drive3::api::File;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct NoopHub;

    #[async_trait]
    impl DriveHubAdapter for NoopHub {
        async fn fetch_files(&self, _query: &str, _page_size: i32) -> StorageResult<Vec<File>> {
            Ok(Vec::new())
        }

        async fn create_file(&self, _name: &str, _content_type: &str, _content: Bytes) -> StorageResult<File> {
            Err(StorageError::ProviderRejected("read only".to_string()))
        }
    }

    #[derive(Default)]
    struct CountingFactory {
        connects: AtomicUsize,
    }

    #[async_trait]
    impl HubFactory for CountingFactory {
        async fn connect(&self) -> StorageResult<Arc<dyn DriveHubAdapter>> {
            self.connects.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(NoopHub))
        }
    }

    #[tokio::test]
    async fn zero_ttl_connects_every_time() {
        let factory = Arc::new(CountingFactory::default());
        let cache = HubCache::new(factory.clone(), Duration::ZERO);

        cache.acquire().await.unwrap();
        cache.acquire().await.unwrap();

        assert_eq!(factory.connects.load(Ordering::SeqCst), 2);
        assert!(!cache.is_cached().await);
    }

    #[tokio::test]
    async fn reuses_hub_within_ttl() {
        let factory = Arc::new(CountingFactory::default());
        let cache = HubCache::new(factory.clone(), Duration::from_secs(60));

        cache.acquire().await.unwrap();
        cache.acquire().await.unwrap();

        assert_eq!(factory.connects.load(Ordering::SeqCst), 1);
        assert!(cache.is_cached().await);
    }

    #[tokio::test]
    async fn reconnects_after_invalidation() {
        let factory = Arc::new(CountingFactory::default());
        let cache = HubCache::new(factory.clone(), Duration::from_secs(60));

        let hub = cache.acquire().await.unwrap();
        cache.invalidate(&hub).await;
        assert!(!cache.is_cached().await);
        cache.acquire().await.unwrap();

        assert_eq!(factory.connects.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn stale_failure_keeps_newer_hub() {
        let factory = Arc::new(CountingFactory::default());
        let cache = HubCache::new(factory.clone(), Duration::from_secs(60));

        let stale = cache.acquire().await.unwrap();
        cache.invalidate(&stale).await;
        let fresh = cache.acquire().await.unwrap();

        // A late auth failure from the first hub must not evict the second.
        cache.invalidate(&stale).await;

        assert!(cache.is_cached().await);
        let reused = cache.acquire().await.unwrap();
        assert!(Arc::ptr_eq(&reused, &fresh));
        assert_eq!(factory.connects.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn reconnects_after_expiry() {
        let factory = Arc::new(CountingFactory::default());
        let cache = HubCache::new(factory.clone(), Duration::from_millis(20));

        cache.acquire().await.unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;
        cache.acquire().await.unwrap();

        assert_eq!(factory.connects.load(Ordering::SeqCst), 2);
    }
}
