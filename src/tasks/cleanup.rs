//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ExpiringCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the given interval
/// between sweeps. Each sweep acquires the cache's write lock, so it
/// serializes with every other operation; no caller ever observes a
/// partially-swept state. The cache itself owns no timer: the caller owns
/// the returned handle and aborts it on shutdown.
///
/// # Arguments
/// * `cache` - Shared reference to the cache to sweep
/// * `interval` - Time to wait between sweeps
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(ExpiringCache::new(1000, ttl)?));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<K, V>(
    cache: Arc<RwLock<ExpiringCache<K, V>>>,
    interval: Duration,
) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!("Starting TTL cleanup task with interval of {:?}", interval);

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and sweep expired entries
            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup()
            };

            // Log sweep statistics
            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = Arc::new(RwLock::new(
            ExpiringCache::new(100, Duration::from_millis(50)).unwrap(),
        ));

        // Add an entry with a short TTL
        {
            let mut cache_guard = cache.write().await;
            cache_guard.set("expire_soon".to_string(), "value".to_string());
        }

        // Spawn cleanup task with a 50ms interval
        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(50));

        // Wait for the entry to expire and the sweep to run
        tokio::time::sleep(Duration::from_millis(200)).await;

        // Verify the entry was removed without any read having touched it
        {
            let cache_guard = cache.read().await;
            assert_eq!(
                cache_guard.len(),
                0,
                "Expired entry should have been swept"
            );
        }

        // Abort the cleanup task
        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = Arc::new(RwLock::new(
            ExpiringCache::new(100, Duration::from_secs(3600)).unwrap(),
        ));

        // Add an entry with a long TTL
        {
            let mut cache_guard = cache.write().await;
            cache_guard.set("long_lived".to_string(), "value".to_string());
        }

        // Spawn cleanup task
        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(50));

        // Wait for a few sweeps to run
        tokio::time::sleep(Duration::from_millis(200)).await;

        // Verify the entry still exists
        {
            let mut cache_guard = cache.write().await;
            let result = cache_guard.get(&"long_lived".to_string());
            assert_eq!(result, Some(&"value".to_string()), "Valid entry should not be removed");
        }

        // Abort the cleanup task
        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache: Arc<RwLock<ExpiringCache<String, String>>> = Arc::new(RwLock::new(
            ExpiringCache::new(100, Duration::from_secs(300)).unwrap(),
        ));

        let handle = spawn_cleanup_task(cache, Duration::from_millis(50));

        // Abort immediately
        handle.abort();

        // Wait a bit and verify task is finished
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
