//! Periodic Sweep Task
//!
//! Background task that reclaims memory held by expired-but-unread entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task sleeps for the configured interval between sweeps and acquires
/// the write lock only for the duration of each sweep. Sweeps run
/// sequentially within the one task, so a sweep never overlaps the next.
///
/// This is the only cache operation that runs unsolicited rather than being
/// triggered by a cache consumer; lazy expiration on read covers entries
/// that are still being requested.
///
/// # Arguments
/// * `cache` - Shared reference to the cache store
/// * `sweep_interval_ms` - Interval in milliseconds between sweep runs
///
/// # Returns
/// A JoinHandle for the spawned task; abort it during shutdown so the timer
/// is cancelled cleanly.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(CacheStore::new(30_000)));
/// let sweep_handle = spawn_sweep_task(cache.clone(), 60_000);
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task(
    cache: Arc<RwLock<CacheStore>>,
    sweep_interval_ms: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_millis(sweep_interval_ms);

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} ms",
            sweep_interval_ms
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and remove expired entries
            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.sweep()
            };

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}
