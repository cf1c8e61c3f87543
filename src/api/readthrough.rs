//! Read-Through Helpers
//!
//! Glue between the cache and the API-access layer: get-or-fetch on the read
//! path, bulk invalidation after mutations.

use std::future::Future;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::api::resources;
use crate::cache::CacheStore;

/// Returns the cached response for `key`, fetching and caching it on a miss.
///
/// The fetch future runs outside the cache lock. Two interleaved calls for
/// the same key can therefore both miss and both fetch; there is no
/// at-most-one-fetch coalescing. The duplicate `set` calls overwrite each
/// other and the last write wins, which is harmless for idempotent reads.
///
/// Errors from `fetch` are propagated untouched and nothing is cached.
pub async fn read_through<F, Fut, E>(
    cache: &RwLock<CacheStore>,
    key: &str,
    ttl_ms: Option<u64>,
    fetch: F,
) -> Result<Value, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Value, E>>,
{
    // Write lock even on the read path: an expired read deletes the entry
    if let Some(hit) = cache.write().await.get(key) {
        debug!(key = %key, "cache hit");
        return Ok(hit);
    }

    debug!(key = %key, "cache miss, fetching");
    let value = fetch().await?;

    cache.write().await.set(key.to_string(), value.clone(), ttl_ms);
    Ok(value)
}

/// Invalidates every cached read that a domain mutation can stale.
///
/// Creating, updating, or deleting a domain record changes the record
/// itself, the list it appears in, and the aggregate counters, so both the
/// `domains` and `stats` hierarchies are dropped wholesale.
pub async fn invalidate_after_domain_mutation(cache: &RwLock<CacheStore>) -> usize {
    let mut cache_guard = cache.write().await;
    let removed = cache_guard.delete_by_prefix(&resources::domains().prefix())
        + cache_guard.delete_by_prefix(&resources::stats().prefix());

    debug!(removed, "invalidated cached reads after domain mutation");
    removed
}
