//! Cache Store Module
//!
//! Main cache engine: a HashMap of keyed responses with TTL expiration,
//! lazy deletion on read, and prefix-based bulk invalidation.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::trace;

use crate::cache::{CacheEntry, CacheStats};
use crate::clock::{Clock, SystemClock};

// == Cache Store ==
/// In-memory TTL store for API responses.
///
/// Unbounded in entry count; memory is reclaimed only by TTL expiry and
/// explicit invalidation. Designed for interleaved async use on one logical
/// thread of control; share as `Arc<RwLock<CacheStore>>` and take the write
/// lock for every operation that can mutate, including `get` (its lazy
/// expiration deletes entries).
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Default TTL in milliseconds for entries stored without explicit TTL
    default_ttl_ms: u64,
    /// Time source
    clock: Arc<dyn Clock>,
}

impl CacheStore {
    // == Constructors ==
    /// Creates a new CacheStore reading wall-clock time.
    ///
    /// # Arguments
    /// * `default_ttl_ms` - TTL applied when `set` is called without one
    pub fn new(default_ttl_ms: u64) -> Self {
        Self::with_clock(default_ttl_ms, Arc::new(SystemClock))
    }

    /// Creates a new CacheStore with an injected time source.
    ///
    /// Tests pass a `ManualClock` here so expiry can be driven explicitly.
    pub fn with_clock(default_ttl_ms: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl_ms,
            clock,
        }
    }

    // == Set ==
    /// Stores a response under `key` with optional TTL.
    ///
    /// If the key already exists the entry is overwritten and its TTL reset.
    /// Uses the store-wide default TTL when `ttl_ms` is `None`.
    pub fn set(&mut self, key: String, value: Value, ttl_ms: Option<u64>) {
        let ttl_ms = ttl_ms.unwrap_or(self.default_ttl_ms);
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl_ms);

        trace!(key = %key, ttl_ms, "cache set");
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves the response cached under `key`.
    ///
    /// Returns `None` when no entry exists or the entry has expired; an
    /// expired entry is deleted as a side effect (lazy expiration), so a
    /// `get` never returns a value whose expiry has passed. Absent and
    /// expired are indistinguishable to the caller.
    ///
    /// Presence is decided by an entry-existence check, never by the
    /// truthiness of the payload: a cached `Value::Null` is a hit.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired(self.clock.now_ms()) {
            trace!(key = %key, "cache read observed expired entry");
            self.entries.remove(key);
            self.stats.record_expired_read();
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        self.stats.record_hit();
        Some(entry.value.clone())
    }

    // == Delete ==
    /// Removes the entry at `key` if present; no-op otherwise.
    ///
    /// Idempotent. Returns whether an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.record_invalidations(1);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Delete By Prefix ==
    /// Removes every entry whose key starts with `prefix`, expired or not.
    ///
    /// Exact string prefix match, no pattern matching. Returns the number of
    /// entries removed; afterwards no key starting with `prefix` remains.
    pub fn delete_by_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - self.entries.len();

        if removed > 0 {
            trace!(prefix = %prefix, removed, "cache prefix invalidation");
            self.stats.record_invalidations(removed as u64);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Clear ==
    /// Removes all entries unconditionally. Idempotent.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();

        if removed > 0 {
            self.stats.record_invalidations(removed as u64);
        }
        self.stats.set_total_entries(0);
    }

    // == Sweep ==
    /// Removes every entry whose expiry has passed as of the call.
    ///
    /// Idempotent; reclaims memory held by expired-but-unread entries.
    /// Returns the number of entries removed.
    pub fn sweep(&mut self) -> usize {
        let now_ms = self.clock.now_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now_ms));
        let removed = before - self.entries.len();

        if removed > 0 {
            self.stats.record_swept(removed as u64);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, including expired entries not
    /// yet observed by a read or a sweep.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Default TTL ==
    /// Returns the store-wide default TTL in milliseconds.
    pub fn default_ttl_ms(&self) -> u64 {
        self.default_ttl_ms
    }
}
