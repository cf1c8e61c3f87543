//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use serde_json::Value;

// == Cache Entry ==
/// A single cached response with its expiry metadata.
///
/// Entries always carry an expiry; a store-wide default TTL is applied when
/// the caller does not pass one, so there is no "never expires" state.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored response body
    pub value: Value,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_ms` after `now_ms`.
    ///
    /// The expiry saturates at `u64::MAX`, so an absurdly large TTL means
    /// "effectively never" rather than an arithmetic overflow.
    pub fn new(value: Value, now_ms: u64, ttl_ms: u64) -> Self {
        Self {
            value,
            created_at: now_ms,
            expires_at: now_ms.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired as of `now_ms`.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to the expiration time, so a `set` with TTL `t`
    /// is unreadable at exactly `created_at + t`.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds as of `now_ms`, 0 when expired.
    ///
    /// Useful for diagnostics and stats; the read path uses `is_expired`.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(json!({"total": 20}), 1_000, 500);

        assert_eq!(entry.value, json!({"total": 20}));
        assert_eq!(entry.created_at, 1_000);
        assert_eq!(entry.expires_at, 1_500);
    }

    #[test]
    fn test_entry_not_expired_before_deadline() {
        let entry = CacheEntry::new(json!("v"), 1_000, 500);

        assert!(!entry.is_expired(1_000));
        assert!(!entry.is_expired(1_499));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(json!("v"), 1_000, 500);

        // Expired at exactly expires_at, not one millisecond later
        assert!(entry.is_expired(1_500));
        assert!(entry.is_expired(2_000));
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let entry = CacheEntry::new(json!("v"), 1_000, 0);

        assert!(entry.is_expired(1_000));
    }

    #[test]
    fn test_huge_ttl_saturates_instead_of_overflowing() {
        let entry = CacheEntry::new(json!("v"), 1_000, u64::MAX);

        assert_eq!(entry.expires_at, u64::MAX);
        assert!(!entry.is_expired(u64::MAX - 1));
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = CacheEntry::new(json!("v"), 1_000, 500);

        assert_eq!(entry.ttl_remaining_ms(1_000), 500);
        assert_eq!(entry.ttl_remaining_ms(1_200), 300);
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let entry = CacheEntry::new(json!("v"), 1_000, 500);

        assert_eq!(entry.ttl_remaining_ms(1_500), 0);
        assert_eq!(entry.ttl_remaining_ms(9_999), 0);
    }

    #[test]
    fn test_null_value_is_a_real_entry() {
        // A cached null is a legitimate payload, distinct from "absent"
        let entry = CacheEntry::new(Value::Null, 0, 100);

        assert_eq!(entry.value, Value::Null);
        assert!(!entry.is_expired(50));
    }
}
