//! Cache Module
//!
//! Key derivation plus an in-memory TTL store with lazy expiration and
//! prefix-based bulk invalidation.

mod entry;
mod key;
mod namespace;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use key::build_key;
pub use namespace::Namespace;
pub use stats::CacheStats;
pub use store::CacheStore;
