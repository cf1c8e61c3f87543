//! NRD Cache - client-side response cache for the NRD monitoring dashboard
//!
//! Provides deterministic cache-key derivation, a TTL store with lazy
//! expiration and prefix-based bulk invalidation, and a periodic sweep task.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{build_key, CacheStore, Namespace};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use tasks::spawn_sweep_task;
