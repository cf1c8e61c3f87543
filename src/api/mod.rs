//! API-Access Module
//!
//! The cache-facing side of the dashboard's API layer: the resource
//! namespace registry, read-through caching, and post-mutation
//! invalidation. The HTTP client itself lives with the caller; this module
//! only owns what to cache under which key, for how long, and what to drop
//! when a mutation lands.

pub mod readthrough;
pub mod resources;

pub use readthrough::{invalidate_after_domain_mutation, read_through};
