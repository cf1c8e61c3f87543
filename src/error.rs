//! Error types for the cache crate
//!
//! Provides unified error handling using thiserror.
//!
//! The store operations themselves are infallible in-memory bookkeeping; the
//! only failure surface is namespace construction from caller-supplied names.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Namespace segment is empty or contains a reserved character
    #[error("Invalid namespace segment: {0:?} (must be non-empty, without ':' or '&')")]
    InvalidSegment(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;
