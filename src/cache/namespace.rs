//! Namespace Module
//!
//! Structured, hierarchical cache namespaces.
//!
//! Invalidation scope is decided by segment boundaries, not by accidental
//! string overlap: the rendered prefix of every namespace ends with the `:`
//! separator, so invalidating `domains:` catches `domains:list:...` and
//! `domains:detail:...` but can never touch a sibling root such as
//! `domain-archive:`.

use serde_json::Value;

use crate::cache::build_key;
use crate::error::{CacheError, Result};

// == Namespace ==
/// A hierarchical cache namespace made of one or more segments.
///
/// Segments must be non-empty and must not contain the reserved characters
/// `:` (segment separator) or `&` (parameter separator).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    // == Constructors ==
    /// Creates a root namespace from a single segment.
    pub fn root(segment: impl Into<String>) -> Result<Self> {
        let segment = segment.into();
        validate_segment(&segment)?;
        Ok(Self {
            segments: vec![segment],
        })
    }

    /// Returns a child namespace one segment deeper.
    pub fn child(&self, segment: impl Into<String>) -> Result<Self> {
        let segment = segment.into();
        validate_segment(&segment)?;
        let mut segments = self.segments.clone();
        segments.push(segment);
        Ok(Self { segments })
    }

    /// Builds a namespace from compile-time literal segments.
    ///
    /// Skips the reserved-character check; the segments are trusted to be
    /// valid. Used by the resource registry.
    pub(crate) fn from_static(segments: &[&'static str]) -> Self {
        debug_assert!(!segments.is_empty());
        debug_assert!(segments.iter().all(|s| validate_segment(s).is_ok()));
        Self {
            segments: segments.iter().map(|s| s.to_string()).collect(),
        }
    }

    // == Key Derivation ==
    /// Builds a cache key under this namespace from a parameter bag.
    pub fn key(&self, params: &[(&str, Value)]) -> String {
        build_key(&self.segments.join(":"), params)
    }

    // == Invalidation Prefix ==
    /// Returns the key prefix covering this namespace and all descendants.
    ///
    /// Ends with the segment separator, so it matches exactly the keys built
    /// under this namespace or a child of it.
    pub fn prefix(&self) -> String {
        let mut prefix = self.segments.join(":");
        prefix.push(':');
        prefix
    }

    // == Hierarchy ==
    /// Returns true if `other` is this namespace or a descendant of it.
    pub fn contains(&self, other: &Namespace) -> bool {
        other.segments.len() >= self.segments.len()
            && other.segments[..self.segments.len()] == self.segments[..]
    }

    /// Returns the segments of this namespace, root first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join(":"))
    }
}

// == Validation ==
fn validate_segment(segment: &str) -> Result<()> {
    if segment.is_empty() || segment.contains(':') || segment.contains('&') {
        return Err(CacheError::InvalidSegment(segment.to_string()));
    }
    Ok(())
}
