//! Resource Registry
//!
//! Namespaces and TTLs for the dashboard's cached REST resources.
//!
//! Namespaces form two explicit hierarchies. Everything keyed on an
//! individual domain or the domain list lives under the `domains` root;
//! aggregate analytics live under `stats`. A mutation of a domain record
//! invalidates both roots in one pass, since aggregate counts change with
//! the record.

use crate::cache::Namespace;

// == Per-Resource TTLs ==
/// TTL for the paging/filtering domain list (milliseconds)
pub const DOMAIN_LIST_TTL_MS: u64 = 60_000;
/// TTL for a single domain record
pub const DOMAIN_DETAIL_TTL_MS: u64 = 120_000;
/// TTL for a domain's scan history
pub const DOMAIN_HISTORY_TTL_MS: u64 = 120_000;
/// TTL for rarely-changing generated domain profiles
pub const DOMAIN_PROFILE_TTL_MS: u64 = 300_000;
/// TTL for captured screenshots metadata
pub const DOMAIN_SCREENSHOTS_TTL_MS: u64 = 300_000;
/// TTL for the volatile aggregate counters
pub const STATS_OVERVIEW_TTL_MS: u64 = 30_000;
/// TTL for the registration timeline
pub const STATS_TIMELINE_TTL_MS: u64 = 60_000;
/// TTL for the recent-activity feed
pub const RECENT_ACTIVITY_TTL_MS: u64 = 30_000;
/// TTL for the recent-changes feed
pub const RECENT_CHANGES_TTL_MS: u64 = 30_000;
/// TTL for per-category breakdowns
pub const CATEGORY_STATS_TTL_MS: u64 = 60_000;

// == Domain Resources ==
/// Root namespace for everything derived from domain records.
pub fn domains() -> Namespace {
    Namespace::from_static(&["domains"])
}

/// The paged/filtered domain list.
pub fn domain_list() -> Namespace {
    Namespace::from_static(&["domains", "list"])
}

/// A single domain record.
pub fn domain_detail() -> Namespace {
    Namespace::from_static(&["domains", "detail"])
}

/// Scan history of a single domain.
pub fn domain_history() -> Namespace {
    Namespace::from_static(&["domains", "history"])
}

/// Generated profile of a single domain.
pub fn domain_profile() -> Namespace {
    Namespace::from_static(&["domains", "profile"])
}

/// Screenshot metadata of a single domain.
pub fn domain_screenshots() -> Namespace {
    Namespace::from_static(&["domains", "screenshots"])
}

// == Analytics Resources ==
/// Root namespace for aggregate analytics.
pub fn stats() -> Namespace {
    Namespace::from_static(&["stats"])
}

/// Aggregate counters (totals, risk levels, categories).
pub fn stats_overview() -> Namespace {
    Namespace::from_static(&["stats", "overview"])
}

/// Registration timeline, bucketed by day.
pub fn stats_timeline() -> Namespace {
    Namespace::from_static(&["stats", "timeline"])
}

/// Recently scanned/screenshotted domains feed.
pub fn recent_activity() -> Namespace {
    Namespace::from_static(&["stats", "recent-activity"])
}

/// Recently updated domain records feed.
pub fn recent_changes() -> Namespace {
    Namespace::from_static(&["stats", "recent-changes"])
}

/// Per-category domain counts.
pub fn category_stats() -> Namespace {
    Namespace::from_static(&["stats", "by-category"])
}
