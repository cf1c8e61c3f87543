//! Cache Key Module
//!
//! Deterministic derivation of cache keys from a namespace and a parameter bag.

use serde_json::Value;

// == Build Key ==
/// Derives a cache key of the form `<namespace>:<canonicalized-params>`.
///
/// Parameter names are sorted lexicographically ascending, each rendered as
/// `name=<compact JSON of value>` and joined with `&`, so two parameter bags
/// that are permutations of the same pairs always produce the same key.
/// Ties between duplicate names are broken by the rendered value, keeping
/// the permutation guarantee even for a degenerate bag that repeats a name.
/// Values are captured in their serialized JSON form, which keeps types
/// distinct: the number `1` renders as `1`, the string `"1"` as `"1"`.
///
/// With empty `params` the key is `namespace + ":"`.
///
/// Pure function: no side effects, no I/O. `serde_json::Value` objects
/// serialize their fields in sorted order, so nested objects are canonical
/// regardless of how the caller assembled them.
///
/// # Panics
/// Panics if `namespace` is empty. An empty namespace would defeat
/// prefix-based invalidation and is a programming error at the call site.
pub fn build_key(namespace: &str, params: &[(&str, Value)]) -> String {
    assert!(!namespace.is_empty(), "cache key namespace must be non-empty");

    let mut rendered: Vec<(&str, String)> = params
        .iter()
        .map(|(name, value)| (*name, value.to_string()))
        .collect();
    rendered.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.cmp(&b.1)));

    let joined = rendered
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}:{}", namespace, joined)
}
