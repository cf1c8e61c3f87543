//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the key-derivation and store contracts over
//! generated inputs.

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::Value;

use crate::cache::{build_key, CacheStore};
use crate::clock::ManualClock;

// == Test Configuration ==
const TEST_DEFAULT_TTL_MS: u64 = 30_000;

// == Strategies ==
/// Generates JSON leaf values for cache-key parameters
fn param_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
    ]
}

/// Generates parameter bags with unique names
fn param_bag_strategy() -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::hash_map("[a-z_]{1,10}", param_value_strategy(), 0..6)
        .prop_map(|bag| bag.into_iter().collect())
}

/// Generates key suffixes for store entries
fn suffix_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z0-9=&]{1,16}", 1..10).prop_map(|s| s.into_iter().collect())
}

fn as_params(bag: &[(String, Value)]) -> Vec<(&str, Value)> {
    bag.iter().map(|(name, value)| (name.as_str(), value.clone())).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Key derivation is insensitive to parameter insertion order
    #[test]
    fn prop_build_key_order_independent(bag in param_bag_strategy().prop_shuffle()) {
        let shuffled = as_params(&bag);

        let mut sorted_bag = bag.clone();
        sorted_bag.sort_by(|(a, _), (b, _)| a.cmp(b));
        let sorted = as_params(&sorted_bag);

        prop_assert_eq!(
            build_key("domains", &shuffled),
            build_key("domains", &sorted)
        );
    }

    // Insertion order stays irrelevant even when a name repeats in the bag
    #[test]
    fn prop_build_key_order_independent_with_duplicates(
        pairs in prop::collection::vec(("[a-z]{1,4}", param_value_strategy()), 0..8)
            .prop_shuffle()
    ) {
        let shuffled = as_params(&pairs);

        let mut sorted_pairs = pairs.clone();
        sorted_pairs.sort_by(|(a, av), (b, bv)| {
            a.cmp(b).then_with(|| av.to_string().cmp(&bv.to_string()))
        });
        let sorted = as_params(&sorted_pairs);

        prop_assert_eq!(build_key("domains", &shuffled), build_key("domains", &sorted));
    }

    // Key derivation is deterministic
    #[test]
    fn prop_build_key_deterministic(bag in param_bag_strategy()) {
        let params = as_params(&bag);
        prop_assert_eq!(build_key("stats", &params), build_key("stats", &params));
    }

    // A number and its string rendering never collide
    #[test]
    fn prop_build_key_type_sensitive(n in any::<i64>()) {
        let as_number = build_key("n", &[("a", Value::from(n))]);
        let as_string = build_key("n", &[("a", Value::from(n.to_string()))]);
        prop_assert_ne!(as_number, as_string);
    }

    // A read never yields a value whose expiry has passed, and an expired
    // read removes the entry
    #[test]
    fn prop_get_never_returns_expired(
        ttl_ms in 1u64..1_000,
        elapsed_ms in 0u64..2_000,
    ) {
        let clock = Arc::new(ManualClock::new(0));
        let mut store = CacheStore::with_clock(TEST_DEFAULT_TTL_MS, clock.clone());

        store.set("k".to_string(), Value::from("v"), Some(ttl_ms));
        clock.set_ms(elapsed_ms);

        let got = store.get("k");
        if elapsed_ms < ttl_ms {
            prop_assert_eq!(got, Some(Value::from("v")));
            prop_assert_eq!(store.len(), 1);
        } else {
            prop_assert_eq!(got, None);
            prop_assert_eq!(store.len(), 0, "expired entry must be lazily deleted");
        }
    }

    // After a prefix invalidation no key under the prefix survives and no
    // key outside it is touched
    #[test]
    fn prop_delete_by_prefix_is_exact(
        doomed in suffix_strategy(),
        kept in suffix_strategy(),
    ) {
        let clock = Arc::new(ManualClock::new(0));
        let mut store = CacheStore::with_clock(TEST_DEFAULT_TTL_MS, clock);

        for suffix in &doomed {
            store.set(format!("domains:{}", suffix), Value::from(1), None);
        }
        for suffix in &kept {
            store.set(format!("stats:{}", suffix), Value::from(2), None);
        }

        let removed = store.delete_by_prefix("domains:");

        prop_assert_eq!(removed, doomed.len());
        for suffix in &doomed {
            prop_assert_eq!(store.get(&format!("domains:{}", suffix)), None);
        }
        for suffix in &kept {
            prop_assert_eq!(
                store.get(&format!("stats:{}", suffix)),
                Some(Value::from(2))
            );
        }
    }

    // delete and clear are idempotent: a second call observes the same state
    #[test]
    fn prop_delete_and_clear_idempotent(suffixes in suffix_strategy()) {
        let clock = Arc::new(ManualClock::new(0));
        let mut store = CacheStore::with_clock(TEST_DEFAULT_TTL_MS, clock);

        for suffix in &suffixes {
            store.set(format!("history:{}", suffix), Value::from("h"), None);
        }

        let victim = format!("history:{}", suffixes[0]);
        prop_assert!(store.delete(&victim));
        let len_after_first = store.len();
        prop_assert!(!store.delete(&victim));
        prop_assert_eq!(store.len(), len_after_first);

        store.clear();
        prop_assert!(store.is_empty());
        store.clear();
        prop_assert!(store.is_empty());
    }

    // Sweeping removes exactly the entries whose expiry has passed
    #[test]
    fn prop_sweep_removes_exactly_expired(
        ttls in prop::collection::vec(1u64..1_000, 1..20),
        now_ms in 0u64..1_200,
    ) {
        let clock = Arc::new(ManualClock::new(0));
        let mut store = CacheStore::with_clock(TEST_DEFAULT_TTL_MS, clock.clone());

        for (i, ttl_ms) in ttls.iter().enumerate() {
            store.set(format!("domains:{}", i), Value::from(i as u64), Some(*ttl_ms));
        }

        clock.set_ms(now_ms);
        let removed = store.sweep();

        let expected_expired = ttls.iter().filter(|ttl| now_ms >= **ttl).count();
        prop_assert_eq!(removed, expected_expired);
        prop_assert_eq!(store.len(), ttls.len() - expected_expired);

        // A second sweep at the same instant finds nothing
        prop_assert_eq!(store.sweep(), 0);
    }
}
