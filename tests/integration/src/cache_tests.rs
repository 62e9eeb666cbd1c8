//! Cache integration tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use polistore::prelude::*;

fn policy(name: &str, version: &str) -> CachedPolicy {
    CachedPolicy::new(name)
        .expect("valid policy name")
        .with_version(version)
}

#[test]
fn new_cache_lists_no_keys() {
    let cache = PolicyCache::new();
    assert!(cache.list_keys().is_empty());
}

#[test]
fn set_then_read_back() {
    let cache = PolicyCache::new();

    cache.set(policy("p1", "v1").with_document(serde_json::json!({ "threshold": "80%" })));

    let record = cache.get("p1").expect("record should exist");
    assert_eq!(record.name(), "p1");
    assert_eq!(record.version().as_str(), "v1");
    assert_eq!(record.document()["threshold"], "80%");

    assert!(cache.exists("p1"));
    assert!(!cache.exists("p2"));
}

#[test]
fn last_write_wins() {
    let cache = PolicyCache::new();

    cache.set(policy("p1", "v1"));
    cache.set(policy("p1", "v2"));

    assert_eq!(cache.get("p1").unwrap().version().as_str(), "v2");
    assert_eq!(cache.len(), 1);
}

#[test]
fn get_or_create_returns_inserted_candidate() {
    let cache = PolicyCache::new();

    let returned = cache.get_or_create(policy("p1", "v1"));

    assert_eq!(returned.version().as_str(), "v1");
    assert_eq!(cache.get("p1").unwrap().version().as_str(), "v1");
}

#[test]
fn get_or_create_keeps_existing() {
    let cache = PolicyCache::new();
    cache.set(policy("p1", "v1"));

    let returned = cache.get_or_create(policy("p1", "v99"));

    assert_eq!(returned.version().as_str(), "v1");
    assert_eq!(cache.get("p1").unwrap().version().as_str(), "v1");
}

#[test]
fn delete_removes_from_listing() {
    let cache = PolicyCache::new();

    cache.set(policy("p1", "v1"));
    cache.set(policy("p2", "v1"));
    cache.delete("p1");

    assert_eq!(cache.list_keys(), vec!["p2".to_string()]);
}

#[test]
fn delete_twice_equals_delete_once() {
    let cache = PolicyCache::new();
    cache.set(policy("p1", "v1"));

    cache.delete("p1");
    let after_first: Vec<String> = cache.list_keys();
    cache.delete("p1");

    assert_eq!(cache.list_keys(), after_first);
    assert!(!cache.exists("p1"));
}

#[test]
fn list_keys_equals_exists_set() {
    let cache = PolicyCache::new();
    for name in ["a", "b", "c", "d"] {
        cache.set(policy(name, "v1"));
    }
    cache.delete("b");

    let listed: HashSet<String> = cache.list_keys().into_iter().collect();
    let expected: HashSet<String> = ["a", "c", "d"].iter().map(|s| s.to_string()).collect();
    assert_eq!(listed, expected);

    for name in &listed {
        assert!(cache.exists(name));
    }
    assert!(!cache.exists("b"));
}

#[test]
fn stats_tracking() {
    let cache = PolicyCache::new();

    // Record miss
    cache.get("p1");
    assert_eq!(cache.stats().policy_misses(), 1);
    assert_eq!(cache.stats().policy_hits(), 0);

    // Set and hit
    cache.set(policy("p1", "v1"));
    cache.get("p1");

    assert_eq!(cache.stats().policies_set(), 1);
    assert_eq!(cache.stats().policy_hits(), 1);
    assert_eq!(cache.stats().policy_misses(), 1);

    // Hit rate should be 0.5
    assert!((cache.stats().hit_rate() - 0.5).abs() < 0.01);
}

#[test]
fn cache_concurrent_access() {
    let cache = Arc::new(PolicyCache::new());
    let mut handles = vec![];

    // Spawn multiple threads doing concurrent operations
    for i in 0..10 {
        let cache_clone = Arc::clone(&cache);
        let handle = thread::spawn(move || {
            let name = format!("policy-{}", i);

            for j in 0..100 {
                cache_clone.set(policy(&name, &format!("v{}", j)));
                cache_clone.get(&name);
            }
        });
        handles.push(handle);
    }

    // Wait for all threads
    for handle in handles {
        handle.join().unwrap();
    }

    // Cache should have all names, each at its last written version
    assert_eq!(cache.len(), 10);
    for i in 0..10 {
        let record = cache.get(&format!("policy-{}", i)).unwrap();
        assert_eq!(record.version().as_str(), "v99");
    }
}

#[test]
fn cache_concurrent_listing_never_tears() {
    let cache = Arc::new(PolicyCache::new());
    let mut handles = vec![];

    for i in 0..4 {
        let cache_clone = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for j in 0..200 {
                let name = format!("policy-{}", (i * 200 + j) % 20);
                if j % 3 == 0 {
                    cache_clone.delete(&name);
                } else {
                    cache_clone.set(policy(&name, &format!("v{}", j)));
                }
            }
        }));
    }

    for _ in 0..4 {
        let cache_clone = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for _ in 0..200 {
                // The key set copy is taken under the same lock that guards
                // mutation, so a listed key is never half-written.
                for key in cache_clone.list_keys() {
                    assert!(!key.is_empty());
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn records_arriving_as_json() {
    let cache = PolicyCache::new();

    let payload = r#"{
        "name": "node-qos",
        "version": "v12",
        "document": { "qualityProbe": { "interval": "10s" } }
    }"#;
    let record = CachedPolicy::from_json(payload).expect("valid payload");
    cache.set(record);

    let cached = cache.get("node-qos").unwrap();
    assert_eq!(cached.version().as_str(), "v12");
    assert_eq!(cached.document()["qualityProbe"]["interval"], "10s");
}
