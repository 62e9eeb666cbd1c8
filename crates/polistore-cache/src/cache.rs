//! PolicyStore trait and PolicyCache implementation.
//!
//! The cache stores the most recently observed record for each policy name.
//! A single mutex serializes all access, so every operation observes the
//! effects of every operation that completed before it acquired the lock.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use polistore_core::CachedPolicy;
use tracing::{debug, trace};

use crate::stats::CacheStats;

/// Trait for policy caches.
///
/// This is the interface the watch/reconcile machinery consumes: the event
/// source calls [`set`](PolicyStore::set) and [`delete`](PolicyStore::delete)
/// on notifications, and reconcilers call the read operations to decide what
/// corrective action to take for a name.
pub trait PolicyStore: Send + Sync {
    /// List all currently cached policy names.
    ///
    /// Returns a snapshot copy in arbitrary order. The returned list is
    /// independent of the cache: later mutations do not affect it. Used to
    /// diff known names against an authoritative listing when detecting
    /// deletions.
    fn list_keys(&self) -> Vec<String>;

    /// Get the cached record for a name.
    ///
    /// Returns `None` if no record is cached under that name. Absence is an
    /// ordinary outcome, not an error.
    fn get(&self, name: &str) -> Option<Arc<CachedPolicy>>;

    /// Check whether a record is cached under a name.
    fn exists(&self, name: &str) -> bool;

    /// Get the cached record for the candidate's name, inserting the
    /// candidate if none exists.
    ///
    /// When a record already exists it is left untouched and returned.
    /// When none exists the candidate is stored and returned. Either way
    /// the caller receives the record that is now authoritative for that
    /// name.
    fn get_or_create(&self, candidate: CachedPolicy) -> Arc<CachedPolicy>;

    /// Store a record, keyed by its name.
    ///
    /// Unconditional upsert: inserts when absent, overwrites when present.
    /// This is the operation used for both add and update notifications.
    fn set(&self, policy: CachedPolicy);

    /// Remove the record for a name.
    ///
    /// A no-op if no record is cached under that name.
    fn delete(&self, name: &str);
}

/// Concurrency-safe in-memory cache of named policy records.
///
/// `PolicyCache` holds the most recent [`CachedPolicy`] observed for each
/// name and serves as the local source of truth for a reconcile loop.
///
/// ## Thread Safety
///
/// All operations serialize on a single internal mutex. Critical sections
/// are short and purely in-memory: no operation performs I/O, suspends, or
/// holds the lock beyond its own body. Any two calls are totally ordered by
/// lock acquisition, so `list_keys` always observes a consistent key set
/// and `get_or_create` is an atomic check-then-insert.
///
/// ## Ownership
///
/// Stored records are wrapped in `Arc` on insertion; reads hand out `Arc`
/// clones, so callers can never mutate cached state through a returned
/// reference. The mapping itself is never exposed.
#[derive(Debug, Default)]
pub struct PolicyCache {
    /// Records keyed by policy name.
    policies: Mutex<HashMap<String, Arc<CachedPolicy>>>,
    /// Statistics.
    stats: CacheStats,
}

impl PolicyCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new cache with a specific initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            policies: Mutex::new(HashMap::with_capacity(capacity)),
            stats: CacheStats::new(),
        }
    }

    /// Get cache statistics.
    #[inline]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get the number of cached records.
    pub fn len(&self) -> usize {
        self.policies.lock().expect("policy map lock poisoned").len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.policies
            .lock()
            .expect("policy map lock poisoned")
            .is_empty()
    }
}

impl PolicyStore for PolicyCache {
    fn list_keys(&self) -> Vec<String> {
        let policies = self.policies.lock().expect("policy map lock poisoned");
        policies.keys().cloned().collect()
    }

    fn get(&self, name: &str) -> Option<Arc<CachedPolicy>> {
        let result = {
            let policies = self.policies.lock().expect("policy map lock poisoned");
            policies.get(name).map(Arc::clone)
        };

        if result.is_some() {
            self.stats.record_hit();
            trace!(policy = %name, "cache hit");
        } else {
            self.stats.record_miss();
            trace!(policy = %name, "cache miss");
        }

        result
    }

    fn exists(&self, name: &str) -> bool {
        let policies = self.policies.lock().expect("policy map lock poisoned");
        policies.contains_key(name)
    }

    fn get_or_create(&self, candidate: CachedPolicy) -> Arc<CachedPolicy> {
        let mut policies = self.policies.lock().expect("policy map lock poisoned");

        match policies.entry(candidate.name().to_string()) {
            Entry::Occupied(existing) => Arc::clone(existing.get()),
            Entry::Vacant(slot) => {
                let stored = Arc::new(candidate);
                slot.insert(Arc::clone(&stored));
                self.stats.record_create();
                debug!(
                    policy = %stored.name(),
                    version = %stored.version(),
                    "created policy"
                );
                stored
            }
        }
    }

    fn set(&self, policy: CachedPolicy) {
        let policy = Arc::new(policy);

        {
            let mut policies = self.policies.lock().expect("policy map lock poisoned");
            policies.insert(policy.name().to_string(), Arc::clone(&policy));
        }
        self.stats.record_set();

        debug!(
            policy = %policy.name(),
            version = %policy.version(),
            "stored policy"
        );
    }

    fn delete(&self, name: &str) {
        let removed = {
            let mut policies = self.policies.lock().expect("policy map lock poisoned");
            policies.remove(name)
        };

        if removed.is_some() {
            self.stats.record_delete();
            debug!(policy = %name, "deleted policy");
        }
    }
}
