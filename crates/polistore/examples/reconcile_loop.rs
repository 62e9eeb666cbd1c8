//! Reconcile Loop Example
//!
//! This example demonstrates the intended consumers of the cache:
//! - An event loop draining watch notifications into the cache
//!   (add/update -> set, delete -> delete)
//! - A resync pass diffing cached names against an authoritative listing
//!   to detect deletions the watch missed
//!
//! The watch source here is simulated with an mpsc channel; a real
//! deployment would feed the same events from an API watch stream.
//!
//! Run with:
//! ```bash
//! cargo run --example reconcile_loop
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use polistore::prelude::*;
use tokio::sync::mpsc;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Watch notification for a policy object.
#[derive(Debug, Clone)]
enum PolicyEvent {
    /// Policy added or updated at the source of truth.
    Upsert(CachedPolicy),
    /// Policy deleted at the source of truth.
    Delete(String),
}

/// Drain watch notifications into the cache.
async fn run_event_loop(cache: Arc<PolicyCache>, mut events: mpsc::Receiver<PolicyEvent>) {
    while let Some(event) = events.recv().await {
        match event {
            PolicyEvent::Upsert(policy) => {
                debug!(policy = %policy.name(), version = %policy.version(), "upsert notification");
                cache.set(policy);
            }
            PolicyEvent::Delete(name) => {
                debug!(policy = %name, "delete notification");
                cache.delete(&name);
            }
        }
    }
}

/// Remove cached entries whose names are absent from the authoritative
/// listing. This is the periodic-resync safety net for deletions the watch
/// stream missed.
fn resync(cache: &PolicyCache, authoritative: &HashSet<String>) {
    for name in cache.list_keys() {
        if !authoritative.contains(&name) {
            info!(policy = %name, "resync: deleting stale entry");
            cache.delete(&name);
        }
    }
}

/// Reconcile a single name against cached state.
fn reconcile(cache: &PolicyCache, name: &str) {
    match cache.get(name) {
        Some(policy) => {
            info!(
                policy = %name,
                version = %policy.version(),
                enforced = policy.document()["enforce"] == true,
                "reconciling against cached state"
            );
        }
        None => {
            info!(policy = %name, "nothing cached, skipping");
        }
    }
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting tracing subscriber failed");

    let cache = Arc::new(PolicyCache::new());
    let (tx, rx) = mpsc::channel(16);

    let event_loop = tokio::spawn(run_event_loop(Arc::clone(&cache), rx));

    // Simulated watch stream: two adds, one update, one delete.
    let events = [
        PolicyEvent::Upsert(
            CachedPolicy::new("memory-pressure")
                .expect("valid name")
                .with_version("v1")
                .with_document(serde_json::json!({ "threshold": "80%", "enforce": true })),
        ),
        PolicyEvent::Upsert(
            CachedPolicy::new("disk-pressure")
                .expect("valid name")
                .with_version("v1")
                .with_document(serde_json::json!({ "threshold": "90%", "enforce": false })),
        ),
        PolicyEvent::Upsert(
            CachedPolicy::new("memory-pressure")
                .expect("valid name")
                .with_version("v2")
                .with_document(serde_json::json!({ "threshold": "75%", "enforce": true })),
        ),
        PolicyEvent::Delete("disk-pressure".to_string()),
    ];
    for event in events {
        tx.send(event).await.expect("event loop alive");
    }
    drop(tx);
    event_loop.await.expect("event loop completed");

    info!(known = ?cache.list_keys(), "cache after watch stream");

    reconcile(&cache, "memory-pressure");
    reconcile(&cache, "disk-pressure");

    // The authoritative listing no longer contains anything: a full resync
    // should empty the cache.
    resync(&cache, &HashSet::new());
    info!(
        known = ?cache.list_keys(),
        sets = cache.stats().policies_set(),
        deletes = cache.stats().policies_deleted(),
        "cache after resync"
    );
}
