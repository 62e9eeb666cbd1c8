//! # polistore-cache
//!
//! Concurrency-safe in-memory policy cache for watch/reconcile loops.
//!
//! This crate provides the caching layer that an informer-style event
//! pipeline uses as its local source of truth:
//!
//! - [`PolicyCache`] - Mutex-guarded cache of named policy records
//! - [`PolicyStore`] - The trait consumed by event sources and reconcilers
//! - [`CacheStats`] - Atomic operation counters
//!
//! ## Key Design Decisions
//!
//! - A single mutex serializes all access, so `list_keys` observes a
//!   point-in-time key set and `get_or_create` is an atomic
//!   check-then-insert
//! - Records are `Arc`-wrapped on insertion and handed out as `Arc` clones;
//!   cached state can never be mutated through a returned reference
//! - No eviction, TTL, or capacity bound: entries persist until the event
//!   loop reacts to an external deletion notification
//!
//! ## Example
//!
//! ```rust
//! use polistore_cache::{PolicyCache, PolicyStore};
//! use polistore_core::CachedPolicy;
//!
//! let cache = PolicyCache::new();
//!
//! // The event source reflects an add notification
//! cache.set(CachedPolicy::new("memory-pressure")?.with_version("v1"));
//!
//! // A reconciler reads current state
//! let record = cache.get("memory-pressure").expect("just stored");
//! assert_eq!(record.version().as_str(), "v1");
//! # Ok::<(), polistore_core::PolicyError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod stats;

pub use cache::{PolicyCache, PolicyStore};
pub use stats::CacheStats;
