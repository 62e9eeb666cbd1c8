//! # polistore
//!
//! Local policy cache for watch/reconcile loops.
//!
//! This crate provides a concurrency-safe, in-memory cache that stores the
//! most recently observed version of each named policy object. An external
//! event source (an informer-style watch mechanism) keeps the cache current
//! by reflecting add/update notifications through `set` and deletion
//! notifications through `delete`; reconcilers read the cache instead of
//! re-querying the remote source of truth on every tick.
//!
//! ## Quick Start
//!
//! ```rust
//! use polistore::prelude::*;
//!
//! // Create a cache
//! let cache = PolicyCache::new();
//!
//! // The event source reflects an add notification
//! cache.set(CachedPolicy::new("memory-pressure")?.with_version("v1"));
//!
//! // A reconciler reads current state
//! assert!(cache.exists("memory-pressure"));
//! let known = cache.list_keys();
//! assert_eq!(known, vec!["memory-pressure".to_string()]);
//! # Ok::<(), polistore::prelude::PolicyError>(())
//! ```
//!
//! ## Architecture
//!
//! This library is organized into two crates:
//!
//! - `polistore-core` - Policy record, version, and error types
//! - `polistore-cache` - The mutex-guarded cache and its statistics
//!
//! This crate (`polistore`) re-exports all public APIs for convenience.
//!
//! ## Design Principles
//!
//! 1. **Absence is not an error** - lookups return `Option` and `bool`
//! 2. **One lock, short critical sections** - every operation is a bounded,
//!    in-memory critical section; nothing is held across I/O or `.await`
//! 3. **Immutable records** - cached state cannot be mutated through a
//!    returned reference
//! 4. **Observable** - built-in statistics and tracing support

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Re-export all sub-crates
pub use polistore_cache as cache;
pub use polistore_core as core;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use polistore::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use polistore_core::{CachedPolicy, PolicyError, PolicyResult, PolicyVersion};

    // Cache types
    pub use polistore_cache::{CacheStats, PolicyCache, PolicyStore};
}

/// Version information for this crate.
pub mod version {
    /// Crate version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Minimum supported Rust version.
    pub const MSRV: &str = "1.75";

    /// Get version info as a string.
    pub fn version_string() -> String {
        format!("polistore {} (MSRV {})", VERSION, MSRV)
    }
}
