//! # polistore-core
//!
//! Core types and error handling for the polistore policy cache.
//!
//! This crate provides the foundational types used across the other
//! polistore crates:
//!
//! - [`CachedPolicy`] - The named, opaque policy record the cache stores
//! - [`PolicyVersion`] - Version tracking for observed policy records
//! - [`PolicyError`] - Error type for record construction and parsing
//!
//! ## Example
//!
//! ```rust
//! use polistore_core::{CachedPolicy, PolicyVersion};
//!
//! // Build a record the way an event source would deliver it
//! let policy = CachedPolicy::new("memory-pressure")?
//!     .with_version("v1");
//!
//! assert_eq!(policy.name(), "memory-pressure");
//! assert_eq!(policy.version(), &PolicyVersion::new("v1"));
//! # Ok::<(), polistore_core::PolicyError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod policy;
mod version;

pub use error::PolicyError;
pub use policy::CachedPolicy;
pub use version::PolicyVersion;

/// Result type alias using [`PolicyError`].
pub type PolicyResult<T> = std::result::Result<T, PolicyError>;
