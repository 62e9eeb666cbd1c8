//! Version tracking for observed policy records.
//!
//! This module provides [`PolicyVersion`], a type for telling successive
//! observations of the same policy apart. The event source stamps each
//! delivered record with the version it observed; reconcilers compare
//! versions to decide whether a cached record is current.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Version identifier for an observed policy record.
///
/// `PolicyVersion` wraps a version string supplied by the source of truth.
/// An empty version represents the initial state (no version observed yet).
///
/// # Example
///
/// ```rust
/// use polistore_core::PolicyVersion;
///
/// let v1 = PolicyVersion::new("v1");
/// let v2 = PolicyVersion::new("v2");
/// let initial = PolicyVersion::empty();
///
/// assert!(!v1.is_empty());
/// assert!(initial.is_empty());
/// assert_ne!(v1, v2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyVersion(String);

impl PolicyVersion {
    /// Create a new policy version from a string.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// Create an empty policy version (initial state).
    #[must_use]
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Check if the version is empty (initial state).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PolicyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PolicyVersion {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PolicyVersion {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<PolicyVersion> for String {
    fn from(v: PolicyVersion) -> Self {
        v.0
    }
}

impl AsRef<str> for PolicyVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
