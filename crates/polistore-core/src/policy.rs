//! The policy record stored in the cache.
//!
//! This module provides [`CachedPolicy`], the named record delivered by an
//! event source and cached locally. The cache never interprets the record's
//! document; it reads only the name to key storage.

use serde::{Deserialize, Serialize};

use crate::{PolicyError, PolicyVersion};

/// A named policy record as observed from the source of truth.
///
/// A `CachedPolicy` is an immutable snapshot of an administrator-authored
/// policy object at the moment the event source observed it. It carries:
///
/// - A unique, non-empty `name` — the cache key.
/// - A [`PolicyVersion`] — empty until the source stamps one.
/// - An opaque JSON `document` — the policy body, never interpreted here.
///
/// # Example
///
/// ```rust
/// use polistore_core::CachedPolicy;
///
/// let policy = CachedPolicy::new("memory-pressure")?
///     .with_version("v1")
///     .with_document(serde_json::json!({ "threshold": "80%" }));
///
/// assert_eq!(policy.name(), "memory-pressure");
/// assert_eq!(policy.version().as_str(), "v1");
/// # Ok::<(), polistore_core::PolicyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedPolicy {
    name: String,
    #[serde(default, skip_serializing_if = "PolicyVersion::is_empty")]
    version: PolicyVersion,
    #[serde(default)]
    document: serde_json::Value,
}

impl CachedPolicy {
    /// Create a new policy record with the given name.
    ///
    /// The version starts empty and the document starts as JSON `null`;
    /// use [`with_version`](Self::with_version) and
    /// [`with_document`](Self::with_document) to fill them in.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidPolicy`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, PolicyError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PolicyError::invalid(name, "policy name cannot be empty"));
        }
        Ok(Self {
            name,
            version: PolicyVersion::empty(),
            document: serde_json::Value::Null,
        })
    }

    /// Parse a policy record from its JSON representation.
    ///
    /// This is the constructor used for records arriving from an event
    /// source in serialized form.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::MalformedDocument`] if the payload is not
    /// valid JSON for a policy record, or [`PolicyError::InvalidPolicy`]
    /// if the parsed record has an empty name.
    pub fn from_json(payload: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(payload)?;
        if policy.name.is_empty() {
            return Err(PolicyError::invalid(
                policy.name,
                "policy name cannot be empty",
            ));
        }
        Ok(policy)
    }

    /// Set the observed version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<PolicyVersion>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the policy document.
    #[must_use]
    pub fn with_document(mut self, document: serde_json::Value) -> Self {
        self.document = document;
        self
    }

    /// Get the policy name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the observed version.
    #[inline]
    #[must_use]
    pub fn version(&self) -> &PolicyVersion {
        &self.version
    }

    /// Get the policy document.
    #[inline]
    #[must_use]
    pub fn document(&self) -> &serde_json::Value {
        &self.document
    }
}
