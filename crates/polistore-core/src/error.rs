//! Error types for policy records.
//!
//! This module provides [`PolicyError`], the error type for policy record
//! construction and parsing. Cache operations themselves never fail: absence
//! is reported through `Option` and `bool` returns, not through errors.

/// Error type for policy record construction and parsing.
///
/// This error type covers the two ways a policy record can be rejected
/// before it ever reaches the cache:
///
/// - The record fails validation (for example, an empty name).
/// - The record's JSON representation cannot be parsed.
///
/// # Example
///
/// ```rust
/// use polistore_core::CachedPolicy;
///
/// let err = CachedPolicy::new("").unwrap_err();
/// assert!(err.to_string().contains("name"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// Policy record failed validation.
    #[error("invalid policy {name:?}: {reason}")]
    InvalidPolicy {
        /// The name of the offending policy (possibly empty).
        name: String,
        /// Reason why the record was rejected.
        reason: String,
    },

    /// Policy document could not be parsed from JSON.
    #[error("malformed policy document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}

impl PolicyError {
    /// Create a validation error for a policy name.
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPolicy {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
