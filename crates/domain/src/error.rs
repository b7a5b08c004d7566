//! Unified error types for the domain layer
//!
//! The challenge core recovers locally from nearly everything (unknown moods,
//! absent challenges, corrupt storage). What remains are authoring mistakes in a
//! catalog and unparseable labels, which surface through this type.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when catalog invariants are violated:
    /// - Duplicate challenge ids within one mood
    /// - Zero-point challenges
    /// - Missing fallback list
    ///
    /// # Example
    /// ```ignore
    /// if challenge.points == 0 {
    ///     return Err(DomainError::validation("Challenge points must be positive"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
