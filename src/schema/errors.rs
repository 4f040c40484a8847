//! Schema construction and compilation errors
//!
//! These are programmer errors: a misconfigured builder should abort setup,
//! not reach an end user. Validation failures are never represented here;
//! they are data on the validator's reports.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while declaring or compiling a field schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// `label` was called with an empty string
    #[error("label must be a non-empty string")]
    EmptyLabel,

    /// `matches` was called with an empty property name
    #[error("matching property must be a non-empty string")]
    EmptyMatchingProperty,

    /// Minimum length exceeds maximum length
    #[error("minimum length {minimum} exceeds maximum length {maximum}")]
    BoundsConflict { minimum: usize, maximum: usize },

    /// A length bound cannot fit the enabled character classes
    #[error("{bound} length {value} cannot satisfy {classes} required character classes")]
    BoundBelowCharacterClasses {
        /// Which bound is too small ("minimum" or "maximum")
        bound: &'static str,
        value: usize,
        classes: usize,
    },
}
