//! # Domain Errors
//!
//! Error types for domain rule violations.
//!
//! Validation collects every failed constraint before reporting, so a caller
//! sees all problems with a payload at once rather than one per request.
//!
//! # Examples
//!
//! ```
//! use cinefeed::domain::errors::DomainError;
//!
//! let error = DomainError::from_violations(vec![
//!     "year must be positive".to_string(),
//!     "title must not be blank".to_string(),
//! ]);
//! assert_eq!(
//!     error.to_string(),
//!     "title must not be blank, year must be positive"
//! );
//! ```

use thiserror::Error;

/// Error type for domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// One or more field constraints failed.
    ///
    /// The message lists every violation, sorted and comma-separated.
    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a validation error from a single message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Builds a validation error from individual violation messages.
    ///
    /// Messages are sorted so the combined message is stable regardless of
    /// the order the checks ran in.
    #[must_use]
    pub fn from_violations(mut violations: Vec<String>) -> Self {
        violations.sort();
        Self::Validation(violations.join(", "))
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
