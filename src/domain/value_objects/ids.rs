//! # Identifier Value Objects
//!
//! String-backed identifiers for movie infos and reviews.
//!
//! Identifiers are plain strings on the wire so callers can supply their own
//! stable values (fixture loading stays idempotent); [`MovieInfoId::generate`]
//! and [`ReviewId::generate`] produce random UUID-based ones for entities
//! saved without an identifier.
//!
//! # Examples
//!
//! ```
//! use cinefeed::domain::value_objects::MovieInfoId;
//!
//! let id = MovieInfoId::new("abc");
//! assert_eq!(id.as_str(), "abc");
//! assert_ne!(MovieInfoId::generate(), MovieInfoId::generate());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a movie catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieInfoId(String);

impl MovieInfoId {
    /// Creates an identifier from an existing string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieInfoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MovieInfoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for MovieInfoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier of a review.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(String);

impl ReviewId {
    /// Creates an identifier from an existing string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ReviewId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ReviewId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
