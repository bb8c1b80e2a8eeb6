//! # Review Entity
//!
//! A review attached to a movie catalog entry.
//!
//! The movie reference is a soft link: the review store never checks that
//! the referenced movie info exists. Consistency is resolved at read time by
//! the aggregation service.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{MovieInfoId, ReviewId};
use serde::{Deserialize, Serialize};

/// A review referencing a movie catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Store identifier; `None` until persisted.
    #[serde(default)]
    pub review_id: Option<ReviewId>,
    /// Referenced movie info. Required, but never checked for existence.
    #[serde(default)]
    pub movie_info_id: Option<MovieInfoId>,
    /// Free-form review text.
    #[serde(default)]
    pub comment: String,
    /// Rating, zero or higher.
    #[serde(default)]
    pub rating: f64,
}

impl Review {
    /// Creates a review without an identifier.
    #[must_use]
    pub fn new(movie_info_id: MovieInfoId, comment: impl Into<String>, rating: f64) -> Self {
        Self {
            review_id: None,
            movie_info_id: Some(movie_info_id),
            comment: comment.into(),
            rating,
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, id: ReviewId) -> Self {
        self.review_id = Some(id);
        self
    }

    /// Returns the identifier, if assigned.
    #[must_use]
    pub fn id(&self) -> Option<&ReviewId> {
        self.review_id.as_ref()
    }

    /// Checks all field constraints, collecting every violation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] with all violation messages,
    /// sorted and comma-joined, when any constraint fails:
    ///
    /// - `movie_info_id` must be present
    /// - `rating` must not be negative
    pub fn validate(&self) -> DomainResult<()> {
        let mut violations = Vec::new();

        if self.movie_info_id.is_none() {
            violations.push("movie_info_id must be present".to_string());
        }
        if self.rating < 0.0 {
            violations.push("rating must not be negative".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::from_violations(violations))
        }
    }

    /// Applies an update to the mutable fields.
    ///
    /// The identifier and the movie reference stay unchanged.
    pub fn update_from(&mut self, incoming: Review) {
        self.comment = incoming.comment;
        self.rating = incoming.rating;
    }
}
