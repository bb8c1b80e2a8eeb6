//! # Movie Info Entity
//!
//! Catalog entry describing a single movie.
//!
//! # Examples
//!
//! ```
//! use cinefeed::domain::entities::MovieInfo;
//! use chrono::NaiveDate;
//!
//! let movie_info = MovieInfo::new(
//!     "Batman Begins",
//!     2005,
//!     vec!["Christian Bale".to_string()],
//!     NaiveDate::from_ymd_opt(2005, 6, 15).unwrap(),
//! );
//! assert!(movie_info.validate().is_ok());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::MovieInfoId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A catalog entry describing a single movie.
///
/// The identifier is optional on input: the store assigns a fresh one when
/// absent and keeps a caller-provided value as-is. Once assigned it never
/// changes; updates replace every other field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieInfo {
    /// Store identifier; `None` until persisted.
    #[serde(default)]
    pub movie_info_id: Option<MovieInfoId>,
    /// Movie title.
    pub title: String,
    /// Release year.
    pub year: i32,
    /// Cast member names.
    #[serde(default)]
    pub cast: Vec<String>,
    /// Release date.
    pub release_date: NaiveDate,
}

impl MovieInfo {
    /// Creates a movie info without an identifier.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        year: i32,
        cast: Vec<String>,
        release_date: NaiveDate,
    ) -> Self {
        Self {
            movie_info_id: None,
            title: title.into(),
            year,
            cast,
            release_date,
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, id: MovieInfoId) -> Self {
        self.movie_info_id = Some(id);
        self
    }

    /// Returns the identifier, if assigned.
    #[must_use]
    pub fn id(&self) -> Option<&MovieInfoId> {
        self.movie_info_id.as_ref()
    }

    /// Checks all field constraints, collecting every violation.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] with all violation messages,
    /// sorted and comma-joined, when any constraint fails:
    ///
    /// - `title` must not be blank
    /// - `year` must be positive
    /// - `cast` must not contain blank names (an empty list is allowed)
    pub fn validate(&self) -> DomainResult<()> {
        let mut violations = Vec::new();

        if self.title.trim().is_empty() {
            violations.push("title must not be blank".to_string());
        }
        if self.year <= 0 {
            violations.push("year must be positive".to_string());
        }
        if self.cast.iter().any(|name| name.trim().is_empty()) {
            violations.push("cast must not contain blank names".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::from_violations(violations))
        }
    }

    /// Applies an update, keeping the identifier unchanged.
    pub fn update_from(&mut self, incoming: MovieInfo) {
        self.title = incoming.title;
        self.year = incoming.year;
        self.cast = incoming.cast;
        self.release_date = incoming.release_date;
    }
}
