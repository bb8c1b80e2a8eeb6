//! # Movie View
//!
//! Catalog entry plus its reviews, composed per aggregation request.

use crate::domain::entities::{MovieInfo, Review};
use serde::{Deserialize, Serialize};

/// A movie catalog entry together with its reviews.
///
/// Built by the aggregation service from the two downstream lookups and
/// never persisted. `reviews` is empty when the review store has nothing
/// for the movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Catalog entry for the movie.
    pub movie_info: MovieInfo,
    /// Reviews attached to the movie, possibly empty.
    pub reviews: Vec<Review>,
}

impl Movie {
    /// Composes a movie view from its parts.
    #[must_use]
    pub fn new(movie_info: MovieInfo, reviews: Vec<Review>) -> Self {
        Self {
            movie_info,
            reviews,
        }
    }
}
