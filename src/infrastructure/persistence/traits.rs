//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! This module defines the repository traits (ports) that abstract
//! persistence operations. The REST handlers talk to these ports only, so
//! the in-memory backend can later be swapped for a durable one without
//! touching the API layer.
//!
//! # Available Repositories
//!
//! - [`MovieInfoRepository`]: Persistence for movie info entities
//! - [`ReviewRepository`]: Persistence for review entities
//!
//! # Examples
//!
//! ```ignore
//! use cinefeed::infrastructure::persistence::traits::MovieInfoRepository;
//!
//! async fn find_from_2005(repo: &impl MovieInfoRepository) {
//!     let movie_infos = repo.find_by_year(2005).await.unwrap();
//!     println!("Found {} movie infos", movie_infos.len());
//! }
//! ```

use crate::domain::entities::{MovieInfo, Review};
use crate::domain::value_objects::{MovieInfoId, ReviewId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for movie info entities.
///
/// # Examples
///
/// ```ignore
/// use cinefeed::infrastructure::persistence::traits::MovieInfoRepository;
///
/// async fn example(repo: &impl MovieInfoRepository) {
///     // Store a new movie info; the store assigns the id
///     let stored = repo.save(&movie_info).await?;
///
///     // Filter the catalog by release year
///     let from_2005 = repo.find_by_year(2005).await?;
/// }
/// ```
#[async_trait]
pub trait MovieInfoRepository: Send + Sync + fmt::Debug {
    /// Saves a movie info and returns the stored copy.
    ///
    /// A fresh identifier is assigned when the entity carries none; an
    /// existing identifier is kept as-is and the stored entity under that
    /// id is replaced.
    ///
    /// # Errors
    ///
    /// Returns a `RepositoryError` if the backing store rejects the write.
    async fn save(&self, movie_info: &MovieInfo) -> RepositoryResult<MovieInfo>;

    /// Gets a movie info by ID.
    ///
    /// Returns `None` if the movie info does not exist.
    async fn get(&self, id: &MovieInfoId) -> RepositoryResult<Option<MovieInfo>>;

    /// Gets all movie infos.
    async fn get_all(&self) -> RepositoryResult<Vec<MovieInfo>>;

    /// Finds movie infos released in the given year.
    async fn find_by_year(&self, year: i32) -> RepositoryResult<Vec<MovieInfo>>;

    /// Deletes a movie info by ID.
    ///
    /// Returns `Ok(true)` if the movie info was deleted, `Ok(false)` if it
    /// didn't exist.
    async fn delete(&self, id: &MovieInfoId) -> RepositoryResult<bool>;

    /// Counts all movie infos.
    async fn count(&self) -> RepositoryResult<u64>;
}

/// Repository for review entities.
///
/// # Examples
///
/// ```ignore
/// use cinefeed::infrastructure::persistence::traits::ReviewRepository;
///
/// async fn example(repo: &impl ReviewRepository) {
///     // Find all reviews attached to a movie info
///     let reviews = repo.find_by_movie_info(&movie_info_id).await?;
/// }
/// ```
#[async_trait]
pub trait ReviewRepository: Send + Sync + fmt::Debug {
    /// Saves a review and returns the stored copy.
    ///
    /// A fresh identifier is assigned when the entity carries none; an
    /// existing identifier is kept as-is and the stored entity under that
    /// id is replaced.
    ///
    /// # Errors
    ///
    /// Returns a `RepositoryError` if the backing store rejects the write.
    async fn save(&self, review: &Review) -> RepositoryResult<Review>;

    /// Gets a review by ID.
    ///
    /// Returns `None` if the review does not exist.
    async fn get(&self, id: &ReviewId) -> RepositoryResult<Option<Review>>;

    /// Gets all reviews.
    async fn get_all(&self) -> RepositoryResult<Vec<Review>>;

    /// Finds reviews attached to the given movie info.
    async fn find_by_movie_info(&self, id: &MovieInfoId) -> RepositoryResult<Vec<Review>>;

    /// Deletes a review by ID.
    ///
    /// Returns `Ok(true)` if the review was deleted, `Ok(false)` if it
    /// didn't exist.
    async fn delete(&self, id: &ReviewId) -> RepositoryResult<bool>;

    /// Counts all reviews.
    async fn count(&self) -> RepositoryResult<u64>;
}
