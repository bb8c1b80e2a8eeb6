//! # Movie Aggregation Service
//!
//! Composes a full movie view from the two downstream stores.
//!
//! This module provides the [`MovieAggregationService`] which fetches the
//! catalog entry and its reviews concurrently and joins them into a
//! [`Movie`]. The two lookups carry different weight: the catalog entry is
//! required, the reviews are best-effort.

use crate::domain::entities::{Movie, MovieInfo};
use crate::domain::value_objects::MovieInfoId;
use crate::infrastructure::downstream::error::DownstreamResult;
use crate::infrastructure::downstream::movie_info_client::MovieInfoClient;
use crate::infrastructure::downstream::reviews_client::ReviewsClient;
use futures::stream::BoxStream;

/// Service composing movie infos with their reviews.
///
/// Cheap to clone; clones share the underlying HTTP connection pools.
#[derive(Debug, Clone)]
pub struct MovieAggregationService {
    movie_info_client: MovieInfoClient,
    reviews_client: ReviewsClient,
}

impl MovieAggregationService {
    /// Creates a new MovieAggregationService.
    #[must_use]
    pub fn new(movie_info_client: MovieInfoClient, reviews_client: ReviewsClient) -> Self {
        Self {
            movie_info_client,
            reviews_client,
        }
    }

    /// Fetches the catalog entry and its reviews concurrently and joins
    /// them into a movie view.
    ///
    /// Failure handling per branch:
    ///
    /// - a missing catalog entry is fatal and surfaces as a not-found error
    ///   naming the id
    /// - missing reviews degrade to an empty list
    /// - any other failure on either branch is fatal; the first one wins
    ///   and the sibling lookup is cancelled
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`DownstreamError`] from either store.
    ///
    /// [`DownstreamError`]: crate::infrastructure::downstream::DownstreamError
    pub async fn retrieve_movie(&self, id: &MovieInfoId) -> DownstreamResult<Movie> {
        let (movie_info, reviews) = tokio::try_join!(
            self.movie_info_client.retrieve(id),
            self.reviews_client.retrieve_for_movie(id),
        )?;
        Ok(Movie::new(movie_info, reviews))
    }

    /// Opens the catalog store's live feed of created movie infos.
    ///
    /// The feed is passed through as-is; the aggregator adds nothing on
    /// top of what the store emits.
    ///
    /// # Errors
    ///
    /// Returns the classified error if the feed cannot be opened.
    pub async fn stream_movie_infos(
        &self,
    ) -> DownstreamResult<BoxStream<'static, DownstreamResult<MovieInfo>>> {
        self.movie_info_client.stream_all().await
    }
}
