//! # Reviews Client
//!
//! Typed client for the review store. Review lookups are always by movie,
//! so a miss for the whole query is an empty list rather than an error.

use crate::domain::entities::Review;
use crate::domain::value_objects::MovieInfoId;
use crate::infrastructure::downstream::error::DownstreamResult;
use crate::infrastructure::downstream::http_client::HttpClient;

/// Client for the review store's REST surface.
#[derive(Debug, Clone)]
pub struct ReviewsClient {
    http: HttpClient,
    base_url: String,
}

impl ReviewsClient {
    /// Creates a client for the collection at `base_url`, e.g.
    /// `http://localhost:8081/v1/reviews`.
    #[must_use]
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Fetches every review attached to the given movie info.
    ///
    /// A movie with no reviews yields an empty vector, whether the store
    /// answers with an empty collection or a 404 for the query.
    ///
    /// # Errors
    ///
    /// Returns the classified error for transport failures, undecodable
    /// bodies, and non-404 error statuses.
    pub async fn retrieve_for_movie(&self, id: &MovieInfoId) -> DownstreamResult<Vec<Review>> {
        self.http
            .get_list(&self.base_url, &[("movie_info_id", id.as_str())])
            .await
    }
}
