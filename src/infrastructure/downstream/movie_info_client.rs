//! # Movie Info Client
//!
//! Typed client for the movie info store. Wraps [`HttpClient`] with the
//! store's URL layout and rewrites a point-lookup miss into a caller-facing
//! message that names the requested id.

use crate::domain::entities::MovieInfo;
use crate::domain::value_objects::MovieInfoId;
use crate::infrastructure::downstream::error::{DownstreamError, DownstreamResult};
use crate::infrastructure::downstream::http_client::HttpClient;
use futures::stream::BoxStream;

/// Client for the movie info store's REST surface.
#[derive(Debug, Clone)]
pub struct MovieInfoClient {
    http: HttpClient,
    base_url: String,
}

impl MovieInfoClient {
    /// Creates a client for the collection at `base_url`, e.g.
    /// `http://localhost:8080/v1/movie-infos`.
    #[must_use]
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Fetches one movie info by id.
    ///
    /// # Errors
    ///
    /// Returns `DownstreamError::NotFound` with a message naming the id
    /// when the store has no such movie info, and the classified error for
    /// every other failure.
    pub async fn retrieve(&self, id: &MovieInfoId) -> DownstreamResult<MovieInfo> {
        let url = format!("{}/{id}", self.base_url);
        self.http.get_one(&url).await.map_err(|error| {
            if error.is_not_found() {
                DownstreamError::not_found(format!("no movie info found for id {id}"))
            } else {
                error
            }
        })
    }

    /// Opens the store's live NDJSON feed of created movie infos.
    ///
    /// # Errors
    ///
    /// Returns the classified error if the feed cannot be opened.
    pub async fn stream_all(
        &self,
    ) -> DownstreamResult<BoxStream<'static, DownstreamResult<MovieInfo>>> {
        let url = format!("{}/stream", self.base_url);
        self.http.get_stream(&url).await
    }
}
