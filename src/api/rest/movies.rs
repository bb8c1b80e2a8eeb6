//! # Movie Routes
//!
//! REST surface of the movies aggregation service. Holds no state of its
//! own; every request fans out to the two downstream stores.
//!
//! # Endpoints
//!
//! - `GET /v1/movies/{id}` - Movie info joined with its reviews
//! - `GET /v1/movies/stream` - Passthrough of the movie info live feed
//! - `GET /health` - Health check

use crate::api::rest::error::ApiError;
use crate::api::rest::{health, ndjson};
use crate::application::services::MovieAggregationService;
use crate::domain::entities::Movie;
use crate::domain::value_objects::MovieInfoId;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::instrument;

/// Shared state of the movies service.
#[derive(Debug, Clone)]
pub struct MoviesState {
    /// Aggregation over the two downstream stores.
    pub aggregation: MovieAggregationService,
}

impl MoviesState {
    /// Creates service state around the aggregation service.
    #[must_use]
    pub fn new(aggregation: MovieAggregationService) -> Self {
        Self { aggregation }
    }
}

/// GET /v1/movies/{id}
#[instrument(skip(state))]
async fn get_movie(
    State(state): State<MoviesState>,
    Path(id): Path<MovieInfoId>,
) -> Result<Json<Movie>, ApiError> {
    let movie = state.aggregation.retrieve_movie(&id).await?;
    Ok(Json(movie))
}

/// GET /v1/movies/stream
///
/// Opens the catalog store's feed and forwards it unchanged.
async fn stream_movies(State(state): State<MoviesState>) -> Result<Response, ApiError> {
    let feed = state.aggregation.stream_movie_infos().await?;
    Ok(ndjson::try_response(feed))
}

/// Builds the movies service router.
#[must_use]
pub fn router(state: MoviesState) -> Router {
    Router::new()
        .route("/v1/movies/stream", get(stream_movies))
        .route("/v1/movies/{id}", get(get_movie))
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
