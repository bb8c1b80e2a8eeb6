//! # Review Routes
//!
//! REST surface of the review service. Mirrors the movie info surface:
//! creation publishes to the live feed, updates and deletes touch the
//! store only, and the list endpoint filters by the referenced movie.
//!
//! # Endpoints
//!
//! - `POST /v1/reviews` - Create a review and feed it to the stream
//! - `GET /v1/reviews` - List reviews, optionally filtered by movie info id
//! - `GET /v1/reviews/stream` - Replay-then-live NDJSON feed
//! - `GET /v1/reviews/{id}` - Get review by id
//! - `PUT /v1/reviews/{id}` - Update review in place
//! - `DELETE /v1/reviews/{id}` - Delete review
//! - `GET /health` - Health check

use crate::api::rest::error::ApiError;
use crate::api::rest::{health, ndjson};
use crate::domain::entities::Review;
use crate::domain::value_objects::{MovieInfoId, ReviewId};
use crate::infrastructure::feed::ReplayBroadcaster;
use crate::infrastructure::persistence::ReviewRepository;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::instrument;

/// Shared state of the review service.
#[derive(Debug, Clone)]
pub struct ReviewState {
    /// Backing store.
    pub repository: Arc<dyn ReviewRepository>,
    /// Feed of created reviews.
    pub feed: ReplayBroadcaster<Review>,
}

impl ReviewState {
    /// Creates service state around a repository, with a fresh feed.
    #[must_use]
    pub fn new(repository: Arc<dyn ReviewRepository>) -> Self {
        Self {
            repository,
            feed: ReplayBroadcaster::new(),
        }
    }
}

/// Query parameters for GET /v1/reviews.
#[derive(Debug, Deserialize)]
pub struct ReviewFilter {
    /// Keep only reviews referencing this movie info.
    pub movie_info_id: Option<MovieInfoId>,
}

/// POST /v1/reviews
#[instrument(skip(state, review))]
async fn create_review(
    State(state): State<ReviewState>,
    Json(review): Json<Review>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    review.validate()?;

    let stored = state.repository.save(&review).await?;
    state.feed.publish(stored.clone());
    tracing::info!(id = ?stored.id(), "review created");

    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /v1/reviews
async fn list_reviews(
    State(state): State<ReviewState>,
    Query(filter): Query<ReviewFilter>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = match filter.movie_info_id {
        Some(movie_info_id) => state.repository.find_by_movie_info(&movie_info_id).await?,
        None => state.repository.get_all().await?,
    };
    Ok(Json(reviews))
}

/// GET /v1/reviews/{id}
async fn get_review(
    State(state): State<ReviewState>,
    Path(id): Path<ReviewId>,
) -> Result<Json<Review>, ApiError> {
    let review = state
        .repository
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no review found for id {id}")))?;
    Ok(Json(review))
}

/// PUT /v1/reviews/{id}
#[instrument(skip(state, incoming))]
async fn update_review(
    State(state): State<ReviewState>,
    Path(id): Path<ReviewId>,
    Json(incoming): Json<Review>,
) -> Result<Json<Review>, ApiError> {
    incoming.validate()?;

    let mut stored = state
        .repository
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no review found for id {id}")))?;
    stored.update_from(incoming);
    let stored = state.repository.save(&stored).await?;

    Ok(Json(stored))
}

/// DELETE /v1/reviews/{id}
#[instrument(skip(state))]
async fn delete_review(
    State(state): State<ReviewState>,
    Path(id): Path<ReviewId>,
) -> Result<StatusCode, ApiError> {
    if state.repository.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("no review found for id {id}")))
    }
}

/// GET /v1/reviews/stream
///
/// Replays every review created so far, then stays open for live ones.
async fn stream_reviews(State(state): State<ReviewState>) -> Response {
    ndjson::response(state.feed.subscribe())
}

/// Builds the review service router.
#[must_use]
pub fn router(state: ReviewState) -> Router {
    Router::new()
        .route("/v1/reviews", get(list_reviews).post(create_review))
        .route("/v1/reviews/stream", get(stream_reviews))
        .route(
            "/v1/reviews/{id}",
            get(get_review).put(update_review).delete(delete_review),
        )
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
