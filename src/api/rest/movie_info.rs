//! # Movie Info Routes
//!
//! REST surface of the movie info service.
//!
//! Creation is the only write that reaches the live feed: the stored
//! entity is published right after the save, so stream subscribers see
//! every catalog entry exactly once. Updates and deletes touch the store
//! only.
//!
//! # Endpoints
//!
//! - `POST /v1/movie-infos` - Create a movie info and feed it to the stream
//! - `GET /v1/movie-infos` - List movie infos, optionally filtered by year
//! - `GET /v1/movie-infos/stream` - Replay-then-live NDJSON feed
//! - `GET /v1/movie-infos/{id}` - Get movie info by id
//! - `PUT /v1/movie-infos/{id}` - Update movie info in place
//! - `DELETE /v1/movie-infos/{id}` - Delete movie info
//! - `GET /health` - Health check

use crate::api::rest::error::ApiError;
use crate::api::rest::{health, ndjson};
use crate::domain::entities::MovieInfo;
use crate::domain::value_objects::MovieInfoId;
use crate::infrastructure::feed::ReplayBroadcaster;
use crate::infrastructure::persistence::MovieInfoRepository;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::instrument;

/// Shared state of the movie info service.
#[derive(Debug, Clone)]
pub struct MovieInfoState {
    /// Backing store.
    pub repository: Arc<dyn MovieInfoRepository>,
    /// Feed of created movie infos.
    pub feed: ReplayBroadcaster<MovieInfo>,
}

impl MovieInfoState {
    /// Creates service state around a repository, with a fresh feed.
    #[must_use]
    pub fn new(repository: Arc<dyn MovieInfoRepository>) -> Self {
        Self {
            repository,
            feed: ReplayBroadcaster::new(),
        }
    }
}

/// Query parameters for GET /v1/movie-infos.
#[derive(Debug, Deserialize)]
pub struct MovieInfoFilter {
    /// Keep only movie infos released in this year.
    pub year: Option<i32>,
}

/// POST /v1/movie-infos
#[instrument(skip(state, movie_info), fields(title = %movie_info.title))]
async fn create_movie_info(
    State(state): State<MovieInfoState>,
    Json(movie_info): Json<MovieInfo>,
) -> Result<(StatusCode, Json<MovieInfo>), ApiError> {
    movie_info.validate()?;

    let stored = state.repository.save(&movie_info).await?;
    state.feed.publish(stored.clone());
    tracing::info!(id = ?stored.id(), "movie info created");

    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /v1/movie-infos
async fn list_movie_infos(
    State(state): State<MovieInfoState>,
    Query(filter): Query<MovieInfoFilter>,
) -> Result<Json<Vec<MovieInfo>>, ApiError> {
    let movie_infos = match filter.year {
        Some(year) => state.repository.find_by_year(year).await?,
        None => state.repository.get_all().await?,
    };
    Ok(Json(movie_infos))
}

/// GET /v1/movie-infos/{id}
async fn get_movie_info(
    State(state): State<MovieInfoState>,
    Path(id): Path<MovieInfoId>,
) -> Result<Json<MovieInfo>, ApiError> {
    let movie_info = state
        .repository
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no movie info found for id {id}")))?;
    Ok(Json(movie_info))
}

/// PUT /v1/movie-infos/{id}
#[instrument(skip(state, incoming))]
async fn update_movie_info(
    State(state): State<MovieInfoState>,
    Path(id): Path<MovieInfoId>,
    Json(incoming): Json<MovieInfo>,
) -> Result<Json<MovieInfo>, ApiError> {
    incoming.validate()?;

    let mut stored = state
        .repository
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no movie info found for id {id}")))?;
    stored.update_from(incoming);
    let stored = state.repository.save(&stored).await?;

    Ok(Json(stored))
}

/// DELETE /v1/movie-infos/{id}
#[instrument(skip(state))]
async fn delete_movie_info(
    State(state): State<MovieInfoState>,
    Path(id): Path<MovieInfoId>,
) -> Result<StatusCode, ApiError> {
    if state.repository.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!(
            "no movie info found for id {id}"
        )))
    }
}

/// GET /v1/movie-infos/stream
///
/// Replays every movie info created so far, then stays open for live ones.
async fn stream_movie_infos(State(state): State<MovieInfoState>) -> Response {
    ndjson::response(state.feed.subscribe())
}

/// Builds the movie info service router.
#[must_use]
pub fn router(state: MovieInfoState) -> Router {
    Router::new()
        .route(
            "/v1/movie-infos",
            get(list_movie_infos).post(create_movie_info),
        )
        .route("/v1/movie-infos/stream", get(stream_movie_infos))
        .route(
            "/v1/movie-infos/{id}",
            get(get_movie_info)
                .put(update_movie_info)
                .delete(delete_movie_info),
        )
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
