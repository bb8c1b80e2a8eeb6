//! # REST API
//!
//! REST endpoints using axum for the three services.
//!
//! Each service assembles its own router; the error type, the health
//! endpoint, and the NDJSON response helpers are shared.
//!
//! # Endpoints
//!
//! ## Movie info service
//! - `POST /v1/movie-infos` - Create a movie info and feed it to the stream
//! - `GET /v1/movie-infos` - List movie infos, optionally filtered by year
//! - `GET /v1/movie-infos/stream` - Replay-then-live NDJSON feed
//! - `GET /v1/movie-infos/{id}` - Get movie info by id
//! - `PUT /v1/movie-infos/{id}` - Update movie info in place
//! - `DELETE /v1/movie-infos/{id}` - Delete movie info
//!
//! ## Review service
//! - `POST /v1/reviews` - Create a review and feed it to the stream
//! - `GET /v1/reviews` - List reviews, optionally filtered by movie info id
//! - `GET /v1/reviews/stream` - Replay-then-live NDJSON feed
//! - `GET /v1/reviews/{id}` - Get review by id
//! - `PUT /v1/reviews/{id}` - Update review in place
//! - `DELETE /v1/reviews/{id}` - Delete review
//!
//! ## Movies service
//! - `GET /v1/movies/{id}` - Movie info joined with its reviews
//! - `GET /v1/movies/stream` - Passthrough of the movie info live feed
//!
//! ## Health
//! - `GET /health` - Health check endpoint, mounted on every service
//!
//! # Usage
//!
//! ```ignore
//! use cinefeed::api::rest::movie_info::{self, MovieInfoState};
//! use cinefeed::infrastructure::persistence::in_memory::InMemoryMovieInfoRepository;
//! use std::sync::Arc;
//!
//! let state = MovieInfoState::new(Arc::new(InMemoryMovieInfoRepository::new()));
//! let router = movie_info::router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod error;
pub mod health;
pub mod movie_info;
pub mod movies;
pub mod ndjson;
pub mod reviews;

pub use error::ApiError;
pub use movie_info::MovieInfoState;
pub use movies::MoviesState;
pub use reviews::ReviewState;
