//! # Downstream Clients
//!
//! HTTP clients for the movie-info and review services.
//!
//! The shared [`HttpClient`] classifies responses by status code and retries
//! transient server failures with a bounded, fixed-delay [`RetryPolicy`].
//! [`MovieInfoClient`] and [`ReviewsClient`] are the typed facades the
//! aggregation service talks to.
//!
//! ## Error classification
//!
//! - 2xx: decode the JSON body
//! - 404: [`DownstreamError::NotFound`], never retried
//! - other 4xx: [`DownstreamError::Client`], never retried
//! - 5xx: [`DownstreamError::Server`], retried up to the policy's budget
//! - connect/send failures: [`DownstreamError::Transport`]
//! - undecodable success body: [`DownstreamError::Decode`]

pub mod error;
pub mod http_client;
pub mod movie_info_client;
pub mod retry;
pub mod reviews_client;

pub use error::{DownstreamError, DownstreamResult};
pub use http_client::HttpClient;
pub use movie_info_client::MovieInfoClient;
pub use retry::RetryPolicy;
pub use reviews_client::ReviewsClient;
