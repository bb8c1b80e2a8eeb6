//! # Domain Entities
//!
//! The persisted entities and the aggregated movie view.
//!
//! ## Entities
//!
//! - [`MovieInfo`]: movie catalog entry, persisted by the movie-info service
//! - [`Review`]: review referencing a movie info, persisted by the review
//!   service
//!
//! ## Views
//!
//! - [`Movie`]: catalog entry plus its reviews, composed per aggregation
//!   request and never persisted

pub mod movie;
pub mod movie_info;
pub mod review;

pub use movie::Movie;
pub use movie_info::MovieInfo;
pub use review::Review;
