//! # In-Memory Repositories
//!
//! In-memory implementations backing the movie info and review services.
//!
//! ## Available Repositories
//!
//! - [`InMemoryMovieInfoRepository`]: Movie info persistence
//! - [`InMemoryReviewRepository`]: Review persistence
//!
//! ## Thread Safety
//!
//! All implementations use `Arc<RwLock<HashMap>>` for thread-safe access.

pub mod movie_info_repository;
pub mod review_repository;

pub use movie_info_repository::InMemoryMovieInfoRepository;
pub use review_repository::InMemoryReviewRepository;
