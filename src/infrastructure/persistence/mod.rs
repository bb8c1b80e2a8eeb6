//! # Persistence Layer
//!
//! Repository ports and their implementations.
//!
//! ## Repository Traits (Ports)
//!
//! - [`MovieInfoRepository`]: Persistence for movie info entities
//! - [`ReviewRepository`]: Persistence for review entities
//!
//! ## Implementations
//!
//! - `in_memory`: In-memory implementations backing the services

pub mod in_memory;
pub mod traits;

pub use traits::{MovieInfoRepository, RepositoryError, RepositoryResult, ReviewRepository};
