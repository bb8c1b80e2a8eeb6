//! # Value Objects
//!
//! Immutable identifier types shared across layers.
//!
//! ## Identity Types
//!
//! - [`MovieInfoId`]: identifier of a movie catalog entry
//! - [`ReviewId`]: identifier of a review

pub mod ids;

pub use ids::{MovieInfoId, ReviewId};
