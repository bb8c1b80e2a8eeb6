//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! This module provides application-level services including:
//! - [`MovieAggregationService`]: Concurrent movie info and review composition

pub mod movie_aggregation;

pub use movie_aggregation::MovieAggregationService;
