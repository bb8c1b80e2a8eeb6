//! # Application Layer
//!
//! Orchestration on top of the domain and infrastructure layers.

pub mod services;

pub use services::MovieAggregationService;
