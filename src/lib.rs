//! # cinefeed
//!
//! Movie catalog microservices with live feeds and a resilient aggregator.
//!
//! The crate ships three services built from one library:
//!
//! - `movie-info-service`: stores movie catalog entries and broadcasts every
//!   created entry on a replay-all NDJSON feed.
//! - `review-service`: stores reviews referencing movie infos, with the same
//!   feed mechanics.
//! - `movies-service`: composes a movie view by querying both stores
//!   concurrently, retrying transient upstream failures and tolerating
//!   missing reviews.
//!
//! ## Architecture
//!
//! - [`domain`]: entities, identifiers, and validation rules
//! - [`application`]: the aggregation service orchestrating downstream calls
//! - [`infrastructure`]: the replay broadcaster, downstream HTTP clients, and
//!   repository ports with in-memory implementations
//! - [`api`]: axum routers, handlers, and HTTP error mapping
//! - [`config`]: layered runtime settings

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
