//! # Infrastructure Layer
//!
//! Adapters connecting the domain to the outside world.
//!
//! ## Modules
//!
//! - [`downstream`]: HTTP clients for the movie info and review stores
//! - [`feed`]: Replay-then-live broadcast of created entities
//! - [`persistence`]: Repository ports and in-memory implementations

pub mod downstream;
pub mod feed;
pub mod persistence;
