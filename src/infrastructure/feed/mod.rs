//! # Live Feed
//!
//! In-process replay-all broadcasting for the stream endpoints.
//!
//! - [`ReplayBroadcaster`]: shared handle for publishing and subscribing
//! - [`ReplayFeed`]: per-subscriber stream, backlog first, then live

pub mod replay_broadcaster;

pub use replay_broadcaster::{ReplayBroadcaster, ReplayFeed};
