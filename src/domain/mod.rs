//! # Domain Layer
//!
//! Entities, identifiers, and validation rules shared by all services.
//!
//! ## Modules
//!
//! - [`entities`]: [`MovieInfo`](entities::MovieInfo),
//!   [`Review`](entities::Review), and the composed
//!   [`Movie`](entities::Movie) view
//! - [`value_objects`]: string-backed identifier newtypes
//! - [`errors`]: validation error type

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
