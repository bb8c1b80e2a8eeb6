//! # NDJSON Responses
//!
//! Newline-delimited JSON response bodies for the live feeds.
//!
//! Each item serializes to a single JSON document terminated by `\n` and
//! leaves as its own body chunk, so clients can act on every entity as it
//! arrives instead of waiting for the response to end.

use axum::body::Body;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use futures::{Stream, StreamExt};
use serde::Serialize;
use std::io;

/// Content type for newline-delimited JSON.
pub const CONTENT_TYPE_NDJSON: &str = "application/x-ndjson";

fn encode_line<T: Serialize>(item: &T) -> io::Result<Bytes> {
    let mut line = serde_json::to_vec(item).map_err(io::Error::other)?;
    line.push(b'\n');
    Ok(Bytes::from(line))
}

/// Builds a streaming NDJSON response from an infallible item stream.
pub fn response<S, T>(items: S) -> Response
where
    S: Stream<Item = T> + Send + 'static,
    T: Serialize,
{
    let body = Body::from_stream(items.map(|item| encode_line(&item)));
    ([(header::CONTENT_TYPE, CONTENT_TYPE_NDJSON)], body).into_response()
}

/// Builds a streaming NDJSON response from a fallible item stream.
///
/// An `Err` item ends the body mid-stream. The status line has already
/// been sent at that point, so all that is left is to stop and log.
pub fn try_response<S, T, E>(items: S) -> Response
where
    S: Stream<Item = Result<T, E>> + Send + 'static,
    T: Serialize,
    E: std::fmt::Display,
{
    let body = Body::from_stream(items.map(|item| match item {
        Ok(item) => encode_line(&item),
        Err(error) => {
            tracing::warn!(%error, "live feed interrupted");
            Err(io::Error::other(error.to_string()))
        }
    }));
    ([(header::CONTENT_TYPE, CONTENT_TYPE_NDJSON)], body).into_response()
}
