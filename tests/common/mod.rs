//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bytes::Bytes;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&serde_json::Value>,
) -> (StatusCode, Bytes) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, body_bytes)
}

/// Send a POST request with a JSON body and return status plus JSON body.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, "POST", uri, Some(body)).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Send a POST request and return status plus the raw text body.
pub async fn post_text(app: Router, uri: &str, body: &serde_json::Value) -> (StatusCode, String) {
    let (status, bytes) = send(app, "POST", uri, Some(body)).await;
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Send a PUT request with a JSON body and return status plus JSON body.
pub async fn put_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, "PUT", uri, Some(body)).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Send a PUT request and return status plus the raw text body.
pub async fn put_text(app: Router, uri: &str, body: &serde_json::Value) -> (StatusCode, String) {
    let (status, bytes) = send(app, "PUT", uri, Some(body)).await;
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Send a GET request and return status plus JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, "GET", uri, None).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Send a GET request and return status plus the raw text body.
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let (status, bytes) = send(app, "GET", uri, None).await;
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Send a DELETE request and return the status.
pub async fn delete(app: Router, uri: &str) -> StatusCode {
    let (status, _) = send(app, "DELETE", uri, None).await;
    status
}

/// Read the next NDJSON line from a streaming response body.
///
/// Each line leaves the server as its own body frame, so one frame read
/// yields exactly one serialized entity.
pub async fn next_stream_line(body: &mut Body) -> serde_json::Value {
    let frame = body.frame().await.unwrap().unwrap();
    let bytes = frame.into_data().unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
