//! # HTTP Client
//!
//! Shared HTTP client for the downstream stores.
//!
//! This module provides the one place where raw HTTP turns into
//! [`DownstreamError`] values:
//!
//! - [`HttpClient::get_one`]: point lookup, retried on server errors
//! - [`HttpClient::get_list`]: query lookup, a whole-query 404 is an empty
//!   result and nothing is retried
//! - [`HttpClient::get_stream`]: long-lived NDJSON feed, decoded line by
//!   line as bytes arrive
//!
//! # Examples
//!
//! ```ignore
//! use cinefeed::infrastructure::downstream::{HttpClient, RetryPolicy};
//!
//! let client = HttpClient::with_retry(RetryPolicy::default())?;
//! let movie_info: MovieInfo = client.get_one("http://localhost:8080/v1/movie-infos/abc").await?;
//! ```

use crate::infrastructure::downstream::error::{DownstreamError, DownstreamResult};
use crate::infrastructure::downstream::retry::RetryPolicy;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::io;
use tokio::io::AsyncBufReadExt;
use tokio_stream::wrappers::LinesStream;
use tokio_util::io::StreamReader;

/// HTTP client wrapper for the downstream stores.
///
/// Cheap to clone; clones share the underlying connection pool and carry
/// the same retry policy.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    retry: RetryPolicy,
}

impl HttpClient {
    /// Creates a client with the default retry policy.
    ///
    /// # Errors
    ///
    /// Returns `DownstreamError::Transport` if the underlying client cannot
    /// be constructed.
    pub fn new() -> DownstreamResult<Self> {
        Self::with_retry(RetryPolicy::default())
    }

    /// Creates a client with the given retry policy.
    ///
    /// # Errors
    ///
    /// Returns `DownstreamError::Transport` if the underlying client cannot
    /// be constructed.
    pub fn with_retry(retry: RetryPolicy) -> DownstreamResult<Self> {
        let client = Client::builder().build().map_err(|e| {
            DownstreamError::transport(format!("failed to create HTTP client: {e}"))
        })?;
        Ok(Self { client, retry })
    }

    /// Returns the configured retry policy.
    #[must_use]
    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }

    /// Makes a GET request for a single resource.
    ///
    /// Server errors are retried up to the policy's budget with a fixed
    /// delay between attempts; every other failure returns immediately.
    /// When the budget is exhausted the last server error is returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns the classified [`DownstreamError`] for non-2xx statuses,
    /// transport failures, and undecodable bodies.
    pub async fn get_one<T: DeserializeOwned>(&self, url: &str) -> DownstreamResult<T> {
        let mut attempt = 1u32;
        loop {
            match self.fetch_json(url).await {
                Ok(value) => return Ok(value),
                Err(error) if error.is_retryable() && attempt <= self.retry.max_retries() => {
                    tracing::warn!(url, attempt, error = %error, "downstream call failed, retrying");
                    tokio::time::sleep(self.retry.delay()).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }

    /// Makes a GET request for a filtered collection.
    ///
    /// A 404 for the whole query means "nothing matched" and yields an
    /// empty vector. Collection lookups are not retried.
    ///
    /// # Errors
    ///
    /// Returns the classified [`DownstreamError`] for non-2xx statuses
    /// other than 404, transport failures, and undecodable bodies.
    pub async fn get_list<T, P>(&self, url: &str, params: &P) -> DownstreamResult<Vec<T>>
    where
        T: DeserializeOwned,
        P: serde::Serialize + ?Sized,
    {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(map_transport_error)?;

        match check_status(response).await {
            Ok(response) => decode_json(response).await,
            Err(error) if error.is_not_found() => Ok(Vec::new()),
            Err(error) => Err(error),
        }
    }

    /// Opens a long-lived NDJSON feed.
    ///
    /// The response status is classified once when the connection opens;
    /// there is no retry and no reconnection. Each non-blank line decodes
    /// to one item, lazily, as bytes arrive. A lost connection or an
    /// undecodable line surfaces as an `Err` item in the stream.
    ///
    /// # Errors
    ///
    /// Returns the classified [`DownstreamError`] if the feed cannot be
    /// opened.
    pub async fn get_stream<T>(
        &self,
        url: &str,
    ) -> DownstreamResult<BoxStream<'static, DownstreamResult<T>>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = check_status(response).await?;

        let reader = StreamReader::new(response.bytes_stream().map_err(io::Error::other));
        let lines = LinesStream::new(reader.lines());
        let items = lines.filter_map(|line| {
            futures::future::ready(match line {
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => Some(
                    serde_json::from_str::<T>(&line)
                        .map_err(|e| DownstreamError::decode(format!("invalid feed line: {e}"))),
                ),
                Err(e) => Some(Err(DownstreamError::transport(format!(
                    "feed interrupted: {e}"
                )))),
            })
        });
        Ok(items.boxed())
    }

    /// Single GET attempt: send, classify, decode.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> DownstreamResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = check_status(response).await?;
        decode_json(response).await
    }
}

/// Passes 2xx responses through and classifies everything else, reading the
/// error body as the message.
async fn check_status(response: Response) -> DownstreamResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(classify_status(status, body))
}

fn classify_status(status: StatusCode, body: String) -> DownstreamError {
    let message = if body.trim().is_empty() {
        format!("request failed with status {status}")
    } else {
        body
    };
    if status == StatusCode::NOT_FOUND {
        DownstreamError::not_found(message)
    } else if status.is_server_error() {
        DownstreamError::server(status.as_u16(), message)
    } else {
        DownstreamError::client(status.as_u16(), message)
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> DownstreamResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| DownstreamError::decode(format!("failed to decode response body: {e}")))
}

fn map_transport_error(error: reqwest::Error) -> DownstreamError {
    if error.is_connect() {
        DownstreamError::transport(format!("connection failed: {error}"))
    } else if error.is_timeout() {
        DownstreamError::transport(format!("request timed out: {error}"))
    } else {
        DownstreamError::transport(format!("request failed: {error}"))
    }
}
