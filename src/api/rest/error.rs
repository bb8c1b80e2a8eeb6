//! # API Errors
//!
//! HTTP-facing error type shared by the three services.
//!
//! Conversions from the domain, persistence, and downstream error families
//! pick the response status. The response body is always the plain-text
//! message, which keeps downstream messages byte-identical when the
//! aggregator mirrors them.

use crate::domain::DomainError;
use crate::infrastructure::downstream::DownstreamError;
use crate::infrastructure::persistence::RepositoryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Error type for REST handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed domain validation.
    #[error("{0}")]
    Validation(String),

    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A downstream store answered with an error status; status and
    /// message are mirrored to the caller.
    #[error("{message}")]
    Upstream {
        /// Status code to mirror.
        status: StatusCode,
        /// Message from the downstream store.
        message: String,
    },

    /// A downstream store was unreachable or returned an unreadable body.
    #[error("{0}")]
    BadGateway(String),

    /// Unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the response status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { status, .. } => *status,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation(message) => Self::Validation(message),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        Self::Internal(error.to_string())
    }
}

impl From<DownstreamError> for ApiError {
    fn from(error: DownstreamError) -> Self {
        match error {
            DownstreamError::NotFound { message } => Self::NotFound(message),
            DownstreamError::Client { status, message }
            | DownstreamError::Server { status, message } => Self::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            },
            DownstreamError::Transport { message } | DownstreamError::Decode { message } => {
                Self::BadGateway(message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}
