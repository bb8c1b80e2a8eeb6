//! # Downstream Errors
//!
//! Error types for downstream service calls.
//!
//! Every failure carries the upstream message so callers can surface it
//! unchanged; [`DownstreamError::is_retryable`] is the single spot deciding
//! what the retry loop may attempt again.
//!
//! # Examples
//!
//! ```
//! use cinefeed::infrastructure::downstream::DownstreamError;
//!
//! let error = DownstreamError::server(500, "boom");
//! assert!(error.is_retryable());
//!
//! let error = DownstreamError::not_found("no movie info found for id abc");
//! assert!(!error.is_retryable());
//! assert!(error.is_not_found());
//! ```

use thiserror::Error;

/// Error type for downstream service calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownstreamError {
    /// The requested resource does not exist (HTTP 404).
    #[error("downstream resource not found: {message}")]
    NotFound {
        /// Upstream error message.
        message: String,
    },

    /// The request was rejected (HTTP 4xx other than 404).
    #[error("downstream client error ({status}): {message}")]
    Client {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream error message.
        message: String,
    },

    /// The downstream service failed (HTTP 5xx). Considered transient.
    #[error("downstream server error ({status}): {message}")]
    Server {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream error message.
        message: String,
    },

    /// The request never produced an HTTP response.
    #[error("downstream transport error: {message}")]
    Transport {
        /// Error message.
        message: String,
    },

    /// A success response carried an undecodable body.
    #[error("downstream decode error: {message}")]
    Decode {
        /// Error message.
        message: String,
    },
}

impl DownstreamError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates a client error.
    #[must_use]
    pub fn client(status: u16, message: impl Into<String>) -> Self {
        Self::Client {
            status,
            message: message.into(),
        }
    }

    /// Creates a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Creates a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Returns true if a retry may succeed.
    ///
    /// Only server errors qualify: not-found and client errors are
    /// deterministic, and transport or decode failures point at problems a
    /// blind retry will not fix.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the upstream HTTP status code, if the call got a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Client { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }

    /// Returns the error message without the variant prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message }
            | Self::Client { message, .. }
            | Self::Server { message, .. }
            | Self::Transport { message }
            | Self::Decode { message } => message,
        }
    }
}

/// Result type for downstream service calls.
pub type DownstreamResult<T> = Result<T, DownstreamError>;
