//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for the HTTP transport.
///
/// Covers every way a request can fail before an HTTP status is known.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, refused connections,
    /// TLS handshake failures and broken connections while reading.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No response arrived within the configured timeout.
    ///
    /// The in-flight request has been cancelled.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built for this URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl HttpError {
    /// Short machine-readable code for diagnostics.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Connection(_) => "CONNECTION",
            Self::Timeout => "TIMEOUT",
            Self::InvalidUrl(_) => "INVALID_URL",
        }
    }
}

/// Error type for delivering a message to a webhook.
///
/// A reachable endpoint that answers with a non-2xx status is
/// [`DeliveryError::Rejected`]; anything that prevents getting a status at
/// all is [`DeliveryError::Transport`].
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The endpoint answered with a non-success status.
    #[error("HTTP {}: {}", .status.as_u16(), .body)]
    Rejected {
        /// Response status code
        status: http::StatusCode,
        /// Response body, lossily decoded as UTF-8
        body: String,
    },

    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// The message could not be encoded; nothing was sent.
    #[error("Failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),
}

impl DeliveryError {
    /// Returns the status code if the endpoint answered.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(_) | Self::Encode(_) => None,
        }
    }
}
