//! HTTP client and network errors.

use thiserror::Error;

/// Errors from the HTTP client layer.
///
/// These errors represent network-level failures, HTTP status errors,
/// and connection issues that occur during request execution.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a status other than 200 OK.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Canonical reason for the status. Upstream error bodies are discarded.
        message: String,
    },

    /// Failed to establish connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),
}

impl ClientError {
    /// Returns the HTTP status code if this is an HTTP status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(_) | Self::Connection(_) => None,
        }
    }
}
