//! Normalized failure descriptor.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::GatewayError;

/// What kind of failure a [`Failure`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The server answered with a status other than 200.
    Http {
        /// The status code returned.
        status: u16,
    },
    /// The request could not be sent or the response could not be read.
    Transport,
    /// A 200 response arrived but its body was not valid JSON.
    Parse,
    /// The request could not be built (bad URL, header, or path).
    Config,
}

/// A failed gateway call.
///
/// The rendered `error` string distinguishes only two cases, matching the wire
/// contract: `"HTTP Error: <status>"` for [`FailureKind::Http`] and
/// `"Exception: <message>"` for everything else. [`Failure::kind`] keeps the
/// finer distinction for callers that need it.
///
/// ## Examples
///
/// ```rust
/// use pokeapi::{Failure, FailureKind};
///
/// let failure = Failure::http(404);
/// assert_eq!(failure.kind(), FailureKind::Http { status: 404 });
/// assert_eq!(failure.error(), "HTTP Error: 404");
/// assert_eq!(
///     failure.to_json(),
///     serde_json::json!({ "error": "HTTP Error: 404", "success": false })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    kind: FailureKind,
    message: String,
}

impl Failure {
    /// Creates a failure for a non-OK HTTP status.
    pub fn http(status: u16) -> Self {
        Self {
            kind: FailureKind::Http { status },
            message: format!("HTTP {status}"),
        }
    }

    /// Creates an exception-kind failure of the given kind.
    pub fn exception(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the failure kind.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns the underlying message without the `Exception: ` prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status for [`FailureKind::Http`] failures.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::Http { status } => Some(status),
            _ => None,
        }
    }

    /// Returns the rendered `error` string.
    pub fn error(&self) -> String {
        match self.kind {
            FailureKind::Http { status } => format!("HTTP Error: {status}"),
            _ => format!("Exception: {}", self.message),
        }
    }

    /// Renders the failure as `{"error": ..., "success": false}`.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "error": self.error(),
            "success": false,
        })
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error())
    }
}

impl std::error::Error for Failure {}

#[derive(Serialize)]
struct FailureBody {
    error: String,
    success: bool,
}

impl Serialize for Failure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FailureBody {
            error: self.error(),
            success: false,
        }
        .serialize(serializer)
    }
}

impl From<GatewayError> for Failure {
    fn from(err: GatewayError) -> Self {
        if let Some(status) = err.status_code() {
            return Self::http(status);
        }
        let kind = match &err {
            GatewayError::Client(_) => FailureKind::Transport,
            GatewayError::Validation(_) => FailureKind::Parse,
            GatewayError::Config(_) => FailureKind::Config,
        };
        Self::exception(kind, err.to_string())
    }
}
