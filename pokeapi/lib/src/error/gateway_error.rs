//! Top-level gateway error type.

use super::{ClientError, ConfigError, ValidationError};
use thiserror::Error;

/// Top-level error type for all gateway operations.
///
/// Returned by [`Gateway::try_execute`](crate::Gateway::try_execute) and by
/// construction. [`Gateway::execute`](crate::Gateway::execute) converts it into
/// a [`Failure`](crate::Failure) instead of returning it.
///
/// ## Examples
///
/// ```rust,ignore
/// use pokeapi::GatewayError;
///
/// fn handle_error(err: GatewayError) {
///     match err {
///         GatewayError::Client(e) => eprintln!("Network error: {e}"),
///         GatewayError::Validation(e) => eprintln!("Invalid response: {e}"),
///         GatewayError::Config(e) => eprintln!("Configuration error: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP client errors (network, connection failures, non-OK status).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Response parsing errors.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration and request construction errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GatewayError {
    /// Returns the HTTP status code if the server answered with a non-OK status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            _ => None,
        }
    }
}
