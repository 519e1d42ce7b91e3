//! Response parsing errors.

use thiserror::Error;

/// Errors while turning a 200 response body into JSON.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Empty response body when a JSON document was expected.
    #[error("Empty response body")]
    EmptyBody,
}
