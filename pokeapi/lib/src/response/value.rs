//! The tagged result of a gateway call.

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::Failure;
use crate::error::GatewayError;

/// Outcome of a gateway call.
///
/// `Success` holds the server's JSON exactly as received; no schema is applied.
/// `Failure` holds the normalized failure descriptor.
///
/// ## Examples
///
/// ```rust
/// use pokeapi::{ApiResponse, Failure};
/// use serde_json::json;
///
/// let ok = ApiResponse::Success(json!({ "id": 1, "name": "stench" }));
/// assert!(ok.is_success());
/// assert_eq!(ok.as_json().unwrap()["name"], "stench");
///
/// let failed = ApiResponse::Failure(Failure::http(404));
/// assert_eq!(failed.to_json(), json!({ "error": "HTTP Error: 404", "success": false }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Parsed JSON payload from a 200 response.
    Success(Value),
    /// Normalized failure.
    Failure(Failure),
}

impl ApiResponse {
    /// Returns `true` for a successful response.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a failed response.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Attempt to get the JSON payload, returning `None` for failures.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Success(v) => Some(v),
            Self::Failure(_) => None,
        }
    }

    /// Attempt to get the failure, returning `None` for successes.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(f) => Some(f),
        }
    }

    /// Converts into a `Result`, for use with `?`.
    pub fn into_result(self) -> Result<Value, Failure> {
        match self {
            Self::Success(v) => Ok(v),
            Self::Failure(f) => Err(f),
        }
    }

    /// Renders the response the way it appears on the wire: the payload
    /// itself on success, `{"error": ..., "success": false}` on failure.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Success(v) => v.clone(),
            Self::Failure(f) => f.to_json(),
        }
    }

    /// Consuming variant of [`ApiResponse::to_json`].
    pub fn into_json(self) -> Value {
        match self {
            Self::Success(v) => v,
            Self::Failure(f) => f.to_json(),
        }
    }
}

impl Serialize for ApiResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(v) => v.serialize(serializer),
            Self::Failure(f) => f.serialize(serializer),
        }
    }
}

impl From<Result<Value, GatewayError>> for ApiResponse {
    fn from(result: Result<Value, GatewayError>) -> Self {
        match result {
            Ok(v) => Self::Success(v),
            Err(e) => Self::Failure(e.into()),
        }
    }
}

impl From<Result<Value, Failure>> for ApiResponse {
    fn from(result: Result<Value, Failure>) -> Self {
        match result {
            Ok(v) => Self::Success(v),
            Err(f) => Self::Failure(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::response::FailureKind;
    use serde_json::json;

    #[test]
    fn test_success_accessors() {
        let response = ApiResponse::Success(json!({ "name": "x" }));
        assert!(response.is_success());
        assert!(!response.is_failure());
        assert_eq!(response.as_json(), Some(&json!({ "name": "x" })));
        assert_eq!(response.failure(), None);
    }

    #[test]
    fn test_failure_accessors() {
        let response = ApiResponse::Failure(Failure::http(500));
        assert!(response.is_failure());
        assert_eq!(response.as_json(), None);
        assert_eq!(response.failure().unwrap().status(), Some(500));
    }

    #[test]
    fn test_into_result() {
        let ok = ApiResponse::Success(json!([1, 2, 3]));
        assert_eq!(ok.into_result(), Ok(json!([1, 2, 3])));

        let err = ApiResponse::Failure(Failure::http(404));
        assert_eq!(err.into_result(), Err(Failure::http(404)));
    }

    #[test]
    fn test_success_serializes_payload_verbatim() {
        let payload = json!({ "id": 1, "name": "stench", "nested": { "a": [null, true] } });
        let response = ApiResponse::Success(payload.clone());
        assert_eq!(serde_json::to_value(&response).unwrap(), payload);
        assert_eq!(response.into_json(), payload);
    }

    #[test]
    fn test_from_gateway_result() {
        let err: Result<Value, GatewayError> =
            Err(ClientError::Connection("refused".to_string()).into());
        let response = ApiResponse::from(err);
        let failure = response.failure().unwrap();
        assert_eq!(failure.kind(), FailureKind::Transport);
        assert_eq!(
            response.to_json(),
            json!({ "error": "Exception: Connection failed: refused", "success": false })
        );
    }
}
