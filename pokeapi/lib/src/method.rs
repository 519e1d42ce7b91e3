//! HTTP method types for the gateway.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods the gateway can dispatch.
///
/// The PokeAPI is read-only, so every generated accessor uses [`RestMethod::Get`].
/// The other methods exist for callers driving [`Gateway::execute`](crate::Gateway::execute)
/// directly.
///
/// ## Examples
///
/// ```rust
/// use pokeapi::RestMethod;
///
/// let method = RestMethod::Get;
/// assert!(!method.has_body());
///
/// // Parse from string
/// let parsed: RestMethod = "PUT".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace a resource entirely.
    Put,
    /// HTTP DELETE - Remove a resource.
    Delete,
}

impl RestMethod {
    /// Returns `true` if a request body is attached for this method.
    ///
    /// Only POST and PUT carry a body; a body handed to GET or DELETE is dropped.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
