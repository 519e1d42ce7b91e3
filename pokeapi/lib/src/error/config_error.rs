//! Configuration and request construction errors.

use thiserror::Error;

use crate::resource::Resource;

/// Errors in gateway configuration or in building a request path.
///
/// These occur before anything is sent over the network.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Base URL uses a scheme other than http or https.
    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme {
        /// The rejected scheme.
        scheme: String,
    },

    /// Base URL has no host to send in the `Host` header.
    #[error("Base URL has no host: {url}")]
    MissingHost {
        /// The offending URL.
        url: String,
    },

    /// A header value could not be encoded.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// Header name.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// The resource can only be looked up by numeric id.
    #[error("{resource} does not support lookup by name")]
    NameLookupUnsupported {
        /// The id-only resource.
        resource: Resource,
    },
}

impl ConfigError {
    /// Creates an invalid header error.
    pub fn invalid_header(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            name,
            message: message.into(),
        }
    }
}
