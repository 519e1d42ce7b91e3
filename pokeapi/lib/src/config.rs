//! Client configuration for the gateway.
//!
//! A [`ClientConfig`] fixes the base URL, the TLS policy, and the header set sent
//! with every request. Configurations are plain values; build as many as needed
//! (one per mock server in tests, for example).

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::error::ConfigError;

/// Base URL of the public PokeAPI service.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// `Accept` header sent on every request.
pub const ACCEPT_HEADER: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";

/// `User-Agent` header sent on every request.
pub const USER_AGENT_HEADER: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// Gateway configuration.
///
/// Certificate validation is on by default. Turning it off is an explicit
/// opt-in through [`ClientConfig::danger_accept_invalid_certs`].
///
/// ## Examples
///
/// ```rust
/// use pokeapi::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.host_header(), "pokeapi.co");
/// assert!(config.validates_certificates());
/// assert_eq!(config.url_for("/ability/stench"), "https://pokeapi.co/api/v2/ability/stench");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    host: String,
    accept_invalid_certs: bool,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration for the given base URL.
    ///
    /// ## Errors
    ///
    /// Returns an error if the scheme is not http/https or the URL has no host.
    pub fn new(base_url: Url) -> Result<Self, ConfigError> {
        match base_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    scheme: other.to_string(),
                });
            }
        }

        let host = match (base_url.host_str(), base_url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(ConfigError::MissingHost {
                    url: base_url.to_string(),
                });
            }
        };

        Ok(Self {
            base_url,
            host,
            accept_invalid_certs: false,
            timeout: None,
        })
    }

    /// Parses `base_url` and creates a configuration for it.
    ///
    /// ## Errors
    ///
    /// Returns an error if the string is not a valid http/https URL with a host.
    pub fn parse(base_url: &str) -> Result<Self, ConfigError> {
        Self::new(Url::parse(base_url)?)
    }

    /// Controls certificate validation.
    ///
    /// Passing `true` accepts any certificate the server presents, including
    /// expired, self-signed, or mismatched ones. Only use this against hosts
    /// you control.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Sets a total request timeout. Without one the transport default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns `true` unless certificate validation was explicitly disabled.
    pub fn validates_certificates(&self) -> bool {
        !self.accept_invalid_certs
    }

    /// Returns the configured request timeout, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the value sent in the `Host` header (`host[:port]` of the base URL).
    pub fn host_header(&self) -> &str {
        &self.host
    }

    /// Returns the full URL for `path`.
    ///
    /// The path is appended verbatim to the base URL (minus any trailing `/`).
    /// Escaping path segments and query values is the caller's job.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Returns the fixed header set as name/value pairs.
    pub fn header_set(&self) -> [(&'static str, &str); 3] {
        [
            ("Accept", ACCEPT_HEADER),
            ("Host", self.host.as_str()),
            ("User-Agent", USER_AGENT_HEADER),
        ]
    }

    /// Builds the fixed header set as a `HeaderMap`.
    pub(crate) fn header_map(&self) -> Result<HeaderMap, ConfigError> {
        let set = self.header_set();
        let mut headers = HeaderMap::with_capacity(set.len());
        for (name, value) in set {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ConfigError::invalid_header(name, e.to_string()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| ConfigError::invalid_header(name, e.to_string()))?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
    }
}
