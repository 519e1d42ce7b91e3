//! Request execution with tracing instrumentation.
//!
//! This module provides the [`Gateway`] struct for executing HTTP requests
//! against the configured base URL and normalizing their outcome.

use std::time::Duration;

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::redirect::Policy;
use serde_json::Value;
use tracing::{Span, debug, instrument, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ConfigError, GatewayError, ValidationError};
use crate::method::RestMethod;
use crate::response::ApiResponse;

/// Builder for configuring a [`Gateway`].
#[derive(Debug, Default)]
pub struct GatewayBuilder {
    config: ClientConfig,
}

impl GatewayBuilder {
    /// Creates a builder targeting the public PokeAPI.
    fn new() -> Self {
        Self::default()
    }

    /// Replaces the base URL, keeping the TLS and timeout settings.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let gateway = Gateway::builder()
    ///     .base_url(Url::parse(&mock_server.uri())?)?
    ///     .build()?;
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns an error if the URL is not http/https or has no host.
    pub fn base_url(mut self, base_url: Url) -> Result<Self, GatewayError> {
        let mut config = ClientConfig::new(base_url)?
            .danger_accept_invalid_certs(!self.config.validates_certificates());
        if let Some(timeout) = self.config.request_timeout() {
            config = config.timeout(timeout);
        }
        self.config = config;
        Ok(self)
    }

    /// Disables certificate validation when `accept` is `true`.
    ///
    /// See [`ClientConfig::danger_accept_invalid_certs`].
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config = self.config.danger_accept_invalid_certs(accept);
        self
    }

    /// Sets the request timeout.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let gateway = Gateway::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Builds the [`Gateway`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<Gateway, GatewayError> {
        Gateway::with_config(self.config)
    }
}

/// Async gateway to the PokeAPI.
///
/// Wraps a `reqwest::Client` preloaded with the fixed header set. Cloning is
/// cheap and clones share the connection pool; there is no other state
/// shared between calls.
///
/// ## Examples
///
/// ```rust,ignore
/// use pokeapi::{Gateway, RestMethod};
///
/// let gateway = Gateway::new()?;
/// let response = gateway
///     .execute("/pokemon?limit=5&offset=10", RestMethod::Get, None)
///     .await;
/// assert!(response.is_success());
/// ```
#[derive(Debug, Clone)]
pub struct Gateway {
    client: reqwest::Client,
    config: ClientConfig,
}

impl Gateway {
    /// Creates a new builder for configuring a gateway.
    pub fn builder() -> GatewayBuilder {
        GatewayBuilder::new()
    }

    /// Creates a gateway for the public PokeAPI with certificate validation on.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, GatewayError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a gateway from an explicit configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header set is invalid or the HTTP client cannot
    /// be constructed.
    pub fn with_config(config: ClientConfig) -> Result<Self, GatewayError> {
        // Redirects are reported as failures, never followed.
        let mut builder = reqwest::Client::builder()
            .default_headers(config.header_map()?)
            .redirect(Policy::none())
            .danger_accept_invalid_certs(!config.validates_certificates());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClientError::Request)?;

        if !config.validates_certificates() {
            warn!(
                base_url = %config.base_url(),
                "TLS certificate validation is disabled"
            );
        }

        Ok(Self { client, config })
    }

    /// Returns the configuration this gateway was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the full URL a path resolves to.
    pub fn url_for(&self, path: &str) -> String {
        self.config.url_for(path)
    }

    /// Executes a request and normalizes the outcome.
    ///
    /// Never fails: HTTP errors, transport errors, and parse errors all come
    /// back as [`ApiResponse::Failure`].
    ///
    /// ## Arguments
    ///
    /// * `path` - Appended verbatim to the base URL.
    /// * `method` - HTTP method.
    /// * `body` - Sent only for POST/PUT and only when non-empty.
    pub async fn execute(&self, path: &str, method: RestMethod, body: Option<&str>) -> ApiResponse {
        self.try_execute(path, method, body).await.into()
    }

    /// Executes a request and returns the typed error on failure.
    ///
    /// This is the same pipeline as [`Gateway::execute`], for callers that
    /// prefer `?` over inspecting an [`ApiResponse`].
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The URL cannot be built from the base URL and `path`
    /// - The request fails (connection refused, TLS failure, timeout, ...)
    /// - The server answers with any status other than 200
    /// - The 200 response body is empty or not valid JSON
    #[instrument(
        name = "api_request",
        skip(self, body),
        fields(
            http.method = %method,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn try_execute(
        &self,
        path: &str,
        method: RestMethod,
        body: Option<&str>,
    ) -> Result<Value, GatewayError> {
        let full_url = Url::parse(&self.url_for(path)).map_err(ConfigError::InvalidUrl)?;

        // Record the full URL in the span
        Span::current().record("http.url", full_url.as_str());

        let mut request = self.client.request(method.to_reqwest(), full_url);

        match body {
            Some(body) if method.has_body() && !body.is_empty() => {
                request = request.body(body.to_owned());
            }
            Some(_) => debug!("request body dropped"),
            None => {}
        }

        // Send request
        let response = request.send().await.map_err(|e| {
            Span::current().record("otel.status_code", "ERROR");
            warn!(error = %e, "request failed before a response arrived");
            if e.is_connect() {
                ClientError::Connection(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();
        let status_code = status.as_u16();

        // Record status in span
        Span::current().record("http.status_code", status_code);

        if status != StatusCode::OK {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);
            debug!(status = status_code, "non-OK status, discarding body");

            return Err(ClientError::HttpStatus {
                status: status_code,
                message: status.to_string(),
            }
            .into());
        }

        let body = response.bytes().await.map_err(ClientError::Request)?;
        let parsed = parse_json(&body).inspect_err(|e| {
            Span::current().record("otel.status_code", "ERROR");
            warn!(error = %e, "response body is not valid JSON");
        })?;

        Span::current().record("otel.status_code", "OK");
        debug!(bytes = body.len(), "request completed");

        Ok(parsed)
    }
}

/// Parses a 200 response body as JSON.
fn parse_json(body: &Bytes) -> Result<Value, ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }
    Ok(serde_json::from_slice(body)?)
}
