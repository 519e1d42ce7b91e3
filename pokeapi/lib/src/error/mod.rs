//! Layered error types for the gateway.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`GatewayError`] - Top-level error type for every pipeline failure
//! - [`ClientError`] - HTTP client, network and status errors
//! - [`ValidationError`] - Response body parsing errors
//! - [`ConfigError`] - Base URL, header and path construction errors
//!
//! None of these escape [`Gateway::execute`](crate::Gateway::execute); they are
//! folded into a [`Failure`](crate::Failure) at that boundary.

mod client_error;
mod config_error;
mod gateway_error;
mod validation_error;

pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use gateway_error::GatewayError;
pub use validation_error::ValidationError;
