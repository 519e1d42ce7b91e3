//! The gateway core.
//!
//! This module provides the async HTTP pipeline every accessor goes through:
//! build the request, attach the fixed header set, dispatch, and normalize the
//! outcome into an [`ApiResponse`](crate::ApiResponse).
//!
//! ## Examples
//!
//! ```rust,ignore
//! use pokeapi::{Gateway, RestMethod};
//!
//! let gateway = Gateway::new()?;
//! let response = gateway.execute("/ability/stench", RestMethod::Get, None).await;
//!
//! match response.into_result() {
//!     Ok(json) => println!("{}", json["name"]),
//!     Err(failure) => eprintln!("{failure}"),
//! }
//! ```

mod executor;

pub use executor::{Gateway, GatewayBuilder};
