//! Async gateway to the [PokeAPI](https://pokeapi.co) reference data service.
//!
//! The crate is two layers:
//!
//! - [`Gateway`] sends one HTTP request with a fixed header set and normalizes
//!   the outcome into an [`ApiResponse`]: the server's JSON on a 200, a
//!   [`Failure`] otherwise.
//! - [`PokeApi`] maps every resource in the PokeAPI onto that gateway. Its
//!   per-resource accessors (`berry_list`, `ability_by_name`,
//!   `pokemon_encounters_by_id`, ...) are generated from a single resource
//!   table, see [`Resource`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pokeapi::PokeApi;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pokeapi::GatewayError> {
//!     let api = PokeApi::new()?;
//!
//!     match api.pokemon_by_name("charmander").await.into_result() {
//!         Ok(json) => println!("{}", json["id"]),
//!         Err(failure) => eprintln!("{failure}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Failures
//!
//! Accessors never panic and never return `Err`. A failed call renders as
//!
//! ```json
//! { "error": "HTTP Error: 404", "success": false }
//! ```
//!
//! for a non-200 status, or `"Exception: <message>"` for transport, parse and
//! request-construction failures. [`FailureKind`] tells those apart.

mod api;
pub mod config;
pub mod error;
mod gateway;
mod method;
pub mod resource;
pub mod response;

pub use api::PokeApi;
pub use config::{ACCEPT_HEADER, ClientConfig, DEFAULT_BASE_URL, USER_AGENT_HEADER};
pub use error::{ClientError, ConfigError, GatewayError, ValidationError};
pub use gateway::{Gateway, GatewayBuilder};
pub use method::RestMethod;
pub use resource::{DEFAULT_LIMIT, Lookup, Pagination, Resource, encounters_path};
pub use response::{ApiResponse, Failure, FailureKind};
