//! Response handling module.
//!
//! Every gateway call resolves to one [`ApiResponse`]: either the JSON payload
//! forwarded verbatim from the server, or a [`Failure`] describing what went
//! wrong. Rendered as JSON, a failure is always `{"error": ..., "success": false}`.

mod failure;
mod value;

pub use failure::{Failure, FailureKind};
pub use value::ApiResponse;
