//! # Bookwell Core
//!
//! Failure taxonomy and error normalization for the Bookwell API.
//!
//! - [`errors`]: the closed [`Failure`] enum every pipeline stage returns
//! - [`messages`]: friendly-message translation and status names
//! - [`filter`]: [`ErrorFilter`], which renders the public error contract
//! - [`response`]: [`ErrorResponse`] and the request context it is built from
//!
//! # Example
//!
//! ```ignore
//! use bookwell_core::{ErrorFilter, Failure, RequestContext};
//!
//! let filter = ErrorFilter::new(false);
//! let body = filter.normalize(&Failure::forbidden("Unauthorized"), &RequestContext::default());
//! assert_eq!(body.status_code, 403);
//! ```

pub mod errors;
pub mod filter;
pub mod messages;
pub mod response;

// Re-export commonly used types at crate root
pub use errors::{
    BodyMessage, Failure, HttpBody, MessageEntry, StructuredBody, validation_violations,
};
pub use filter::{ErrorFilter, ResolvedBody, resolve_body};
pub use messages::{error_name, friendly_message};
pub use response::{ErrorResponse, FailureLogContext, RequestContext};
