//! Middleware and extractors for the request pipeline.
//!
//! # Modules
//!
//! - [`request_id`]: assigns the `x-request-id` correlation id
//! - [`auth`]: attaches the bearer token's principal, if any
//! - [`role`]: elevated-privilege guard as a layer or an extractor
//! - [`error_filter`]: renders every failure as the public error body
//!
//! # Pipeline
//!
//! 1. `assign_request_id` stamps the request and the response
//! 2. `normalize_errors` records the request context
//! 3. `authenticate` verifies `Authorization: Bearer <token>`
//! 4. `require_elevated` / [`RequireElevated`](role::RequireElevated) check the principal
//! 5. `ValidatedJson` parses and validates the body
//! 6. The handler runs; any [`Failure`](bookwell_core::Failure) unwinds to step 2

pub mod auth;
pub mod error_filter;
pub mod request_id;
pub mod role;
