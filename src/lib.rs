//! # Bookwell API
//!
//! HTTP request pipeline for the Bookwell booking and point-of-sale
//! platform, built with Rust and Axum.
//!
//! ## Overview
//!
//! Every request passes through the same pipeline:
//!
//! - **Correlation**: a UUID v4 `x-request-id` is stamped on the request and
//!   echoed on the response
//! - **Authentication**: an optional bearer token attaches a principal
//! - **Authorization**: privileged routes require a global admin or the
//!   elevated role
//! - **Validation**: JSON bodies are deserialized and validated before any
//!   handler runs
//! - **Error normalization**: every failure, including panics and routing
//!   misses, is rendered as one JSON error shape
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Request id, auth, role guard, error filter
//! ├── modules/          # Feature modules
//! │   ├── waitlist/    # Claiming waitlist slots
//! │   ├── settings/    # Point-of-sale settings
//! │   └── roles/       # Role scope updates
//! ├── logging.rs        # Access log middleware
//! ├── router.rs         # Route table and pipeline layers
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Validating extractors
//! ```
//!
//! Each feature module has a `controller.rs` (handlers) and a `router.rs`.
//! Payload types live in `bookwell-models`.
//!
//! ## Error Response
//!
//! ```json
//! {
//!   "success": false,
//!   "error": "Forbidden",
//!   "message": "You do not have permission to perform this action.",
//!   "statusCode": 403,
//!   "timestamp": "2026-01-01T09:00:00.000Z",
//!   "path": "/api/pos/settings",
//!   "method": "PATCH",
//!   "requestId": "3f1c2a4e-..."
//! }
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! APP_ENV=production            # hides stack traces
//! JWT_SECRET=your-secure-secret-key
//! ALLOWED_ORIGINS=https://app.bookwell.io
//! ELEVATED_ROLE=superadmin
//! TRUST_INCOMING_REQUEST_ID=false
//! LOG_LEVEL=info
//! ```

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use bookwell_auth;
pub use bookwell_config;
pub use bookwell_core;
pub use bookwell_models;
