//! Bookwell Observability
//!
//! Structured logging for the Bookwell API:
//!
//! - Console output filtered by `RUST_LOG` (or `LOG_LEVEL`)
//! - Daily-rolling error log and JSON log under `LOG_DIR`
//!
//! File writers are non-blocking; keep the returned guards alive for the
//! lifetime of the process so buffered lines are flushed on shutdown.
//!
//! # Examples
//!
//! ```no_run
//! use bookwell_observability::{LoggingConfig, init_logging};
//!
//! let _guards = init_logging(&LoggingConfig::from_env()).expect("logging");
//! tracing::info!("ready");
//! ```

pub mod logging;

pub use logging::{LoggingConfig, init_logging};
