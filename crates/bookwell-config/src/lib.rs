//! # Bookwell Config
//!
//! Configuration types for the Bookwell API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`environment`]: deployment environment, decides stack-trace exposure
//! - [`jwt`]: JWT verification configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`request_id`]: correlation identifier handling
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use bookwell_config::{CorsConfig, EnvironmentConfig, JwtConfig};
//!
//! let environment = EnvironmentConfig::from_env();
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod environment;
pub mod jwt;
pub mod request_id;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use environment::{Environment, EnvironmentConfig};
pub use jwt::JwtConfig;
pub use request_id::RequestIdConfig;
pub use server::ServerConfig;
