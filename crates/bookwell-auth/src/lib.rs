//! # Bookwell Auth
//!
//! Principal types, the role guard and JWT verification for the Bookwell API.
//!
//! This crate provides:
//!
//! - [`principal`]: [`Principal`] and the [`Role`] enumeration
//! - [`claims`]: access token claims
//! - [`jwt`]: token verification (and minting behind `test-utils`)
//! - [`guard`]: [`RoleGuard`], the elevated-privilege predicate
//!
//! Session issuance is not part of the service; tokens are minted by the
//! identity provider and only verified here.
//!
//! # Example
//!
//! ```ignore
//! use bookwell_auth::{Principal, RoleGuard, verify_token};
//! use bookwell_config::JwtConfig;
//!
//! let claims = verify_token(&token, &JwtConfig::from_env())?;
//! let principal = Principal::from(claims);
//! RoleGuard::default().check(Some(&principal))?;
//! ```

pub mod claims;
pub mod guard;
pub mod jwt;
pub mod principal;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use guard::RoleGuard;
#[cfg(feature = "test-utils")]
pub use jwt::{create_access_token, sign_claims};
pub use jwt::{TokenError, verify_token};
pub use principal::{Principal, Role, UnknownRole};
