//! JWT claim structure for access tokens.

use serde::{Deserialize, Serialize};

use crate::principal::Role;

/// JWT claims for access tokens.
///
/// # Fields
///
/// - `sub`: User ID (subject)
/// - `role`: Tenant-level role
/// - `isGlobalAdmin`: Platform-wide administrator flag
/// - `tenant`: Tenant scope (None for platform staff)
/// - `exp`: Token expiration timestamp
/// - `iat`: Token issued-at timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    pub role: Role,
    #[serde(default)]
    pub is_global_admin: bool,
    #[serde(default)]
    pub tenant: Option<String>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
