//! Elevated-privilege guard.
//!
//! The guard is a synchronous predicate over an already-attached
//! [`Principal`]; it never authenticates and never mutates the principal.

use std::env;

use bookwell_core::Failure;

use crate::principal::{Principal, Role};

/// Allows global admins and holders of the elevated role, denies everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGuard {
    pub elevated: Role,
}

impl Default for RoleGuard {
    fn default() -> Self {
        Self {
            elevated: Role::Superadmin,
        }
    }
}

impl RoleGuard {
    pub fn new(elevated: Role) -> Self {
        Self { elevated }
    }

    /// Reads `ELEVATED_ROLE`; unset or unknown values fall back to superadmin.
    pub fn from_env() -> Self {
        env::var("ELEVATED_ROLE")
            .ok()
            .and_then(|role| role.parse().ok())
            .map(Self::new)
            .unwrap_or_default()
    }

    /// # Errors
    ///
    /// 403 with message `Unauthorized` when no principal is attached, or a
    /// role-specific 403 when the principal lacks the privilege.
    pub fn check(&self, principal: Option<&Principal>) -> Result<(), Failure> {
        let principal = principal.ok_or_else(|| Failure::forbidden("Unauthorized"))?;

        if principal.is_global_admin || principal.role == self.elevated {
            return Ok(());
        }

        Err(Failure::forbidden(format!(
            "Access denied. Required role: {}, but user has role: {}",
            self.elevated, principal.role
        )))
    }
}
