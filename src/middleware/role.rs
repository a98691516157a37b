//! Elevated-privilege authorization.
//!
//! Two ways to apply [`RoleGuard`]:
//! 1. Layer-based, with [`require_elevated`] as a `route_layer`
//! 2. Extractor-based, with [`RequireElevated`] in the handler signature
//!
//! Both expect [`authenticate`](crate::middleware::auth::authenticate) to
//! have run first.
//!
//! [`RoleGuard`]: bookwell_auth::RoleGuard

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use bookwell_auth::Principal;
use bookwell_core::Failure;

use crate::state::AppState;

/// Middleware that rejects requests whose principal lacks the elevated role.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::middleware::role::require_elevated;
///
/// let settings_routes = Router::new()
///     .route("/settings", patch(update_settings))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_elevated));
/// ```
pub async fn require_elevated(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Failure> {
    state
        .role_guard
        .check(req.extensions().get::<Principal>())?;
    Ok(next.run(req).await)
}

/// Extractor for elevated access. Yields the authorized principal.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn update_role(
///     RequireElevated(principal): RequireElevated,
///     ValidatedJson(dto): ValidatedJson<UpdateRoleDto>,
/// ) -> Result<Json<RoleUpdatedResponse>, Failure> {
///     // Only global admins and the elevated role get here
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireElevated(pub Principal);

impl FromRequestParts<AppState> for RequireElevated {
    type Rejection = Failure;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal = parts.extensions.get::<Principal>();
        state.role_guard.check(principal)?;
        // check() only succeeds with a principal present
        principal
            .cloned()
            .map(RequireElevated)
            .ok_or_else(|| Failure::forbidden("Unauthorized"))
    }
}
