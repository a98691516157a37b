use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use bookwell_auth::{Principal, verify_token};
use bookwell_core::Failure;

use crate::state::AppState;

/// Attaches a [`Principal`] when the request carries a valid bearer token.
///
/// Requests without an `Authorization` header pass through anonymously; the
/// guard decides later whether that is acceptable. The principal is copied
/// onto the response so the error filter can log who made the request.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Failure> {
    let Some(token) = bearer_token(req.headers())? else {
        return Ok(next.run(req).await);
    };

    let claims = verify_token(&token, &state.jwt_config).map_err(|err| err.into_failure())?;
    let principal = Principal::from(claims);
    req.extensions_mut().insert(principal.clone());

    let mut response = next.run(req).await;
    response.extensions_mut().insert(principal);
    Ok(response)
}

/// # Errors
///
/// 401 when the header is present but is not `Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<Option<String>, Failure> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    value
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| Some(token.trim().to_string()))
        .ok_or_else(|| Failure::unauthorized("Invalid authorization header format"))
}
