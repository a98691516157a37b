//! Error normalization at the HTTP boundary.
//!
//! Handlers, extractors and inner middleware return [`Failure`], whose
//! `IntoResponse` impl only stashes the failure in the response extensions.
//! [`normalize_errors`] holds the request context, so it is the one place
//! that renders the public error body.

use std::sync::Arc;

use axum::{
    body::to_bytes,
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use bookwell_auth::Principal;
use bookwell_core::{Failure, RequestContext};

use crate::middleware::request_id::REQUEST_ID_HEADER;
use crate::state::AppState;

/// Largest plain-text error body read back when adopting a bare error.
const BARE_BODY_LIMIT: usize = 64 * 1024;

pub async fn normalize_errors(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let mut context = request_context(&req);

    let mut response = next.run(req).await;

    // Authentication runs inside this layer, so the principal rides back on
    // the response.
    if let Some(principal) = response.extensions().get::<Principal>() {
        context.user_id = Some(principal.user_id.clone());
    }
    let allow = response.headers().get(header::ALLOW).cloned();

    let stashed = response.extensions_mut().remove::<Arc<Failure>>();
    let failure = match stashed {
        Some(failure) => failure,
        None if is_bare_error(&response) => Arc::new(adopt_bare_error(response).await),
        None => return response,
    };

    let mut rendered = state.error_filter.render(&failure, &context);
    if let Some(allow) = allow {
        rendered.headers_mut().insert(header::ALLOW, allow);
    }
    rendered
}

/// Snapshot of the request taken before it is consumed downstream.
pub fn request_context(req: &Request) -> RequestContext {
    let uri = req.uri();
    RequestContext {
        request_id: header_string(req.headers(), REQUEST_ID_HEADER),
        method: req.method().to_string(),
        path: uri.path().to_string(),
        url: uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string()),
        user_agent: header_string(req.headers(), header::USER_AGENT.as_str()),
        user_id: req
            .extensions()
            .get::<Principal>()
            .map(|p| p.user_id.clone()),
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// An error status produced without a [`Failure`], e.g. a framework
/// rejection or the router's bare 405. JSON bodies are left alone.
fn is_bare_error(response: &Response) -> bool {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return false;
    }
    !response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

async fn adopt_bare_error(response: Response) -> Failure {
    let status = response.status();
    let text = to_bytes(response.into_body(), BARE_BODY_LIMIT)
        .await
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string())
        .filter(|text| !text.is_empty());

    Failure::http(
        status,
        text.unwrap_or_else(|| status.canonical_reason().unwrap_or("Error").to_string()),
    )
}
