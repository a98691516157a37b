use std::any::Any;

use axum::http::{HeaderName, HeaderValue, Method, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::{Router, middleware};
use bookwell_config::CorsConfig;
use bookwell_core::Failure;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::logging::logging_middleware;
use crate::middleware::auth::authenticate;
use crate::middleware::error_filter::normalize_errors;
use crate::middleware::request_id::{REQUEST_ID_HEADER, assign_request_id};
use crate::middleware::role::require_elevated;
use crate::modules::roles::router::init_roles_router;
use crate::modules::settings::router::init_pos_settings_router;
use crate::modules::waitlist::router::init_waitlist_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let api = Router::new().nest(
        "/api",
        Router::new()
            .nest("/waitlist", init_waitlist_router())
            .nest(
                "/pos",
                init_pos_settings_router().route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    require_elevated,
                )),
            )
            // Guarded per handler with the RequireElevated extractor
            .nest("/roles", init_roles_router()),
    );

    with_pipeline(api, state)
}

/// Wraps routes in the full request pipeline.
///
/// Outermost first: request id, CORS, access log, error normalization,
/// authentication, panic capture, routes. Public so tests can mount extra
/// routes behind the same pipeline.
pub fn with_pipeline(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .fallback(route_not_found)
        .with_state(state.clone())
        .layer(CatchPanicLayer::custom(panic_to_failure))
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            normalize_errors,
        ))
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn_with_state(state, assign_request_id))
}

pub async fn route_not_found(method: Method, uri: Uri) -> Failure {
    Failure::not_found(format!("Cannot {} {}", method, uri.path()))
}

/// Panic payloads are not errors; they become opaque 500s.
pub fn panic_to_failure(payload: Box<dyn Any + Send + 'static>) -> Response {
    let description = if let Some(message) = payload.downcast_ref::<&str>() {
        Some((*message).to_string())
    } else {
        payload.downcast_ref::<String>().cloned()
    };
    Failure::unknown(description).into_response()
}

fn cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            request_id.clone(),
        ])
        .expose_headers([request_id])
        .allow_credentials(true)
}
