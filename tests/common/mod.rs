#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response, header};
use bookwell::router::init_router;
use bookwell::state::AppState;
use bookwell_auth::{Claims, Principal, Role, RoleGuard, create_access_token, sign_claims};
use bookwell_config::{CorsConfig, Environment, EnvironmentConfig, JwtConfig, RequestIdConfig};
use http_body_util::BodyExt;
use serde_json::Value;

pub const TEST_SECRET: &str = "test-secret-do-not-use";
pub const USER_ID: &str = "64b7f0c2a1b2c3d4e5f60718";
pub const OBJECT_ID: &str = "650c1f2e9b1d8a0012345678";

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_state(environment: Environment) -> AppState {
    AppState::new(
        jwt_config(),
        EnvironmentConfig::new(environment),
        CorsConfig::default(),
        RequestIdConfig::default(),
        RoleGuard::default(),
    )
}

pub fn setup_test_app() -> axum::Router {
    init_router(test_state(Environment::Test))
}

pub fn principal(role: Role, is_global_admin: bool) -> Principal {
    Principal {
        user_id: USER_ID.to_string(),
        role,
        is_global_admin,
        tenant: None,
    }
}

pub fn token_for(role: Role, is_global_admin: bool) -> String {
    create_access_token(&principal(role, is_global_admin), &jwt_config()).unwrap()
}

pub fn expired_token(role: Role) -> String {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: USER_ID.to_string(),
        role,
        is_global_admin: false,
        tenant: None,
        exp: now - 3600,
        iat: now - 7200,
    };
    sign_claims(&claims, &jwt_config()).unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Asserts the fields every error body must carry.
pub fn assert_error_shape(json: &Value, status: u16, method: &str, path: &str) {
    assert_eq!(json["success"], false);
    assert_eq!(json["statusCode"], status);
    assert_eq!(json["method"], method);
    assert_eq!(json["path"], path);
    assert!(json["error"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(json["message"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(json["timestamp"].as_str().is_some());
    assert!(json["requestId"].as_str().is_some_and(|s| !s.is_empty()));
}
