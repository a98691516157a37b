mod common;

use anyhow::anyhow;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use bookwell::router::with_pipeline;
use bookwell::state::AppState;
use bookwell_config::Environment;
use bookwell_core::Failure;
use common::{assert_error_shape, body_json, empty_request, test_state};
use serde_json::json;
use tower::ServiceExt;

async fn explode() -> &'static str {
    panic!("index out of bounds: the len is 0 but the index is 3");
}

async fn pool_exhausted() -> Result<&'static str, Failure> {
    Err(anyhow!("connection pool exhausted after 30s").into())
}

async fn duplicate_email() -> Result<&'static str, Failure> {
    Err(Failure::duplicate_key(
        Some(json!({"email": 1})),
        Some(json!({"email": "ada@example.com"})),
    ))
}

async fn schema_invalid() -> Result<&'static str, Failure> {
    Err(Failure::schema_validation([
        ("startsAt", "Path `startsAt` is required."),
        ("service", "Path `service` is required."),
    ]))
}

async fn plain_text_rejection() -> (StatusCode, &'static str) {
    (StatusCode::UNPROCESSABLE_ENTITY, "Failed to parse the request")
}

fn faulty_app(environment: Environment) -> Router {
    let routes: Router<AppState> = Router::new()
        .route("/boom", get(explode))
        .route("/pool", get(pool_exhausted))
        .route("/duplicate", get(duplicate_email))
        .route("/schema", get(schema_invalid))
        .route("/rejection", get(plain_text_rejection));
    with_pipeline(routes, test_state(environment))
}

#[tokio::test]
async fn test_panic_becomes_opaque_500() {
    let app = faulty_app(Environment::Development);

    let response = app.oneshot(empty_request("GET", "/boom")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_error_shape(&json, 500, "GET", "/boom");
    assert_eq!(json["error"], "Internal Server Error");
    assert_eq!(
        json["message"],
        "An unexpected error occurred. Please try again later."
    );
    assert!(json.get("stack").is_none());
}

#[tokio::test]
async fn test_generic_error_hides_raw_text() {
    let app = faulty_app(Environment::Development);

    let response = app.oneshot(empty_request("GET", "/pool")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_error_shape(&json, 500, "GET", "/pool");
    assert_eq!(
        json["message"],
        "Something went wrong on our end. Please try again later."
    );
    assert!(
        json["stack"]
            .as_str()
            .is_some_and(|s| s.contains("connection pool exhausted"))
    );
}

#[tokio::test]
async fn test_production_never_returns_stack() {
    let app = faulty_app(Environment::Production);

    let response = app.oneshot(empty_request("GET", "/pool")).await.unwrap();
    let json = body_json(response).await;

    assert_eq!(json["statusCode"], 500);
    assert!(json.get("stack").is_none());
}

#[tokio::test]
async fn test_duplicate_key_is_conflict() {
    let app = faulty_app(Environment::Test);

    let response = app
        .oneshot(empty_request("GET", "/duplicate"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_error_shape(&json, 409, "GET", "/duplicate");
    assert_eq!(json["error"], "Duplicate Entry");
    assert_eq!(json["message"], "A record with this email already exists.");
    assert_eq!(
        json["details"],
        json!({"field": "email", "value": "ada@example.com"})
    );
}

#[tokio::test]
async fn test_schema_validation_lists_fields() {
    let app = faulty_app(Environment::Test);

    let response = app.oneshot(empty_request("GET", "/schema")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Validation Error");
    assert_eq!(json["details"][0]["field"], "startsAt");
    assert_eq!(json["details"][1]["field"], "service");
}

#[tokio::test]
async fn test_plain_text_error_is_normalized() {
    let app = faulty_app(Environment::Test);

    let response = app
        .oneshot(empty_request("GET", "/rejection"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_error_shape(&json, 422, "GET", "/rejection");
    assert_eq!(json["error"], "Unprocessable Entity");
    assert_eq!(
        json["message"],
        "The provided data is invalid. Please review and try again."
    );
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = common::setup_test_app();

    let response = app
        .oneshot(empty_request("GET", "/api/appointments?page=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_error_shape(&json, 404, "GET", "/api/appointments");
    assert_eq!(json["error"], "Not Found");
    assert_eq!(json["message"], "The requested resource was not found.");
}

#[tokio::test]
async fn test_wrong_method_is_405() {
    let app = common::setup_test_app();
    let uri = format!("/api/roles/{}", common::OBJECT_ID);

    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let json = body_json(response).await;
    assert_error_shape(&json, 405, "GET", &uri);
    assert_eq!(json["message"], "Method Not Allowed");
}
