mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{OBJECT_ID, assert_error_shape, body_json, json_request, setup_test_app};
use serde_json::json;
use tower::ServiceExt;

fn claim_uri(entry_id: &str) -> String {
    format!("/api/waitlist/{}/claim", entry_id)
}

#[tokio::test]
async fn test_claim_waitlist_entry() {
    let app = setup_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            &claim_uri(OBJECT_ID),
            None,
            &json!({
                "claimToken": "9f".repeat(20),
                "clientId": "64b7f0c2a1b2c3d4e5f60719"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["entryId"], OBJECT_ID);
    assert_eq!(json["clientId"], "64b7f0c2a1b2c3d4e5f60719");
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn test_short_claim_token_rejected() {
    let app = setup_test_app();
    let uri = claim_uri(OBJECT_ID);

    let response = app
        .oneshot(json_request(
            "POST",
            &uri,
            None,
            &json!({"claimToken": "too-short"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_error_shape(&json, 400, "POST", &uri);
    assert_eq!(json["error"], "Validation Error");
    assert_eq!(json["message"], "Validation failed. Please check your input.");
    assert_eq!(
        json["details"],
        json!([{
            "field": "claimToken",
            "errors": ["claimToken must be between 32 and 256 characters"]
        }])
    );
}

#[tokio::test]
async fn test_every_violation_reported() {
    let app = setup_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            &claim_uri(OBJECT_ID),
            None,
            &json!({"claimToken": "x".repeat(300), "clientId": "walk-in"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let details = json["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["field"], "claimToken");
    assert_eq!(details[1]["field"], "clientId");
    assert_eq!(details[1]["errors"][0], "clientId must be a mongodb id");
}

#[tokio::test]
async fn test_missing_claim_token() {
    let app = setup_test_app();

    let response = app
        .oneshot(json_request("POST", &claim_uri(OBJECT_ID), None, &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(
        json["details"],
        json!([{"field": "claimToken", "errors": ["claimToken is required"]}])
    );
}

#[tokio::test]
async fn test_invalid_entry_id() {
    let app = setup_test_app();
    let uri = claim_uri("not-an-id");

    let response = app
        .oneshot(json_request(
            "POST",
            &uri,
            None,
            &json!({"claimToken": "k".repeat(40)}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_error_shape(&json, 400, "POST", &uri);
    assert_eq!(json["error"], "Bad Request");
    assert_eq!(json["message"], "The provided identifier is invalid.");
}

#[tokio::test]
async fn test_missing_content_type() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri(claim_uri(OBJECT_ID))
        .body(Body::from(json!({"claimToken": "k".repeat(40)}).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["statusCode"], 400);
    assert_eq!(json["error"], "Bad Request");
}
