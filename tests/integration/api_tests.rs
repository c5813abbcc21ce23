//! API integration tests

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use equipment_registry::{api, AppConfig, AppState};

fn app() -> Router {
    api::create_router(AppState::in_memory(AppConfig::default()))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    caller: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", uri));
    if let Some(caller) = caller {
        builder = builder.header("x-caller-id", caller);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request"),
        None => builder.body(Body::empty()).expect("Failed to build request"),
    };

    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

async fn register_ventilator(app: &Router, donor: &str) -> u64 {
    let (status, body) = send(
        app,
        "POST",
        "/equipment",
        Some(donor),
        Some(json!({
            "name": "Ventilator",
            "description": "Medical grade ventilator for ICU",
            "condition": "New",
            "manufacturer": "MedTech Inc",
            "manufacturing_date": 20230101
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_u64().expect("No equipment ID")
}

async fn set_status(app: &Router, id: u64, status: &str, caller: &str) -> (StatusCode, Value) {
    send(
        app,
        "PUT",
        &format!("/equipment/{}/status", id),
        Some(caller),
        Some(json!({ "status": status })),
    )
    .await
}

async fn assign(app: &Router, id: u64, recipient: &str, caller: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        &format!("/equipment/{}/recipient", id),
        Some(caller),
        Some(json!({ "recipient_id": recipient })),
    )
    .await
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_register_equipment() {
    let app = app();
    assert_eq!(register_ventilator(&app, "donor1").await, 1);
    assert_eq!(register_ventilator(&app, "donor2").await, 2);

    let (status, body) = send(&app, "GET", "/equipment/1", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ventilator");
    assert_eq!(body["status"], "registered");
    assert_eq!(body["donor_id"], "donor1");
    assert!(body["recipient_id"].is_null());

    let (status, body) = send(&app, "GET", "/registry/last-id", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["last_id"], 2);
}

#[tokio::test]
async fn test_register_requires_caller() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/equipment",
        None,
        Some(json!({
            "name": "Ventilator",
            "description": "ICU unit",
            "condition": "New",
            "manufacturer": "MedTech",
            "manufacturing_date": 20230101
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "NotAuthenticated");

    let (_, body) = send(&app, "GET", "/registry/last-id", None, None).await;
    assert_eq!(body["last_id"], 0);
}

#[tokio::test]
async fn test_update_equipment_status() {
    let app = app();
    let id = register_ventilator(&app, "donor1").await;

    let (status, _) = set_status(&app, id, "verified", "donor1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", &format!("/equipment/{}", id), None, None).await;
    assert_eq!(body["status"], "verified");
}

#[tokio::test]
async fn test_unauthorized_status_update() {
    let app = app();
    let id = register_ventilator(&app, "donor1").await;

    let (status, body) = set_status(&app, id, "verified", "unauthorized").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "NotAuthorized");

    let (_, body) = send(&app, "GET", &format!("/equipment/{}", id), None, None).await;
    assert_eq!(body["status"], "registered");
}

#[tokio::test]
async fn test_assign_recipient_to_verified_equipment() {
    let app = app();
    let id = register_ventilator(&app, "donor1").await;
    set_status(&app, id, "verified", "donor1").await;

    let (status, _) = assign(&app, id, "hospital1", "donor1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, "GET", &format!("/equipment/{}", id), None, None).await;
    assert_eq!(body["recipient_id"], "hospital1");
    assert_eq!(body["status"], "assigned");

    // Second assignment is rejected by the status gate
    let (status, body) = assign(&app, id, "hospital2", "donor1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidState");
}

#[tokio::test]
async fn test_assign_recipient_to_unverified_equipment() {
    let app = app();
    let id = register_ventilator(&app, "donor1").await;

    let (status, body) = assign(&app, id, "hospital1", "donor1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "InvalidState");
}

#[tokio::test]
async fn test_unknown_equipment() {
    let app = app();

    let (status, body) = send(&app, "GET", "/equipment/999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchEquipment");

    let (status, _) = set_status(&app, 999, "verified", "donor1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = assign(&app, 999, "hospital1", "donor1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_requests_use_error_body() {
    let app = app();
    let id = register_ventilator(&app, "donor1").await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/equipment/{}/status", id),
        Some("donor1"),
        Some(json!({ "stat": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert!(body["message"].as_str().unwrap().contains("status"));

    let (status, body) = send(&app, "GET", "/equipment/abc", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert_eq!(body["code"], 6);

    let (_, body) = send(&app, "GET", &format!("/equipment/{}", id), None, None).await;
    assert_eq!(body["status"], "registered");
}
