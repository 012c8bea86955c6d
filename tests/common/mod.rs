// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use exercise_tracker::db::{FirestoreDb, MemoryDb, Store};
use exercise_tracker::routes::create_router;
use exercise_tracker::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

#[allow(dead_code)]
fn app_with(db: Arc<dyn Store>) -> axum::Router {
    let state = Arc::new(AppState::new(db));
    create_router(state)
}

/// Create a test app backed by the in-memory store.
#[allow(dead_code)]
pub fn create_test_app() -> axum::Router {
    app_with(Arc::new(MemoryDb::new()))
}

/// Create a test app whose storage fails every operation.
#[allow(dead_code)]
pub fn create_offline_test_app() -> axum::Router {
    app_with(Arc::new(FirestoreDb::new_mock()))
}

/// Read a response body as JSON.
#[allow(dead_code)]
async fn read_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// POST a URL-encoded form and return the status and JSON body.
#[allow(dead_code)]
pub async fn post_form(
    app: &axum::Router,
    uri: &str,
    body: &str,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

/// GET a URI and return the status and JSON body.
#[allow(dead_code)]
pub async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

/// Register a user and return its ID.
#[allow(dead_code)]
pub async fn create_user(app: &axum::Router, username: &str) -> String {
    let (status, json) = post_form(app, "/api/users", &format!("username={}", username)).await;
    assert_eq!(status, StatusCode::OK);
    json["_id"].as_str().unwrap().to_string()
}
