// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage failures surface as the endpoint's generic error.

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_create_user_storage_failure() {
    let app = common::create_offline_test_app();

    let (status, json) = common::post_form(&app, "/api/users", "username=alice").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "Failed to create user" }));
}

#[tokio::test]
async fn test_list_users_storage_failure() {
    let app = common::create_offline_test_app();

    let (status, json) = common::get_json(&app, "/api/users").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "Failed to fetch users" }));
}

#[tokio::test]
async fn test_add_exercise_storage_failure() {
    let app = common::create_offline_test_app();

    let (status, json) = common::post_form(
        &app,
        "/api/users/abc/exercises",
        "description=run&duration=30",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "Failed to add exercise" }));
}

#[tokio::test]
async fn test_get_log_storage_failure() {
    let app = common::create_offline_test_app();

    let (status, json) = common::get_json(&app, "/api/users/abc/logs?limit=2").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({ "error": "Failed to fetch exercise log" }));
}
