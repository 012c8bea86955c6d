// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User registry routes.

use crate::error::{AppError, Operation, OperationContext, OperationError};
use crate::models::User;
use crate::AppState;
use axum::{
    extract::{rejection::FormRejection, State},
    routing::get,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", get(list_users).post(create_user))
}

#[derive(Deserialize)]
pub struct CreateUserForm {
    username: Option<String>,
}

/// A user as returned by the API.
#[derive(Serialize, Debug)]
pub struct UserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

async fn create_user(
    State(state): State<Arc<AppState>>,
    form: Result<Form<CreateUserForm>, FormRejection>,
) -> Result<Json<UserResponse>, OperationError> {
    let Form(form) = form
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
        .during(Operation::CreateUser)?;

    let user = state
        .registry
        .create_user(form.username)
        .await
        .during(Operation::CreateUser)?;

    Ok(Json(user.into()))
}

async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, OperationError> {
    let users = state
        .registry
        .list_users()
        .await
        .during(Operation::FetchUsers)?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
