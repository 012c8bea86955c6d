// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise log routes.

use crate::error::{AppError, Operation, OperationContext, OperationError};
use crate::models::exercise::serialize_duration;
use crate::models::Exercise;
use crate::services::{LogQuery, NewExercise};
use crate::time_utils::format_calendar_date;
use crate::AppState;
use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Form, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users/{user_id}/exercises", post(add_exercise))
        .route("/api/users/{user_id}/logs", get(get_log))
}

// ─── Add Exercise ────────────────────────────────────────────

/// Response for a newly recorded exercise.
///
/// `username` and `_id` both echo the user ID from the path; existing
/// clients depend on that shape.
#[derive(Serialize, Debug)]
pub struct ExerciseResponse {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_duration"
    )]
    pub duration: Option<f64>,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: String,
}

async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    form: Result<Form<NewExercise>, FormRejection>,
) -> Result<Json<ExerciseResponse>, OperationError> {
    let Form(input) = form
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
        .during(Operation::AddExercise)?;

    let exercise = state
        .exercise_log
        .add_exercise(&user_id, input)
        .await
        .during(Operation::AddExercise)?;

    Ok(Json(ExerciseResponse {
        username: exercise.user_id.clone(),
        description: exercise.description,
        duration: exercise.duration,
        date: format_calendar_date(exercise.date),
        id: exercise.user_id,
    }))
}

// ─── Exercise Log ────────────────────────────────────────────

#[derive(Serialize, Debug)]
pub struct LogEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_duration"
    )]
    pub duration: Option<f64>,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: format_calendar_date(exercise.date),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct LogResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogEntry>,
}

async fn get_log(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    query: Result<Query<LogQuery>, QueryRejection>,
) -> Result<Json<LogResponse>, OperationError> {
    let Query(query) = query
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
        .during(Operation::FetchLog)?;

    let user_log = state
        .exercise_log
        .get_log(&user_id, query)
        .await
        .during(Operation::FetchLog)?;

    let log: Vec<LogEntry> = user_log.entries.into_iter().map(LogEntry::from).collect();

    Ok(Json(LogResponse {
        username: user_log.user.username,
        count: log.len(),
        id: user_log.user.id,
        log,
    }))
}
