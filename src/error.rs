// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Internal failures are described by [`AppError`]. Every endpoint collapses
//! them into a single generic failure ([`OperationError`]) that is rendered as
//! HTTP 500 with a short message naming the operation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Result type alias for services and storage.
pub type Result<T> = std::result::Result<T, AppError>;

/// The operation an endpoint performs, used to label its failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateUser,
    FetchUsers,
    AddExercise,
    FetchLog,
}

impl Operation {
    /// Message returned to the client when this operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::CreateUser => "Failed to create user",
            Operation::FetchUsers => "Failed to fetch users",
            Operation::AddExercise => "Failed to add exercise",
            Operation::FetchLog => "Failed to fetch exercise log",
        }
    }
}

/// A failed endpoint operation. Always rendered as HTTP 500.
#[derive(Debug, thiserror::Error)]
#[error("{}: {source}", .operation.failure_message())]
pub struct OperationError {
    pub operation: Operation,
    #[source]
    pub source: AppError,
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        tracing::error!(
            operation = ?self.operation,
            error = %self.source,
            "Request failed"
        );

        let body = ErrorResponse {
            error: self.operation.failure_message().to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Attach the failing operation to an internal error.
pub trait OperationContext<T> {
    fn during(self, operation: Operation) -> std::result::Result<T, OperationError>;
}

impl<T> OperationContext<T> for Result<T> {
    fn during(self, operation: Operation) -> std::result::Result<T, OperationError> {
        self.map_err(|source| OperationError { operation, source })
    }
}
