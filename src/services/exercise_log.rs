// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise log service.
//!
//! Handles:
//! 1. Recording an exercise entry for a user ID (not checked against users)
//! 2. Fetching a user's log with optional date bounds and a row limit

use crate::db::{ExerciseFilter, Store};
use crate::error::{AppError, Result};
use crate::models::{Exercise, User};
use crate::time_utils::parse_calendar_date;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

/// Raw exercise fields as submitted by a client.
#[derive(Debug, Default, Deserialize)]
pub struct NewExercise {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// Raw log query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// A user together with the matching log entries.
#[derive(Debug)]
pub struct UserLog {
    pub user: User,
    pub entries: Vec<Exercise>,
}

pub struct ExerciseLog {
    db: Arc<dyn Store>,
}

impl ExerciseLog {
    pub fn new(db: Arc<dyn Store>) -> Self {
        Self { db }
    }

    /// Record an exercise. A missing or empty date means now.
    pub async fn add_exercise(&self, user_id: &str, input: NewExercise) -> Result<Exercise> {
        let date = match input.date.as_deref().filter(|d| !d.is_empty()) {
            Some(raw) => parse_date_param("date", raw)?,
            None => Utc::now(),
        };

        let exercise = Exercise {
            id: crate::models::new_id(),
            user_id: user_id.to_string(),
            description: input.description,
            duration: parse_duration(input.duration.as_deref())?,
            date,
        };

        self.db.insert_exercise(&exercise).await?;

        tracing::info!(
            user_id,
            exercise_id = %exercise.id,
            "Exercise recorded"
        );
        Ok(exercise)
    }

    /// Fetch the log for a user. Fails if the user does not exist.
    pub async fn get_log(&self, user_id: &str, query: LogQuery) -> Result<UserLog> {
        let filter = ExerciseFilter {
            user_id: user_id.to_string(),
            from: query
                .from
                .as_deref()
                .filter(|raw| !raw.is_empty())
                .map(|raw| parse_date_param("from", raw))
                .transpose()?,
            to: query
                .to
                .as_deref()
                .filter(|raw| !raw.is_empty())
                .map(|raw| parse_date_param("to", raw))
                .transpose()?,
            limit: parse_limit(query.limit.as_deref()),
        };

        tracing::debug!(
            user_id,
            from = ?filter.from,
            to = ?filter.to,
            limit = ?filter.limit,
            "Fetching exercise log"
        );

        let entries = self.db.find_exercises(&filter).await?;

        let user = self
            .db
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        Ok(UserLog { user, entries })
    }
}

fn parse_date_param(name: &str, raw: &str) -> Result<DateTime<Utc>> {
    parse_calendar_date(raw)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid '{}' parameter: {:?}", name, raw)))
}

/// Parse a submitted duration. Blank means absent.
fn parse_duration(raw: Option<&str>) -> Result<Option<f64>> {
    let Some(raw) = raw.map(str::trim).filter(|d| !d.is_empty()) else {
        return Ok(None);
    };

    raw.parse::<f64>()
        .ok()
        .filter(|minutes| minutes.is_finite())
        .map(Some)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid 'duration' parameter: {:?}", raw)))
}

/// Largest limit the store accepts (Firestore encodes it as int32).
pub const MAX_LIMIT: u32 = i32::MAX as u32;

/// Parse a row limit from its leading integer (`"2abc"` is 2).
///
/// Anything that does not yield a positive integer means no limit.
pub fn parse_limit(raw: Option<&str>) -> Option<u32> {
    let raw = raw?.trim_start();
    if raw.starts_with('-') {
        return None;
    }
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<u32>() {
        Ok(0) => None,
        Ok(limit) => Some(limit.min(MAX_LIMIT)),
        // Too many digits for u32: effectively unlimited
        Err(_) if end > 0 => Some(MAX_LIMIT),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryDb;

    fn service() -> ExerciseLog {
        ExerciseLog::new(Arc::new(MemoryDb::new()))
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(Some("3")), Some(3));
        assert_eq!(parse_limit(Some(" 2abc")), Some(2));
        assert_eq!(parse_limit(Some("+5")), Some(5));
        assert_eq!(parse_limit(Some("99999999999")), Some(MAX_LIMIT));
        assert_eq!(parse_limit(Some("3000000000")), Some(MAX_LIMIT));
        assert_eq!(parse_limit(Some("2147483647")), Some(2147483647));
        assert_eq!(parse_limit(Some("0")), None);
        assert_eq!(parse_limit(Some("-1")), None);
        assert_eq!(parse_limit(Some("abc")), None);
        assert_eq!(parse_limit(Some("")), None);
        assert_eq!(parse_limit(None), None);
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration(Some("30")).unwrap(), Some(30.0));
        assert_eq!(parse_duration(Some(" 12.5 ")).unwrap(), Some(12.5));
        assert_eq!(parse_duration(Some("")).unwrap(), None);
        assert_eq!(parse_duration(None).unwrap(), None);
        assert!(parse_duration(Some("thirty")).is_err());
        assert!(parse_duration(Some("inf")).is_err());
    }

    #[tokio::test]
    async fn test_add_exercise_rejects_bad_date() {
        let log = service();
        let result = log
            .add_exercise(
                "u1",
                NewExercise {
                    description: Some("run".to_string()),
                    duration: Some("30".to_string()),
                    date: Some("yesterday".to_string()),
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_add_exercise_empty_date_means_now() {
        let log = service();
        let before = Utc::now();
        let exercise = log
            .add_exercise(
                "u1",
                NewExercise {
                    date: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(exercise.date >= before && exercise.date <= Utc::now());
    }

    #[tokio::test]
    async fn test_get_log_empty_bounds_are_ignored() {
        let log = service();
        let user = User::new(Some("runner".to_string()));
        log.db.insert_user(&user).await.unwrap();
        log.add_exercise(
            &user.id,
            NewExercise {
                date: Some("2023-01-05".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let user_log = log
            .get_log(
                &user.id,
                LogQuery {
                    from: Some(String::new()),
                    to: Some(String::new()),
                    limit: Some(String::new()),
                },
            )
            .await
            .unwrap();
        assert_eq!(user_log.entries.len(), 1);
    }

    #[tokio::test]
    async fn test_get_log_unknown_user_is_not_found() {
        let log = service();
        let result = log.get_log("nobody", LogQuery::default()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
