// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise log entry model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Exercise entry stored in the `exercises` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Generated identifier (also used as document ID)
    pub id: String,
    /// Owning user's ID. Not checked against the users collection.
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// When the exercise took place (stored as a Firestore timestamp)
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub date: DateTime<Utc>,
}

/// Serialize a duration, emitting whole numbers as JSON integers.
pub fn serialize_duration<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    // Beyond 2^53 an f64 no longer represents every integer exactly.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    match value {
        Some(minutes) if minutes.fract() == 0.0 && minutes.abs() <= MAX_EXACT => {
            serializer.serialize_i64(*minutes as i64)
        }
        Some(minutes) => serializer.serialize_f64(*minutes),
        None => serializer.serialize_none(),
    }
}
