// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a calendar date or timestamp supplied by a client.
///
/// Accepts `YYYY-MM-DD` (midnight UTC), RFC3339, and `YYYY-MM-DDTHH:MM:SS`
/// without an offset (taken as UTC).
pub fn parse_calendar_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc())
}

/// Render a date as e.g. `Thu Jan 05 2023` (UTC, no time component).
pub fn format_calendar_date(date: DateTime<Utc>) -> String {
    date.format("%a %b %d %Y").to_string()
}
