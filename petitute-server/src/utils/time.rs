//! 时间工具函数 — booking start parsing
//!
//! All datetime → timestamp conversion happens at the API boundary;
//! repositories only see `i64` Unix millis.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::{AppError, AppResult, ErrorCode};
use crate::messages;

/// Naive formats accepted for `start` (HTML `datetime-local` and friends)
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a booking start time.
///
/// Accepts RFC 3339 (`2026-10-16T09:30:00+07:00`), naive ISO-8601
/// (`2026-10-16T09:30`, treated as UTC) or a bare date (midnight UTC).
pub fn parse_start(value: &str) -> AppResult<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::required("start"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Some(midnight) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(
        AppError::with_message(ErrorCode::InvalidStartTime, messages::INVALID_START)
            .with_detail("field", "start")
            .with_detail("value", value),
    )
}
