//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Customer names
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Duration limits ─────────────────────────────────────────────────

/// Longest overnight stay accepted in one booking
pub const MAX_NIGHTS: f64 = 365.0;

/// Longest hourly booking (30 days)
pub const MAX_HOURS: f64 = 720.0;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) if v.chars().count() > max_len => Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        ))
        .with_detail("field", field)),
        _ => Ok(()),
    }
}

/// Validate an optional duration: finite and not above `max`.
///
/// Small or negative values are fine here, pricing clamps them to 1.
pub fn validate_duration(value: Option<f64>, field: &str, max: f64) -> Result<(), AppError> {
    match value {
        Some(v) if !v.is_finite() => Err(AppError::validation(format!(
            "{field} must be a finite number"
        ))
        .with_detail("field", field)),
        Some(v) if v > max => Err(AppError::validation(format!(
            "{field} exceeds maximum allowed ({max}), got {v}"
        ))
        .with_detail("field", field)),
        _ => Ok(()),
    }
}

/// Trim an optional form value; blank becomes `None`
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
