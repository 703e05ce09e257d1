// crates/connector-options/src/duration.rs
// ============================================================================
// Module: Duration Expressions
// Description: Parser for human-readable duration option values.
// Purpose: Turn "10s", "50ms", "1min" style text into `Duration`.
// Dependencies: humantime
// ============================================================================

//! ## Overview
//! Duration options are written as human-readable expressions. A bare number
//! without a unit is read as milliseconds; everything else is delegated to
//! `humantime`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a duration expression such as `10s`, `50ms` or `1500`.
///
/// # Errors
///
/// Returns a human-readable reason when the expression is empty or not a
/// recognised duration.
pub fn parse_duration(text: &str) -> Result<Duration, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("duration must not be empty".to_string());
    }
    if trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        let millis: u64 =
            trimmed.parse().map_err(|_| format!("duration '{trimmed}' is out of range"))?;
        return Ok(Duration::from_millis(millis));
    }
    humantime::parse_duration(trimmed).map_err(|err| err.to_string())
}

/// Converts a duration to whole milliseconds, saturating at `u64::MAX`.
#[must_use]
pub fn duration_to_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
