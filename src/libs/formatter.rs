//! Time and duration formatting utilities for user-friendly display.
//!
//! All wall-clock values in the core are epoch seconds (`f64`); this module
//! converts them to the strings shown in tables, reports, exports, and the
//! persisted session records.
//!
//! ## Format Specifications
//!
//! - Durations: `HH:MM:SS`, negative values clamped to `00:00:00`
//! - Times of day: `HH:MM:SS` in the local timezone
//! - Dates: `YYYY-MM-DD` in the local timezone

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};

/// Formats a `chrono::Duration` as `HH:MM:SS`.
///
/// Negative durations are treated as zero, so arithmetic edge cases never
/// render as nonsense in a report.
pub fn format_duration(duration: &Duration) -> String {
    let secs = duration.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Formats a duration given in seconds as `HH:MM:SS`.
pub fn format_seconds(seconds: f64) -> String {
    format_duration(&Duration::seconds(seconds.round() as i64))
}

/// Converts an epoch-seconds timestamp to a local `DateTime`.
pub fn local_datetime(ts: f64) -> DateTime<Local> {
    let millis = (ts * 1000.0).round() as i64;
    // A concrete instant always maps to exactly one local time.
    Local
        .timestamp_millis_opt(millis)
        .single()
        .unwrap_or_else(|| Local.timestamp_millis_opt(0).unwrap())
}

/// Formats an epoch-seconds timestamp as a local time of day, `HH:MM:SS`.
pub fn format_time(ts: f64) -> String {
    local_datetime(ts).format("%H:%M:%S").to_string()
}

/// Formats an epoch-seconds timestamp as a local date, `YYYY-MM-DD`.
pub fn format_date(ts: f64) -> String {
    local_datetime(ts).format("%Y-%m-%d").to_string()
}

/// The local calendar date an epoch-seconds timestamp falls on.
pub fn local_date(ts: f64) -> NaiveDate {
    local_datetime(ts).date_naive()
}
