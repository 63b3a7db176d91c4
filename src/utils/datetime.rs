//! Date and time utility functions
//!
//! This module handles the two date encodings tasks arrive with (compact
//! Taskwarrior `YYYYMMDDTHHMMSSZ` and ISO 8601), the overdue predicate,
//! and human-readable "time since last sync" formatting.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

/// Standard date format used for user-entered dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Compact datetime format used by Taskwarrior exports
pub const TW_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, ISO_DATE_FORMAT)
}

/// Parse a task timestamp in any of the encodings the backend emits.
///
/// Tries compact Taskwarrior, RFC 3339, bare ISO datetime, then plain
/// date. Returns `None` for anything unrecognized.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, TW_DATETIME_FORMAT) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(d) = parse_date(value) {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}

/// Calendar day a timestamp falls on, if it parses at all
pub fn day_of(value: &str) -> Option<NaiveDate> {
    parse_timestamp(value).map(|dt| dt.date())
}

/// Whether a due timestamp falls strictly before the start of `today`.
///
/// Unparseable or absent due values are never overdue.
pub fn is_overdue(due: Option<&str>, today: NaiveDate) -> bool {
    match due.and_then(day_of) {
        Some(day) => day < today,
        None => false,
    }
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Strict YYYY-MM-DD validation for user-entered dates.
///
/// Round-trips the parse so partial matches like "2025-1-5" are rejected.
pub fn is_valid_iso_date(value: &str) -> bool {
    match parse_date(value) {
        Ok(date) => date.format(ISO_DATE_FORMAT).to_string() == value,
        Err(_) => false,
    }
}

/// Current wall-clock time in milliseconds since the epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Human-readable elapsed time since the last successful sync.
pub fn format_time_since(last_sync_millis: Option<i64>, now_millis: i64) -> String {
    let Some(last) = last_sync_millis else {
        return "Not synced yet".to_string();
    };

    let elapsed_secs = (now_millis - last).max(0) / 1000;
    match elapsed_secs {
        0..=9 => "Last updated just now".to_string(),
        10..=59 => format!("Last updated {} seconds ago", elapsed_secs),
        60..=3599 => {
            let minutes = elapsed_secs / 60;
            if minutes == 1 {
                "Last updated 1 minute ago".to_string()
            } else {
                format!("Last updated {} minutes ago", minutes)
            }
        }
        3600..=86_399 => {
            let hours = elapsed_secs / 3600;
            if hours == 1 {
                "Last updated 1 hour ago".to_string()
            } else {
                format!("Last updated {} hours ago", hours)
            }
        }
        _ => {
            let days = elapsed_secs / 86_400;
            if days == 1 {
                "Last updated 1 day ago".to_string()
            } else {
                format!("Last updated {} days ago", days)
            }
        }
    }
}
