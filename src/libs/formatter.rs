//! Time and date formatting utilities for user-friendly display.
//!
//! Converts millisecond durations and UTC instants into the strings shown in
//! the live timer, the work history and the CSV export.
//!
//! ## Duration Formats
//!
//! - [`format_time`]: clock style `HH:MM:SS`, used by the live timer
//! - [`format_time_with_labels`]: compact `1h 2m 3s`, used in log rows and forms
//! - [`format_minutes`]: whole minutes with a `minutes` suffix, used in CSV
//!
//! ## Date Formats
//!
//! All date helpers render in the host's local time zone using en-US
//! conventions:
//!
//! - [`format_date`] → `Oct 15, 2026, 09:05 AM`
//! - [`format_day`] → `Oct 15, 2026` (the day-group label)
//! - [`format_locale_date`] → `10/15/2026`
//! - [`format_locale_time`] → `9:05:03 AM`
//!
//! ## Examples
//!
//! ```rust
//! use worklogger::libs::formatter::{format_time, format_time_with_labels};
//!
//! assert_eq!(format_time(3_723_000), "01:02:03");
//! assert_eq!(format_time_with_labels(125_000), "2m 5s");
//! ```

use chrono::{DateTime, Local, Utc};

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60_000;

/// Splits a millisecond duration into whole hours, minutes and seconds.
fn split_hms(milliseconds: u64) -> (u64, u64, u64) {
    let total_seconds = milliseconds / MS_PER_SECOND;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    (hours, minutes, seconds)
}

/// Formats a millisecond duration as a `HH:MM:SS` clock string.
///
/// Partial seconds are truncated. Hours are zero-padded to two digits but
/// are not wrapped at 24, so long sessions render as `100:00:00`.
///
/// # Examples
///
/// ```rust
/// use worklogger::libs::formatter::format_time;
///
/// assert_eq!(format_time(0), "00:00:00");
/// assert_eq!(format_time(59_999), "00:00:59");
/// assert_eq!(format_time(3_600_000), "01:00:00");
/// ```
pub fn format_time(milliseconds: u64) -> String {
    let (hours, minutes, seconds) = split_hms(milliseconds);
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Formats a millisecond duration with `h`/`m`/`s` labels.
///
/// The hour part is omitted when it is zero, and the minute part is omitted
/// when both hours and minutes are zero. Seconds are always present.
///
/// # Examples
///
/// ```rust
/// use worklogger::libs::formatter::format_time_with_labels;
///
/// assert_eq!(format_time_with_labels(5_000), "5s");
/// assert_eq!(format_time_with_labels(3_603_000), "1h 0m 3s");
/// ```
pub fn format_time_with_labels(milliseconds: u64) -> String {
    let (hours, minutes, seconds) = split_hms(milliseconds);
    let mut formatted = String::new();

    if hours > 0 {
        formatted.push_str(&format!("{}h ", hours));
    }
    if minutes > 0 || hours > 0 {
        formatted.push_str(&format!("{}m ", minutes));
    }
    formatted.push_str(&format!("{}s", seconds));

    formatted
}

/// Formats a millisecond duration as whole minutes, e.g. `"42 minutes"`.
///
/// Minutes are floored, so anything under a minute reads `"0 minutes"`.
pub fn format_minutes(milliseconds: u64) -> String {
    format!("{} minutes", milliseconds / MS_PER_MINUTE)
}

/// Medium date with a two-digit time of day: `Oct 15, 2026, 09:05 AM`.
pub fn format_date(instant: &DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Day label used as the grouping key in the work history: `Oct 15, 2026`.
pub fn format_day(instant: &DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%b %-d, %Y").to_string()
}

/// Short numeric date: `10/15/2026`.
pub fn format_locale_date(instant: &DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}

/// Time of day with seconds and a 12-hour clock: `9:05:03 AM`.
pub fn format_locale_time(instant: &DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%-I:%M:%S %p").to_string()
}

/// Short time of day without seconds: `9:05 AM`.
pub fn format_clock(instant: &DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%-I:%M %p").to_string()
}
