//! Duration formatting utilities for user-friendly display.
//!
//! Session durations are stored as whole minutes; tables and reports
//! display them in "HH:MM" form. Negative values are treated as zero.

/// Formats a duration in minutes as "HH:MM".
pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
