//! Single-line status output

use super::bar::{label_color, render_bar};
use super::duration::time_until;
use crate::models::usage::{UsageBucket, UsageSnapshot};
use chrono::{DateTime, Utc};

/// Separator between segments
pub const SEPARATOR: &str = " │ ";

/// `<label> <bar> <pct>%` for one window
fn format_window(label: &str, bucket: &UsageBucket, width: usize) -> String {
    let percent = bucket.utilization;
    let value = format!("{}%", percent.trunc() as i64);
    format!(
        "{} {} {}",
        label,
        render_bar(percent, width),
        label_color(percent).paint(&value)
    )
}

/// Format both windows plus the 5-hour reset countdown.
///
/// `5h <bar> 45% │ 7d <bar> 78% │ ⏱ 2h15m`
pub fn format_status_line(usage: &UsageSnapshot, now: DateTime<Utc>, width: usize) -> String {
    let reset = time_until(&usage.five_hour.resets_at, now);

    [
        format_window("5h", &usage.five_hour, width),
        format_window("7d", &usage.seven_day, width),
        format!("⏱ {reset}"),
    ]
    .join(SEPARATOR)
}
