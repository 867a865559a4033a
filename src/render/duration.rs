//! Time-until-reset formatting

use crate::utils::error::AppResult;
use chrono::{DateTime, Duration, Utc};

/// Parse an RFC 3339 reset timestamp
pub fn parse_reset_time(resets_at: &str) -> AppResult<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(resets_at)?.with_timezone(&Utc))
}

/// Compact duration: `2h15m`, `2h`, `15m`, or `now` for anything under a minute
pub fn format_duration(d: Duration) -> String {
    if d <= Duration::zero() {
        return "now".to_string();
    }

    let hours = d.num_hours();
    let minutes = d.num_minutes() % 60;

    match (hours, minutes) {
        (0, 0) => "now".to_string(),
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h{m}m"),
    }
}

/// Time from `now` until `resets_at`; `unknown` when the timestamp does not parse
pub fn time_until(resets_at: &str, now: DateTime<Utc>) -> String {
    match parse_reset_time(resets_at) {
        Ok(reset) => format_duration(reset.signed_duration_since(now)),
        Err(e) => {
            tracing::debug!("Reset time {:?} not usable: {}", resets_at, e);
            "unknown".to_string()
        }
    }
}
