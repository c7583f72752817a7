//! Submission timestamps rendered for team cards.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::label::EVENT_TIMEZONE;

/// Shown when a submission has no usable timestamp.
pub const MISSING_SUBMISSION_LABEL: &str = "제출 시간 미기록";

/// Render a submission timestamp as `YYYY. MM. DD. HH:MM` in KST (24-hour).
///
/// Accepts RFC 3339 (`2026-02-21T09:30:00Z`) or a naive
/// `YYYY-MM-DDTHH:MM:SS`, which is read as KST wall-clock time. A missing,
/// blank or unparseable value yields [`MISSING_SUBMISSION_LABEL`].
pub fn format_submitted_at(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return MISSING_SUBMISSION_LABEL.to_string();
    };

    match parse_submitted_at(raw) {
        Some(instant) => instant
            .with_timezone(&EVENT_TIMEZONE)
            .format("%Y. %m. %d. %H:%M")
            .to_string(),
        None => {
            log::debug!("unparseable submittedAt value: {:?}", raw);
            MISSING_SUBMISSION_LABEL.to_string()
        }
    }
}

fn parse_submitted_at(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok()?;
    EVENT_TIMEZONE
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}
