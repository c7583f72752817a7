//! D-day labels -- "D-7", "D-Day", "D+3" -- counted in Korea Standard Time.
//!
//! "Now" is projected onto the KST calendar with `chrono-tz`, both dates are
//! reduced to day serials, and the label is derived from their difference.
//! The host timezone is never consulted.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{CountdownError, Result};
use crate::event::{day_serial, EventDate};

/// IANA timezone the event is held in.
pub const EVENT_TIMEZONE: Tz = chrono_tz::Asia::Seoul;

/// The KST calendar date containing `now`.
///
/// # Errors
/// Returns `CountdownError::Extraction` if the projected year/month/day do not
/// form a valid date.
pub fn kst_today(now: DateTime<Utc>) -> Result<NaiveDate> {
    let local = now.with_timezone(&EVENT_TIMEZONE);
    let (year, month, day) = (local.year(), local.month(), local.day());
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CountdownError::Extraction(format!(
            "{} projected to {}-{}-{}",
            now.to_rfc3339(),
            year,
            month,
            day
        ))
    })
}

/// Signed number of KST days from `now` until `event`.
///
/// Positive before the event, zero on the day, negative afterwards.
pub fn days_until(event: EventDate, now: DateTime<Utc>) -> Result<i64> {
    let today = kst_today(now)?;
    Ok(event.day_serial() - day_serial(today))
}

/// Compute the D-day label for an already-parsed event date.
pub fn dday_label_for(event: EventDate, now: DateTime<Utc>) -> Result<String> {
    let diff = days_until(event, now)?;
    let label = match diff {
        0 => "D-Day".to_string(),
        d if d > 0 => format!("D-{}", d),
        d => format!("D+{}", d.unsigned_abs()),
    };
    log::debug!("dday label for {} at {}: {}", event, now.to_rfc3339(), label);
    Ok(label)
}

/// Compute the D-day label for `event_date_kst` (`YYYY-MM-DD`) as seen at `now`.
///
/// # Errors
/// Returns `CountdownError::Format` if `event_date_kst` is not a valid
/// `YYYY-MM-DD` date, and `CountdownError::Extraction` if `now` cannot be
/// projected onto the KST calendar.
pub fn dday_label(event_date_kst: &str, now: DateTime<Utc>) -> Result<String> {
    let event = EventDate::parse(event_date_kst)?;
    dday_label_for(event, now)
}
