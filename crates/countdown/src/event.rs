//! Calendar dates for events, parsed strictly from `YYYY-MM-DD`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CountdownError, Result};

/// `NaiveDate::num_days_from_ce` for 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// A calendar date with no time of day and no timezone.
///
/// Serializes as its `YYYY-MM-DD` string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventDate(NaiveDate);

impl EventDate {
    /// Parse a strict `YYYY-MM-DD` string.
    ///
    /// Anything else (missing zero padding, extra characters, a month of 13)
    /// is rejected with [`CountdownError::Format`]; nothing is normalized.
    pub fn parse(value: &str) -> Result<Self> {
        let bytes = value.as_bytes();
        let shaped = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !shaped {
            return Err(CountdownError::Format(value.to_string()));
        }

        // All slices are ASCII digits at this point.
        let year: i32 = value[0..4]
            .parse()
            .map_err(|_| CountdownError::Format(value.to_string()))?;
        let month: u32 = value[5..7]
            .parse()
            .map_err(|_| CountdownError::Format(value.to_string()))?;
        let day: u32 = value[8..10]
            .parse()
            .map_err(|_| CountdownError::Format(value.to_string()))?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(EventDate)
            .ok_or_else(|| CountdownError::Format(value.to_string()))
    }

    /// Build from numeric parts, rejecting impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(EventDate)
            .ok_or_else(|| CountdownError::Format(format!("{:04}-{:02}-{:02}", year, month, day)))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Whole days since 1970-01-01.
    pub fn day_serial(&self) -> i64 {
        day_serial(self.0)
    }
}

/// Whole days between 1970-01-01 and `date` (negative before the epoch).
///
/// Computed from the calendar date alone, so offsets and DST never move it.
pub fn day_serial(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
}

impl From<NaiveDate> for EventDate {
    fn from(date: NaiveDate) -> Self {
        EventDate(date)
    }
}

impl FromStr for EventDate {
    type Err = CountdownError;

    fn from_str(s: &str) -> Result<Self> {
        EventDate::parse(s)
    }
}

impl TryFrom<String> for EventDate {
    type Error = CountdownError;

    fn try_from(value: String) -> Result<Self> {
        EventDate::parse(&value)
    }
}

impl From<EventDate> for String {
    fn from(date: EventDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_day_zero() {
        let epoch = EventDate::parse("1970-01-01").unwrap();
        assert_eq!(epoch.day_serial(), 0);
        assert_eq!(EventDate::parse("1969-12-31").unwrap().day_serial(), -1);
    }

    #[test]
    fn rejects_unpadded_parts() {
        assert!(EventDate::parse("2026-2-21").is_err());
        assert!(EventDate::parse("2026-02-1").is_err());
        assert!(EventDate::parse(" 2026-02-21").is_err());
    }

    #[test]
    fn rejects_signs_inside_numeric_slots() {
        assert!(EventDate::parse("+026-02-21").is_err());
        assert!(EventDate::parse("2026-+2-21").is_err());
    }
}
