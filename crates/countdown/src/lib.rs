//! # countdown
//!
//! Deterministic D-day labels for the hackathon site, computed in Korea
//! Standard Time regardless of where the caller runs.
//!
//! The event date is a plain calendar date (`YYYY-MM-DD`). "Now" is always an
//! explicit argument, so the same inputs produce the same label everywhere.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use countdown::dday_label;
//!
//! // 2026-02-14 00:00 KST is 2026-02-13 15:00 UTC.
//! let now = Utc.with_ymd_and_hms(2026, 2, 13, 15, 0, 0).unwrap();
//! assert_eq!(dday_label("2026-02-21", now).unwrap(), "D-7");
//! ```
//!
//! ## Modules
//!
//! - [`event`] — `EventDate` parsing and day serials
//! - [`label`] — KST projection and D-day label formatting
//! - [`submitted`] — KST rendering of submission timestamps
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod label;
pub mod submitted;

pub use error::CountdownError;
pub use event::{day_serial, EventDate};
pub use label::{days_until, dday_label, dday_label_for, kst_today, EVENT_TIMEZONE};
pub use submitted::{format_submitted_at, MISSING_SUBMISSION_LABEL};
