//! Property-based tests for D-day labels using proptest.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Asia::Seoul;
use countdown::{days_until, dday_label, EventDate};
use proptest::prelude::*;

/// A valid calendar date in the 2000-2099 range.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..=2099, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// A UTC instant in the 2000-2099 range.
fn arb_instant() -> impl Strategy<Value = chrono::DateTime<Utc>> {
    (946_684_800i64..4_102_444_800).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn label_is_deterministic(date in arb_date(), now in arb_instant()) {
        let text = date.format("%Y-%m-%d").to_string();
        let first = dday_label(&text, now).unwrap();
        let second = dday_label(&text, now).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn label_matches_day_difference(date in arb_date(), now in arb_instant()) {
        let text = date.format("%Y-%m-%d").to_string();
        let label = dday_label(&text, now).unwrap();
        let diff = days_until(EventDate::from(date), now).unwrap();

        let expected = match diff {
            0 => "D-Day".to_string(),
            d if d > 0 => format!("D-{}", d),
            d => format!("D+{}", -d),
        };
        prop_assert_eq!(label, expected);
    }

    #[test]
    fn time_of_day_within_kst_day_does_not_matter(
        date in arb_date(),
        event in arb_date(),
        secs in 0i64..86_400,
    ) {
        let midnight = Seoul
            .from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
            .unwrap()
            .with_timezone(&Utc);
        let later = midnight + Duration::seconds(secs);

        let event = EventDate::from(event);
        prop_assert_eq!(
            days_until(event, midnight).unwrap(),
            days_until(event, later).unwrap()
        );
    }

    #[test]
    fn event_date_display_roundtrips(date in arb_date()) {
        let text = date.format("%Y-%m-%d").to_string();
        let parsed = EventDate::parse(&text).unwrap();
        prop_assert_eq!(parsed.to_string(), text);
    }
}
