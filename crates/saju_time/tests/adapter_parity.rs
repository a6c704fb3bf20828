//! The chrono adapter and the civil adapter must agree on every capability.

#![cfg(feature = "chrono")]

use chrono::{DateTime, FixedOffset, TimeZone};
use saju_time::{ChronoAdapter, CivilAdapter, CivilTime, DateAdapter};

const OFFSETS_MIN: [i32; 5] = [540, 480, 0, -210, 345];

fn pair(offset_min: i32, y: i32, mo: u32, d: u32, h: u32, mi: u32) -> (DateTime<FixedOffset>, CivilTime) {
    let tz = FixedOffset::east_opt(offset_min * 60).unwrap();
    let dt = tz.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap();
    (dt, CivilTime::new(y, mo, d, h, mi, 0, offset_min))
}

#[test]
fn same_civil_fields_and_epoch() {
    let chrono = ChronoAdapter::<FixedOffset>::new();
    for off in OFFSETS_MIN {
        for (y, mo, d, h, mi) in [(1901, 1, 1, 0, 0), (1988, 9, 17, 4, 5), (2024, 2, 29, 23, 59)] {
            let (dt, civil) = pair(off, y, mo, d, h, mi);
            assert_eq!(chrono.to_civil(&dt).unwrap(), civil);
            assert_eq!(chrono.epoch_millis(&dt).unwrap(), CivilAdapter.epoch_millis(&civil).unwrap());
            assert_eq!(chrono.to_utc(&dt).unwrap(), CivilAdapter.to_utc(&civil).unwrap());
        }
    }
}

#[test]
fn same_arithmetic() {
    let chrono = ChronoAdapter::<FixedOffset>::new();
    for off in OFFSETS_MIN {
        let (dt, civil) = pair(off, 2023, 12, 31, 23, 30);
        for minutes in [-1_440, -31, 0, 45, 10_000] {
            let a = chrono.add_minutes(&dt, minutes).unwrap();
            let b = CivilAdapter.add_minutes(&civil, minutes).unwrap();
            assert_eq!(chrono.to_civil(&a).unwrap(), b);
        }
        for days in [-366, -1, 1, 60] {
            let a = chrono.add_days(&dt, days).unwrap();
            let b = CivilAdapter.add_days(&civil, days).unwrap();
            assert_eq!(chrono.to_civil(&a).unwrap(), b);
            assert_eq!(
                chrono.epoch_millis(&a).unwrap() - chrono.epoch_millis(&dt).unwrap(),
                days * 86_400_000
            );
        }
    }
}

#[test]
fn text_round_trip() {
    for off in OFFSETS_MIN {
        let (_, civil) = pair(off, 1999, 12, 31, 23, 59);
        let text = civil.to_string();
        assert_eq!(text.parse::<CivilTime>().unwrap(), civil, "{text}");
    }
}
