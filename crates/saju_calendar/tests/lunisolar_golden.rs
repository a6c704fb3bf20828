//! Golden dates and round-trip law for the lunisolar calendar.
//!
//! Reference dates from the KASI (Korea Astronomy and Space Science
//! Institute) almanac and the Hong Kong Observatory tables.

use saju_calendar::{
    CalendarError, LunarCalendar, LunarDate, LunisolarCalendar, SolarDate, SolarTerm,
    solar_term_instant,
};
use saju_time::days_in_month;

const KOREAN: LunisolarCalendar = LunisolarCalendar::KOREAN;
const CHINESE: LunisolarCalendar = LunisolarCalendar::CHINESE;

fn lunar(y: i32, m: u32, d: u32) -> LunarDate {
    KOREAN.to_lunar(SolarDate::new(y, m, d)).unwrap()
}

// ---------------------------------------------------------------------------
// Solar → lunar
// ---------------------------------------------------------------------------

#[test]
fn millennium_new_year() {
    assert_eq!(lunar(2000, 1, 1), LunarDate::new(1999, 11, 25, false));
    assert_eq!(
        CHINESE.to_lunar(SolarDate::new(2000, 1, 1)).unwrap(),
        LunarDate::new(1999, 11, 25, false)
    );
}

#[test]
fn leap_second_month_2023() {
    assert_eq!(lunar(2023, 3, 22), LunarDate::new(2023, 2, 1, true));
    assert_eq!(lunar(2023, 3, 21), LunarDate::new(2023, 2, 30, false));
    assert_eq!(lunar(2023, 4, 20), LunarDate::new(2023, 3, 1, false));
}

#[test]
fn leap_fourth_month_2020() {
    assert_eq!(lunar(2020, 5, 23), LunarDate::new(2020, 4, 1, true));
}

#[test]
fn lunar_new_years() {
    assert_eq!(lunar(2023, 1, 22), LunarDate::new(2023, 1, 1, false));
    assert_eq!(lunar(2024, 2, 10), LunarDate::new(2024, 1, 1, false));
    assert_eq!(lunar(2024, 2, 9), LunarDate::new(2023, 12, 30, false));
}

#[test]
fn chuseok_2024() {
    assert_eq!(
        KOREAN.to_solar(LunarDate::new(2024, 8, 15, false)).unwrap(),
        SolarDate::new(2024, 9, 17)
    );
}

#[test]
fn korean_and_chinese_differ_in_1997() {
    // New moon 1997-02-07 15:06 UT: 23:06 in Beijing, 00:06 next day in Seoul.
    assert_eq!(KOREAN.lunar_new_year(1997).unwrap(), SolarDate::new(1997, 2, 8));
    assert_eq!(CHINESE.lunar_new_year(1997).unwrap(), SolarDate::new(1997, 2, 7));
}

#[test]
fn solstice_falls_in_eleventh_month() {
    for year in [1950, 1988, 2000, 2023, 2050] {
        let ws = solar_term_instant(year, SolarTerm::Dongji).unwrap();
        let c = ws.civil(KOREAN.meridian_offset_minutes);
        let l = lunar(c.year, c.month, c.day);
        assert_eq!(l.month, 11, "year {year}: {l}");
    }
}

// ---------------------------------------------------------------------------
// Round-trip law
// ---------------------------------------------------------------------------

fn assert_solar_round_trip(cal: &LunisolarCalendar, year: i32) {
    for month in 1..=12 {
        for day in 1..=days_in_month(year, month) {
            let d = SolarDate::new(year, month, day);
            let l = cal.to_lunar(d).unwrap();
            assert_eq!(cal.to_solar(l).unwrap(), d, "{d} -> {l}");
        }
    }
}

#[test]
fn solar_round_trip_full_years() {
    for year in [1901, 1997, 2023, 2033, 2099] {
        assert_solar_round_trip(&KOREAN, year);
    }
    assert_solar_round_trip(&CHINESE, 2033);
}

#[test]
fn lunar_round_trip_full_years() {
    for year in [1965, 2023, 2025] {
        for span in KOREAN.year_months(year).unwrap() {
            for day in 1..=span.days {
                let l = LunarDate::new(year, span.month, day, span.is_leap_month);
                let d = KOREAN.to_solar(l).unwrap();
                assert_eq!(KOREAN.to_lunar(d).unwrap(), l, "{l} -> {d}");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn out_of_range_years() {
    assert!(matches!(
        KOREAN.to_lunar(SolarDate::new(1900, 6, 1)),
        Err(CalendarError::OutOfRange { year: 1900, .. })
    ));
    assert!(matches!(
        KOREAN.to_lunar(SolarDate::new(2100, 6, 1)),
        Err(CalendarError::OutOfRange { year: 2100, .. })
    ));
}

#[test]
fn invalid_dates() {
    assert!(matches!(
        KOREAN.to_lunar(SolarDate::new(2023, 2, 29)),
        Err(CalendarError::InvalidSolarDate { .. })
    ));
    assert!(matches!(
        KOREAN.to_solar(LunarDate::new(2023, 13, 1, false)),
        Err(CalendarError::InvalidLunarDate(_))
    ));
    // Leap 2nd month of 2023 has 29 days.
    assert!(matches!(
        KOREAN.to_solar(LunarDate::new(2023, 2, 30, true)),
        Err(CalendarError::InvalidLunarDate(_))
    ));
}
