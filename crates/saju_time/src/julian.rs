//! Julian day numbers and proleptic Gregorian calendar arithmetic.
//!
//! The Julian Day Number (JDN) labels a civil date; the Julian Date (JD)
//! labels an instant, with JD = JDN - 0.5 at the midnight that starts the
//! date. All day-counting in the engine goes through these integer helpers.
//!
//! Sources: Fliegel & Van Flandern (1968), Meeus "Astronomical Algorithms"
//! ch. 7. Public domain.

/// JD of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// JDN of 1970-01-01.
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month. Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Julian Day Number of a proleptic Gregorian date.
pub fn jdn_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Proleptic Gregorian date `(year, month, day)` of a Julian Day Number.
pub fn civil_from_jdn(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as i32, month as u32, day as u32)
}

/// Julian Date of a calendar date with fractional day (day 1.5 = noon on the 1st).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let whole = day_frac.floor();
    let jdn = jdn_from_civil(year, month, whole as u32);
    jdn as f64 - 0.5 + (day_frac - whole)
}
