//! Solar/lunar date values and the calendar-conversion trait.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use saju_time::{days_in_month, jdn_from_civil};

use crate::error::CalendarError;

/// A proleptic Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Check that the fields name a real Gregorian date.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= days_in_month(self.year, self.month)
        {
            Ok(())
        } else {
            Err(CalendarError::InvalidSolarDate {
                year: self.year,
                month: self.month,
                day: self.day,
            })
        }
    }

    /// Julian Day Number.
    pub fn jdn(&self) -> i64 {
        jdn_from_civil(self.year, self.month, self.day)
    }

    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = saju_time::civil_from_jdn(jdn);
        Self { year, month, day }
    }
}

impl Display for SolarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year (changes at 정월 초하루, the lunar new year).
    pub year: i32,
    /// Month number 1–12.
    pub month: u8,
    /// Day of month 1–30.
    pub day: u8,
    /// True for an intercalary month (윤달) repeating `month`'s number.
    pub is_leap_month: bool,
}

impl LunarDate {
    pub const fn new(year: i32, month: u8, day: u8, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
        }
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap_month { "윤" } else { "" };
        write!(f, "{:04}-{leap}{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// One month of a lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LunarMonthSpan {
    pub year: i32,
    pub month: u8,
    pub is_leap_month: bool,
    /// Gregorian date of day 1.
    pub start: SolarDate,
    /// 29 or 30.
    pub days: u8,
}

/// Solar ↔ lunar conversion.
///
/// Implementations must satisfy the round-trip law: for every supported
/// solar date `d`, `to_solar(to_lunar(d)?)? == d`, and for every lunar date
/// `l` that `to_solar` accepts, `to_lunar(to_solar(l)?)? == l`.
pub trait LunarCalendar {
    fn to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError>;

    fn to_solar(&self, date: LunarDate) -> Result<SolarDate, CalendarError>;
}

impl<C: LunarCalendar + ?Sized> LunarCalendar for &C {
    fn to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError> {
        (**self).to_lunar(date)
    }

    fn to_solar(&self, date: LunarDate) -> Result<SolarDate, CalendarError> {
        (**self).to_solar(date)
    }
}
