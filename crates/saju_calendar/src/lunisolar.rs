//! Astronomical Korean/Chinese lunisolar calendar.
//!
//! Rules:
//! - A month begins on the local date (at the calendar's meridian) of a
//!   true new moon.
//! - The month containing the winter solstice (λ = 270°) is month 11.
//! - A 세(歲), the span from one month 11 to the next, normally holds 12
//!   months. When it holds 13, the first month after month 11 that contains
//!   no principal term (중기) is intercalary and repeats the previous number.
//! - The lunar year starts at month 1; months 11 and 12 belong to the year
//!   before the 세 they open.
//!
//! The Korean calendar reckons dates at UTC+9 (135°E), the Chinese at
//! UTC+8 (120°E). The two differ in a handful of months per century.

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::lunar_date::{LunarCalendar, LunarDate, LunarMonthSpan, SolarDate};
use crate::new_moon::{lunation_before, new_moon_ut};
use crate::solar_term::{SolarTerm, principal_sector_at, solar_term_instant};

/// First supported Gregorian year.
pub const MIN_YEAR: i32 = 1901;
/// Last supported Gregorian year.
pub const MAX_YEAR: i32 = 2099;

/// One lunation inside a 세, labelled.
#[derive(Debug, Clone, Copy)]
struct SuiMonth {
    start_jdn: i64,
    month: u8,
    leap: bool,
}

/// The labelled months of one 세 plus the JDN where the next one starts.
#[derive(Debug, Clone)]
struct Sui {
    /// Gregorian year whose winter solstice closes this 세.
    year: i32,
    months: Vec<SuiMonth>,
    end_jdn: i64,
}

impl Sui {
    /// Index of the first regular month 1.
    fn new_year_index(&self) -> usize {
        self.months
            .iter()
            .position(|m| m.month == 1 && !m.leap)
            .unwrap_or(self.months.len())
    }

    fn month_end(&self, i: usize) -> i64 {
        self.months
            .get(i + 1)
            .map_or(self.end_jdn, |next| next.start_jdn)
    }

    /// Lunar year of the month at index `i`.
    fn lunar_year_of(&self, i: usize) -> i32 {
        if i < self.new_year_index() {
            self.year - 1
        } else {
            self.year
        }
    }
}

/// Lunisolar calendar computed from new moons and solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunisolarCalendar {
    /// Offset of the reckoning meridian from UTC, in minutes.
    pub meridian_offset_minutes: i32,
}

impl Default for LunisolarCalendar {
    fn default() -> Self {
        Self::KOREAN
    }
}

impl LunisolarCalendar {
    /// Korean calendar, UTC+9.
    pub const KOREAN: Self = Self {
        meridian_offset_minutes: 540,
    };
    /// Chinese calendar, UTC+8.
    pub const CHINESE: Self = Self {
        meridian_offset_minutes: 480,
    };

    fn day_fraction_offset(&self) -> f64 {
        self.meridian_offset_minutes as f64 / 1440.0
    }

    /// Local JDN of a UT Julian Date.
    fn local_jdn(&self, jd_ut: f64) -> i64 {
        (jd_ut + 0.5 + self.day_fraction_offset()).floor() as i64
    }

    /// UT Julian Date of local midnight starting day `jdn`.
    fn local_midnight_ut(&self, jdn: i64) -> f64 {
        jdn as f64 - 0.5 - self.day_fraction_offset()
    }

    fn month_start_jdn(&self, k: i64) -> i64 {
        self.local_jdn(new_moon_ut(k))
    }

    /// Lunation whose month contains local day `jdn`.
    fn lunation_containing(&self, jdn: i64) -> i64 {
        let mut k = lunation_before(self.local_midnight_ut(jdn));
        while self.month_start_jdn(k) > jdn {
            k -= 1;
        }
        while self.month_start_jdn(k + 1) <= jdn {
            k += 1;
        }
        k
    }

    /// Lunation that is month 11 of the 세 closing in Gregorian year `year`.
    fn solstice_lunation(&self, year: i32) -> Result<i64, CalendarError> {
        let solstice = solar_term_instant(year, SolarTerm::Dongji)?;
        Ok(self.lunation_containing(self.local_jdn(solstice.jd_ut)))
    }

    /// True when no principal term falls on a local date inside the month.
    fn lacks_principal_term(&self, start_jdn: i64, end_jdn: i64) -> bool {
        principal_sector_at(self.local_midnight_ut(start_jdn))
            == principal_sector_at(self.local_midnight_ut(end_jdn))
    }

    /// Months from month 11 of `year - 1` up to month 11 of `year`.
    fn sui(&self, year: i32) -> Result<Sui, CalendarError> {
        let first = self.solstice_lunation(year - 1)?;
        let last = self.solstice_lunation(year)?;
        let starts: Vec<i64> = (first..=last).map(|k| self.month_start_jdn(k)).collect();
        let count = starts.len() - 1;

        let leap_index = if count == 13 {
            (1..count).find(|&i| self.lacks_principal_term(starts[i], starts[i + 1]))
        } else {
            None
        };

        let mut months = Vec::with_capacity(count);
        let mut number = 11u8;
        for (i, &start_jdn) in starts[..count].iter().enumerate() {
            let leap = Some(i) == leap_index;
            if i > 0 && !leap {
                number = number % 12 + 1;
            }
            months.push(SuiMonth {
                start_jdn,
                month: number,
                leap,
            });
        }

        Ok(Sui {
            year,
            months,
            end_jdn: starts[count],
        })
    }

    /// The 세 containing local day `jdn` of Gregorian year `year`.
    fn sui_containing(&self, year: i32, jdn: i64) -> Result<Sui, CalendarError> {
        let sui = self.sui(year)?;
        if jdn < sui.months[0].start_jdn {
            self.sui(year - 1)
        } else if jdn >= sui.end_jdn {
            self.sui(year + 1)
        } else {
            Ok(sui)
        }
    }

    fn check_year(year: i32, min: i32) -> Result<(), CalendarError> {
        if (min..=MAX_YEAR).contains(&year) {
            Ok(())
        } else {
            Err(CalendarError::OutOfRange {
                year,
                min,
                max: MAX_YEAR,
            })
        }
    }

    /// All months of lunar year `year`, in order, with their lengths.
    pub fn year_months(&self, year: i32) -> Result<Vec<LunarMonthSpan>, CalendarError> {
        Self::check_year(year, MIN_YEAR - 1)?;
        let mut spans = Vec::with_capacity(13);
        for sui in [self.sui(year)?, self.sui(year + 1)?] {
            for (i, m) in sui.months.iter().enumerate() {
                if sui.lunar_year_of(i) != year {
                    continue;
                }
                spans.push(LunarMonthSpan {
                    year,
                    month: m.month,
                    is_leap_month: m.leap,
                    start: SolarDate::from_jdn(m.start_jdn),
                    days: (sui.month_end(i) - m.start_jdn) as u8,
                });
            }
        }
        Ok(spans)
    }

    /// Intercalary month number of lunar year `year`, if any.
    pub fn leap_month(&self, year: i32) -> Result<Option<u8>, CalendarError> {
        Ok(self
            .year_months(year)?
            .iter()
            .find(|m| m.is_leap_month)
            .map(|m| m.month))
    }

    /// Gregorian date of 정월 초하루 (lunar 1-1) of lunar year `year`.
    pub fn lunar_new_year(&self, year: i32) -> Result<SolarDate, CalendarError> {
        self.to_solar(LunarDate::new(year, 1, 1, false))
    }
}

fn missing_month(year: i32, month: u8, leap: bool) -> CalendarError {
    if leap {
        CalendarError::NoSuchLeapMonth { year, month }
    } else {
        CalendarError::InvalidLunarDate(format!("{year}: no month {month}"))
    }
}

impl LunarCalendar for LunisolarCalendar {
    fn to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError> {
        date.validate()?;
        Self::check_year(date.year, MIN_YEAR)?;
        let jdn = date.jdn();
        let sui = self.sui_containing(date.year, jdn)?;
        let i = sui
            .months
            .iter()
            .rposition(|m| m.start_jdn <= jdn)
            .ok_or_else(|| CalendarError::InvalidLunarDate(format!("{date} precedes its 세")))?;
        let m = sui.months[i];
        Ok(LunarDate {
            year: sui.lunar_year_of(i),
            month: m.month,
            day: (jdn - m.start_jdn + 1) as u8,
            is_leap_month: m.leap,
        })
    }

    fn to_solar(&self, date: LunarDate) -> Result<SolarDate, CalendarError> {
        if !(1..=12).contains(&date.month) || !(1..=30).contains(&date.day) {
            return Err(CalendarError::InvalidLunarDate(date.to_string()));
        }
        Self::check_year(date.year, MIN_YEAR - 1)?;
        let sui_year = if date.month >= 11 {
            date.year + 1
        } else {
            date.year
        };
        let sui = self.sui(sui_year)?;
        let i = sui
            .months
            .iter()
            .enumerate()
            .position(|(i, m)| {
                m.month == date.month
                    && m.leap == date.is_leap_month
                    && sui.lunar_year_of(i) == date.year
            })
            .ok_or_else(|| missing_month(date.year, date.month, date.is_leap_month))?;
        let start = sui.months[i].start_jdn;
        let days = sui.month_end(i) - start;
        if date.day as i64 > days {
            return Err(CalendarError::InvalidLunarDate(format!(
                "{date}: month has {days} days"
            )));
        }
        Ok(SolarDate::from_jdn(start + date.day as i64 - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seollal_2024() {
        let cal = LunisolarCalendar::KOREAN;
        assert_eq!(cal.lunar_new_year(2024).unwrap(), SolarDate::new(2024, 2, 10));
    }

    #[test]
    fn leap_month_2023_is_second() {
        let cal = LunisolarCalendar::KOREAN;
        assert_eq!(cal.leap_month(2023).unwrap(), Some(2));
        assert_eq!(cal.leap_month(2024).unwrap(), None);
    }

    #[test]
    fn year_has_twelve_or_thirteen_months() {
        let cal = LunisolarCalendar::CHINESE;
        for year in [1950, 1984, 2000, 2020, 2023, 2033] {
            let months = cal.year_months(year).unwrap();
            let leaps = months.iter().filter(|m| m.is_leap_month).count();
            assert_eq!(months.len(), 12 + leaps, "year {year}");
            assert!(months.iter().all(|m| m.days == 29 || m.days == 30));
        }
    }

    #[test]
    fn months_are_contiguous() {
        let cal = LunisolarCalendar::KOREAN;
        let months = cal.year_months(2020).unwrap();
        for pair in months.windows(2) {
            assert_eq!(pair[0].start.jdn() + pair[0].days as i64, pair[1].start.jdn());
        }
    }

    #[test]
    fn rejects_out_of_range_solar_year() {
        let cal = LunisolarCalendar::KOREAN;
        assert!(matches!(
            cal.to_lunar(SolarDate::new(1850, 6, 1)),
            Err(CalendarError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_missing_leap_month() {
        let cal = LunisolarCalendar::KOREAN;
        assert_eq!(
            cal.to_solar(LunarDate::new(2024, 5, 1, true)),
            Err(CalendarError::NoSuchLeapMonth {
                year: 2024,
                month: 5
            })
        );
    }
}
