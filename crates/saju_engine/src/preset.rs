//! Boundary-convention presets.
//!
//! A preset is one row of data: where the year turns, where the month
//! turns, which clock the day and hour are read on, when the 子 hour starts
//! a new day, and how a leap month is counted. Adding a convention means
//! adding a row, not new code.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use saju_time::days_in_month;

use crate::error::EngineError;

/// Where the year pillar changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum YearBoundary {
    /// 설날: lunar month 1 day 1.
    LunarNewYear,
    /// A fixed Gregorian month/day (e.g. Feb 4, the usual 입춘 date).
    SolarDate { month: u32, day: u32 },
    /// The instant of 입춘 (立春, solar longitude 315°).
    SolarTerm,
}

/// Where the month pillar changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MonthBoundary {
    /// Lunar month number from the calendar collaborator.
    LunarMonth,
    /// Sectional solar terms (절기); 입춘 opens month 1.
    SolarTerm,
}

/// Clock the day and hour pillars are read on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolarTime {
    /// The civil clock as given.
    Civil,
    /// Local mean solar time at a longitude (degrees east).
    Mean { longitude: f64 },
    /// Local apparent solar time: mean solar time plus the equation of time.
    Apparent { longitude: f64 },
}

/// When the day pillar turns over around the 子 hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiHour {
    /// 야자시: the day changes at 00:00; 23:00–24:00 is the late 子 hour of
    /// the same day.
    SplitAtMidnight,
    /// 조자시: the day changes at 23:00.
    #[serde(rename = "day_starts_at_23")]
    DayStartsAt23,
}

/// How a leap month feeds the month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapMonth {
    /// A leap month counts as the month it repeats.
    AsRegular,
    /// Days 1–15 count as the repeated month, days 16+ as the next.
    SplitAtFifteenth,
}

/// A named boundary convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub key: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub year_boundary: YearBoundary,
    pub month_boundary: MonthBoundary,
    pub solar_time: SolarTime,
    pub zi_hour: ZiHour,
    pub leap_month: LeapMonth,
}

/// Longitude of Seoul used by the traditional preset.
pub const SEOUL_LONGITUDE: f64 = 127.0;

/// Civil clock, year from Feb 4, lunar months.
pub const STANDARD: Preset = Preset {
    key: Cow::Borrowed("standard"),
    name: Cow::Borrowed("Standard (civil clock, Feb 4 year boundary)"),
    year_boundary: YearBoundary::SolarDate { month: 2, day: 4 },
    month_boundary: MonthBoundary::LunarMonth,
    solar_time: SolarTime::Civil,
    zi_hour: ZiHour::SplitAtMidnight,
    leap_month: LeapMonth::AsRegular,
};

/// Lunar new year, Seoul mean solar time, 조자시.
pub const TRADITIONAL: Preset = Preset {
    key: Cow::Borrowed("traditional"),
    name: Cow::Borrowed("Traditional (lunar new year, Seoul mean solar time)"),
    year_boundary: YearBoundary::LunarNewYear,
    month_boundary: MonthBoundary::LunarMonth,
    solar_time: SolarTime::Mean {
        longitude: SEOUL_LONGITUDE,
    },
    zi_hour: ZiHour::DayStartsAt23,
    leap_month: LeapMonth::SplitAtFifteenth,
};

/// Year and month by solar terms (입춘 and 절기).
pub const ASTRONOMICAL: Preset = Preset {
    key: Cow::Borrowed("astronomical"),
    name: Cow::Borrowed("Astronomical (solar-term year and months)"),
    year_boundary: YearBoundary::SolarTerm,
    month_boundary: MonthBoundary::SolarTerm,
    solar_time: SolarTime::Civil,
    zi_hour: ZiHour::SplitAtMidnight,
    leap_month: LeapMonth::AsRegular,
};

/// Built-in presets in display order.
pub const BUILTIN_PRESETS: [&Preset; 3] = [&STANDARD, &TRADITIONAL, &ASTRONOMICAL];

impl Default for Preset {
    fn default() -> Self {
        STANDARD
    }
}

impl Preset {
    /// Built-in preset by key (case-insensitive).
    pub fn by_key(key: &str) -> Option<&'static Preset> {
        BUILTIN_PRESETS
            .into_iter()
            .find(|p| p.key.eq_ignore_ascii_case(key))
    }

    /// True when the day is read on a solar clock rather than the civil one.
    pub fn applies_solar_correction(&self) -> bool {
        !matches!(self.solar_time, SolarTime::Civil)
    }

    /// True when any boundary needs the lunar calendar.
    pub fn needs_lunar_calendar(&self) -> bool {
        matches!(self.year_boundary, YearBoundary::LunarNewYear)
            || matches!(self.month_boundary, MonthBoundary::LunarMonth)
    }

    /// Check field ranges of a (typically user-supplied) preset.
    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = |reason: String| EngineError::InvalidPreset {
            key: self.key.to_string(),
            reason,
        };
        if let YearBoundary::SolarDate { month, day } = self.year_boundary {
            // Feb 29 is rejected.
            if !(1..=12).contains(&month) || day == 0 || day > days_in_month(2001, month) {
                return Err(invalid(format!("year boundary {month}/{day} is not a date")));
            }
        }
        match self.solar_time {
            SolarTime::Mean { longitude } | SolarTime::Apparent { longitude }
                if !(longitude.is_finite() && (-180.0..=180.0).contains(&longitude)) =>
            {
                Err(invalid(format!("longitude {longitude} out of range")))
            }
            _ => Ok(()),
        }
    }
}
