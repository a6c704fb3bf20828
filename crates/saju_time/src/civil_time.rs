//! Local civil date/time with an explicit UTC offset.
//!
//! `CivilTime` is the engine's canonical instant: wall-clock fields as read
//! on a clock in the birth place, plus the offset that clock runs at. All
//! arithmetic goes through whole seconds so results are reproducible.

use std::fmt::{Display, Formatter};
#[cfg(feature = "chrono")]
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JDN, civil_from_jdn, days_in_month, jdn_from_civil};

/// Largest accepted UTC offset magnitude (±18:00).
pub const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Local wall-clock date and time with its UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Minutes east of UTC (KST = +540).
    pub offset_minutes: i32,
}

impl CivilTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        offset_minutes: i32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            offset_minutes,
        }
    }

    /// Midnight at the start of a date.
    pub fn date(year: i32, month: u32, day: u32, offset_minutes: i32) -> Self {
        Self::new(year, month, day, 0, 0, 0, offset_minutes)
    }

    /// Check every field against its range.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(invalid("month", self.month as i64));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(invalid("day", self.day as i64));
        }
        if self.hour > 23 {
            return Err(invalid("hour", self.hour as i64));
        }
        if self.minute > 59 {
            return Err(invalid("minute", self.minute as i64));
        }
        if self.second > 59 {
            return Err(invalid("second", self.second as i64));
        }
        if self.offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(TimeError::UnresolvedTimezone(format!(
                "offset {} min",
                self.offset_minutes
            )));
        }
        Ok(())
    }

    /// Julian Day Number of the local date.
    pub fn jdn(&self) -> i64 {
        jdn_from_civil(self.year, self.month, self.day)
    }

    /// Seconds since local midnight.
    pub fn seconds_of_day(&self) -> i64 {
        self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64
    }

    /// Seconds since 1970-01-01T00:00:00Z.
    pub fn unix_seconds(&self) -> i64 {
        (self.jdn() - UNIX_EPOCH_JDN) * SECONDS_PER_DAY + self.seconds_of_day()
            - self.offset_minutes as i64 * 60
    }

    /// Build from Unix seconds, rendered at the given offset.
    pub fn from_unix_seconds(secs: i64, offset_minutes: i32) -> Self {
        let local = secs + offset_minutes as i64 * 60;
        let days = local.div_euclid(SECONDS_PER_DAY);
        let sod = local.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = civil_from_jdn(days + UNIX_EPOCH_JDN);
        Self {
            year,
            month,
            day,
            hour: (sod / 3600) as u32,
            minute: ((sod % 3600) / 60) as u32,
            second: (sod % 60) as u32,
            offset_minutes,
        }
    }

    /// Julian Date (UT) of this instant.
    pub fn jd_ut(&self) -> f64 {
        self.unix_seconds() as f64 / SECONDS_PER_DAY as f64 + UNIX_EPOCH_JDN as f64 - 0.5
    }

    /// Shift the wall clock by a number of seconds, keeping the offset.
    pub fn shift_seconds(&self, seconds: i64) -> Self {
        Self::from_unix_seconds(self.unix_seconds() + seconds, self.offset_minutes)
    }

    /// Shift the wall clock by whole days, keeping the time of day.
    pub fn shift_days(&self, days: i64) -> Self {
        let (year, month, day) = civil_from_jdn(self.jdn() + days);
        Self {
            year,
            month,
            day,
            ..*self
        }
    }

    /// Same instant expressed in UTC.
    pub fn to_utc(&self) -> Self {
        Self::from_unix_seconds(self.unix_seconds(), 0)
    }
}

fn invalid(field: &'static str, value: i64) -> TimeError {
    TimeError::InvalidField { field, value }
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.offset_minutes == 0 {
            return write!(f, "Z");
        }
        let sign = if self.offset_minutes < 0 { '-' } else { '+' };
        let abs = self.offset_minutes.abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

#[cfg(feature = "chrono")]
impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parse RFC 3339 text (`1990-05-15T14:30:00+09:00`); fractional seconds
    /// are dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use crate::adapter::{ChronoAdapter, DateAdapter};

        let dt = chrono::DateTime::parse_from_rfc3339(s.trim())
            .map_err(|e| TimeError::Parse(format!("{s}: {e}")))?;
        ChronoAdapter::<chrono::FixedOffset>::new().to_civil(&dt)
    }
}
