//! Date adapters: the capability set the engine needs from a caller's date type.
//!
//! The engine never touches a date library directly. It reads fields and the
//! UTC offset through a [`DateAdapter`], so callers can hand in a
//! `chrono::DateTime`, a plain [`CivilTime`], or their own type.

use serde::{Deserialize, Serialize};

use crate::civil_time::CivilTime;
use crate::error::TimeError;

/// Wall-clock fields of an instant, as read in its own timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Field extraction, timezone and arithmetic over an opaque date type.
pub trait DateAdapter {
    /// The caller's date representation.
    type Instant: Clone;

    /// Local wall-clock fields.
    fn fields(&self, t: &Self::Instant) -> Result<DateFields, TimeError>;

    /// Human-readable timezone name or offset label.
    fn timezone_name(&self, t: &Self::Instant) -> Result<String, TimeError>;

    /// Minutes east of UTC at this instant.
    fn utc_offset_minutes(&self, t: &Self::Instant) -> Result<i32, TimeError>;

    fn add_minutes(&self, t: &Self::Instant, minutes: i64) -> Result<Self::Instant, TimeError>;

    fn add_days(&self, t: &Self::Instant, days: i64) -> Result<Self::Instant, TimeError>;

    /// The same instant as UTC wall-clock fields.
    fn to_utc(&self, t: &Self::Instant) -> Result<CivilTime, TimeError>;

    /// Milliseconds since 1970-01-01T00:00:00Z.
    fn epoch_millis(&self, t: &Self::Instant) -> Result<i64, TimeError>;

    /// Instant at `millis`, rendered in the timezone of `zone_of`.
    fn from_epoch_millis(
        &self,
        millis: i64,
        zone_of: &Self::Instant,
    ) -> Result<Self::Instant, TimeError>;

    /// Resolve to a validated [`CivilTime`].
    fn to_civil(&self, t: &Self::Instant) -> Result<CivilTime, TimeError> {
        let f = self.fields(t)?;
        let civil = CivilTime::new(
            f.year,
            f.month,
            f.day,
            f.hour,
            f.minute,
            f.second,
            self.utc_offset_minutes(t)?,
        );
        civil.validate()?;
        Ok(civil)
    }
}

/// Adapter over the crate's own [`CivilTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CivilAdapter;

impl DateAdapter for CivilAdapter {
    type Instant = CivilTime;

    fn fields(&self, t: &CivilTime) -> Result<DateFields, TimeError> {
        t.validate()?;
        Ok(DateFields {
            year: t.year,
            month: t.month,
            day: t.day,
            hour: t.hour,
            minute: t.minute,
            second: t.second,
        })
    }

    fn timezone_name(&self, t: &CivilTime) -> Result<String, TimeError> {
        t.validate()?;
        let sign = if t.offset_minutes < 0 { '-' } else { '+' };
        let abs = t.offset_minutes.abs();
        Ok(format!("UTC{sign}{:02}:{:02}", abs / 60, abs % 60))
    }

    fn utc_offset_minutes(&self, t: &CivilTime) -> Result<i32, TimeError> {
        t.validate()?;
        Ok(t.offset_minutes)
    }

    fn add_minutes(&self, t: &CivilTime, minutes: i64) -> Result<CivilTime, TimeError> {
        let secs = minutes.checked_mul(60).ok_or(TimeError::OutOfRange)?;
        Ok(t.shift_seconds(secs))
    }

    fn add_days(&self, t: &CivilTime, days: i64) -> Result<CivilTime, TimeError> {
        Ok(t.shift_days(days))
    }

    fn to_utc(&self, t: &CivilTime) -> Result<CivilTime, TimeError> {
        t.validate()?;
        Ok(t.to_utc())
    }

    fn epoch_millis(&self, t: &CivilTime) -> Result<i64, TimeError> {
        t.validate()?;
        t.unix_seconds().checked_mul(1000).ok_or(TimeError::OutOfRange)
    }

    fn from_epoch_millis(&self, millis: i64, zone_of: &CivilTime) -> Result<CivilTime, TimeError> {
        Ok(CivilTime::from_unix_seconds(
            millis.div_euclid(1000),
            zone_of.offset_minutes,
        ))
    }
}

#[cfg(feature = "chrono")]
pub use chrono_adapter::ChronoAdapter;

#[cfg(feature = "chrono")]
mod chrono_adapter {
    use std::fmt::Display;
    use std::marker::PhantomData;

    use chrono::{DateTime, Datelike, Offset, TimeDelta, TimeZone, Timelike};

    use super::{DateAdapter, DateFields};
    use crate::civil_time::CivilTime;
    use crate::error::TimeError;

    /// Adapter over `chrono::DateTime<Tz>` for any timezone type.
    #[derive(Debug, Clone, Copy)]
    pub struct ChronoAdapter<Tz>(PhantomData<Tz>);

    impl<Tz> ChronoAdapter<Tz> {
        pub const fn new() -> Self {
            Self(PhantomData)
        }
    }

    impl<Tz> Default for ChronoAdapter<Tz> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<Tz> DateAdapter for ChronoAdapter<Tz>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        type Instant = DateTime<Tz>;

        fn fields(&self, t: &DateTime<Tz>) -> Result<DateFields, TimeError> {
            Ok(DateFields {
                year: t.year(),
                month: t.month(),
                day: t.day(),
                hour: t.hour(),
                minute: t.minute(),
                // Leap second 60 folds into 59.
                second: t.second().min(59),
            })
        }

        fn timezone_name(&self, t: &DateTime<Tz>) -> Result<String, TimeError> {
            Ok(t.offset().to_string())
        }

        fn utc_offset_minutes(&self, t: &DateTime<Tz>) -> Result<i32, TimeError> {
            let secs = t.offset().fix().local_minus_utc();
            if secs % 60 != 0 {
                return Err(TimeError::UnresolvedTimezone(format!(
                    "sub-minute offset {secs} s"
                )));
            }
            Ok(secs / 60)
        }

        fn add_minutes(&self, t: &DateTime<Tz>, minutes: i64) -> Result<DateTime<Tz>, TimeError> {
            TimeDelta::try_minutes(minutes)
                .and_then(|d| t.clone().checked_add_signed(d))
                .ok_or(TimeError::OutOfRange)
        }

        fn add_days(&self, t: &DateTime<Tz>, days: i64) -> Result<DateTime<Tz>, TimeError> {
            TimeDelta::try_days(days)
                .and_then(|d| t.clone().checked_add_signed(d))
                .ok_or(TimeError::OutOfRange)
        }

        fn to_utc(&self, t: &DateTime<Tz>) -> Result<CivilTime, TimeError> {
            Ok(CivilTime::from_unix_seconds(t.timestamp(), 0))
        }

        fn epoch_millis(&self, t: &DateTime<Tz>) -> Result<i64, TimeError> {
            Ok(t.timestamp_millis())
        }

        fn from_epoch_millis(
            &self,
            millis: i64,
            zone_of: &DateTime<Tz>,
        ) -> Result<DateTime<Tz>, TimeError> {
            DateTime::from_timestamp_millis(millis)
                .map(|utc| utc.with_timezone(&zone_of.timezone()))
                .ok_or(TimeError::OutOfRange)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn civil_adapter_validates() {
        let bad = CivilTime::new(2023, 2, 29, 0, 0, 0, 540);
        assert!(CivilAdapter.fields(&bad).is_err());
        assert!(CivilAdapter.to_civil(&bad).is_err());
    }

    #[test]
    fn civil_adapter_timezone_label() {
        let t = CivilTime::new(2023, 2, 28, 0, 0, 0, 540);
        assert_eq!(CivilAdapter.timezone_name(&t).unwrap(), "UTC+09:00");
        let w = CivilTime::new(2023, 2, 28, 0, 0, 0, -210);
        assert_eq!(CivilAdapter.timezone_name(&w).unwrap(), "UTC-03:30");
    }

    #[test]
    fn civil_adapter_arithmetic() {
        let t = CivilTime::new(2023, 12, 31, 23, 30, 0, 540);
        let m = CivilAdapter.add_minutes(&t, 45).unwrap();
        assert_eq!((m.year, m.month, m.day, m.hour, m.minute), (2024, 1, 1, 0, 15));
        let d = CivilAdapter.add_days(&t, -365).unwrap();
        assert_eq!((d.year, d.month, d.day), (2022, 12, 31));
    }

    #[test]
    fn civil_adapter_epoch_round_trip() {
        let t = CivilTime::new(1988, 8, 8, 8, 8, 8, 540);
        let ms = CivilAdapter.epoch_millis(&t).unwrap();
        assert_eq!(CivilAdapter.from_epoch_millis(ms, &t).unwrap(), t);
    }
}
