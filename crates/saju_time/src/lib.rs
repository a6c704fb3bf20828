//! Civil time for the saju engine.
//!
//! This crate provides:
//! - Julian Day Number ↔ proleptic Gregorian conversions
//! - `CivilTime`, a wall-clock instant with an explicit UTC offset
//! - The `DateAdapter` capability trait, with adapters for `CivilTime`
//!   and (feature `chrono`) `chrono::DateTime`
//! - Local mean solar time correction

pub mod adapter;
pub mod civil_time;
pub mod error;
pub mod julian;
pub mod solar_time;

#[cfg(feature = "chrono")]
pub use adapter::ChronoAdapter;
pub use adapter::{CivilAdapter, DateAdapter, DateFields};
pub use civil_time::{CivilTime, MAX_OFFSET_MINUTES};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JDN, calendar_to_jd, civil_from_jdn, days_in_month,
    is_leap_year, jdn_from_civil,
};
pub use solar_time::{
    SECONDS_PER_DEGREE, apply_mean_solar_time, mean_solar_correction_seconds, zone_meridian_deg,
};
