//! Local mean solar time.
//!
//! Civil clocks run on a zone meridian (KST: 135°E). Local mean solar time
//! runs on the birth longitude: the sun gains 4 minutes per degree east.
//! Seoul (≈127°E) therefore reads about 32 minutes behind KST.

use crate::civil_time::CivilTime;
use crate::error::TimeError;

/// Seconds of clock time per degree of longitude.
pub const SECONDS_PER_DEGREE: f64 = 240.0;

/// Meridian (degrees east) that a UTC offset keeps time for.
pub fn zone_meridian_deg(offset_minutes: i32) -> f64 {
    offset_minutes as f64 / 4.0
}

/// Mean-solar correction, in whole seconds, for a longitude on a zone clock.
pub fn mean_solar_correction_seconds(
    longitude_deg: f64,
    offset_minutes: i32,
) -> Result<i64, TimeError> {
    if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(TimeError::InvalidField {
            field: "longitude",
            value: longitude_deg as i64,
        });
    }
    let delta = longitude_deg - zone_meridian_deg(offset_minutes);
    Ok((delta * SECONDS_PER_DEGREE).round() as i64)
}

/// Shift a civil instant onto the local mean solar clock of `longitude_deg`.
///
/// The offset field is kept, so the result reads as "mean solar wall time"
/// and must be truncated to a date only after this shift.
pub fn apply_mean_solar_time(civil: &CivilTime, longitude_deg: f64) -> Result<CivilTime, TimeError> {
    let correction = mean_solar_correction_seconds(longitude_deg, civil.offset_minutes)?;
    Ok(civil.shift_seconds(correction))
}
