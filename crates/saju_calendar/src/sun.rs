//! Apparent geocentric solar longitude and the equation of time.
//!
//! Low-precision solar theory from Meeus, "Astronomical Algorithms" (2nd ed.)
//! ch. 25 and ch. 28. Accuracy ≈ 0.01° in longitude, which places a solar
//! term within about a quarter of an hour. Public domain.

use saju_time::J2000_JD;

use crate::delta_t::{tt_to_ut, ut_to_tt};
use crate::error::CalendarError;

/// Mean tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_189;

const MAX_ITERATIONS: usize = 30;
const LONGITUDE_TOLERANCE_DEG: f64 = 1e-7;

/// Julian centuries of TT from J2000.0.
pub fn centuries_tt(jd_tt: f64) -> f64 {
    (jd_tt - J2000_JD) / 36_525.0
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize an angle to (-180, 180] degrees.
pub fn normalize_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

fn mean_longitude_deg(t: f64) -> f64 {
    280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t
}

fn mean_anomaly_deg(t: f64) -> f64 {
    357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t
}

fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t
}

/// Apparent solar longitude (degrees, [0, 360)) at a TT Julian Date.
///
/// True longitude from the equation of center, then nutation in longitude
/// and aberration via the Ω term (Meeus 25.8).
pub fn apparent_longitude_deg(jd_tt: f64) -> f64 {
    let t = centuries_tt(jd_tt);
    let l0 = mean_longitude_deg(t);
    let m = mean_anomaly_deg(t).to_radians();

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let true_longitude = l0 + c;

    let omega = (125.04 - 1_934.136 * t).to_radians();
    normalize_360(true_longitude - 0.005_69 - 0.004_78 * omega.sin())
}

/// Apparent solar longitude at a UT Julian Date.
pub fn apparent_longitude_ut_deg(jd_ut: f64) -> f64 {
    apparent_longitude_deg(ut_to_tt(jd_ut))
}

/// Mean obliquity of the ecliptic in degrees (Meeus 22.2, truncated).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_291_11 - 0.013_004_167 * t - 0.000_000_164 * t * t + 0.000_000_504 * t * t * t
}

/// Equation of time in minutes at a UT Julian Date.
///
/// Positive when the apparent sun runs ahead of the mean sun
/// (apparent solar time = mean solar time + EoT). Meeus 28.3.
pub fn equation_of_time_minutes(jd_ut: f64) -> f64 {
    let t = centuries_tt(ut_to_tt(jd_ut));
    let eps = mean_obliquity_deg(t).to_radians();
    let l0 = mean_longitude_deg(t).to_radians();
    let m = mean_anomaly_deg(t).to_radians();
    let e = eccentricity(t);
    let y = (eps / 2.0).tan().powi(2);

    let eot_rad = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    eot_rad.to_degrees() * 4.0
}

/// UT Julian Date at which the apparent solar longitude reaches `target_deg`,
/// searching from a TT guess within half a year of the answer.
pub fn find_longitude_crossing(target_deg: f64, jd_tt_guess: f64) -> Result<f64, CalendarError> {
    let mut jd = jd_tt_guess;
    for _ in 0..MAX_ITERATIONS {
        let delta = normalize_pm180(target_deg - apparent_longitude_deg(jd));
        if delta.abs() < LONGITUDE_TOLERANCE_DEG {
            return Ok(tt_to_ut(jd));
        }
        jd += delta * TROPICAL_YEAR_DAYS / 360.0;
    }
    Err(CalendarError::NoConvergence("solar longitude crossing"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 Oct 13.0 TD → apparent λ = 199.90895° (low-precision 199.90988°)
        let lon = apparent_longitude_deg(2_448_908.5);
        assert!((lon - 199.909).abs() < 0.01, "got {lon}");
    }

    #[test]
    fn eot_early_november_is_about_plus_16() {
        // 2000-11-03 12:00 UT
        let eot = equation_of_time_minutes(2_451_852.0);
        assert!((eot - 16.4).abs() < 0.5, "got {eot}");
    }

    #[test]
    fn eot_mid_february_is_about_minus_14() {
        // 2000-02-11 12:00 UT
        let eot = equation_of_time_minutes(2_451_586.0);
        assert!((eot + 14.2).abs() < 0.5, "got {eot}");
    }

    #[test]
    fn march_equinox_2000() {
        // 2000-03-20 07:35 UT
        let jd = find_longitude_crossing(0.0, 2_451_623.8).unwrap();
        let expected = 2_451_623.816;
        assert!((jd - expected).abs() < 0.02, "got {jd}");
    }

    #[test]
    fn pm180_wraps() {
        assert!((normalize_pm180(350.0) + 10.0).abs() < 1e-12);
        assert!((normalize_pm180(-190.0) - 170.0).abs() < 1e-12);
    }
}
