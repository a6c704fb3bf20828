//! ΔT = TT − UT, in seconds.
//!
//! Polynomial fits from Espenak & Meeus, "Five Millennium Canon of Solar
//! Eclipses" (NASA TP-2006-214141). Public domain. Accurate to about a second
//! over 1800–2050; beyond 2050 it is an extrapolation.

use saju_time::J2000_JD;

/// Decimal year of a Julian Date.
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// ΔT in seconds at a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if y < 1800.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    } else if y < 1860.0 {
        let t = y - 1800.0;
        13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7)
    } else if y < 1900.0 {
        let t = y - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else if y < 2150.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// Convert a UT Julian Date to TT.
pub fn ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(decimal_year(jd_ut)) / 86_400.0
}

/// Convert a TT Julian Date to UT.
pub fn tt_to_ut(jd_tt: f64) -> f64 {
    jd_tt - delta_t_seconds(decimal_year(jd_tt)) / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000() {
        assert!((delta_t_seconds(2000.0) - 63.86).abs() < 1e-9);
    }

    #[test]
    fn year_1950() {
        assert!((delta_t_seconds(1950.0) - 29.07).abs() < 1e-9);
    }

    #[test]
    fn segments_are_continuous() {
        for edge in [1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let below = delta_t_seconds(edge - 1e-6);
            let above = delta_t_seconds(edge);
            assert!((below - above).abs() < 1.0, "jump at {edge}: {below} vs {above}");
        }
    }

    #[test]
    fn tt_ut_inverse() {
        let jd = 2_460_000.25;
        assert!((tt_to_ut(ut_to_tt(jd)) - jd).abs() < 1e-8);
    }
}
