//! The 24 solar terms (절기, 節氣).
//!
//! Terms are 15° steps of apparent solar longitude. Listed from 입춘
//! (立春, 315°), the start of the saju year. Even indices are the sectional
//! terms (절, 節) that open a saju month; odd indices are the principal terms
//! (중기, 中氣) that the lunisolar calendar uses to place leap months.

use serde::{Deserialize, Serialize};

use saju_time::{CivilTime, calendar_to_jd};

use crate::delta_t::ut_to_tt;
use crate::error::CalendarError;
use crate::sun::{TROPICAL_YEAR_DAYS, apparent_longitude_ut_deg, find_longitude_crossing};

/// Supported Gregorian years for solar-term search.
pub const MIN_TERM_YEAR: i32 = 1800;
pub const MAX_TERM_YEAR: i32 = 2200;

/// One of the 24 solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
    Sohan,
    Daehan,
}

/// All 24 terms in order (index 0 = 입춘).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
    SolarTerm::Sohan,
    SolarTerm::Daehan,
];

const TERM_NAMES: [(&str, &str); 24] = [
    ("입춘", "立春"),
    ("우수", "雨水"),
    ("경칩", "驚蟄"),
    ("춘분", "春分"),
    ("청명", "淸明"),
    ("곡우", "穀雨"),
    ("입하", "立夏"),
    ("소만", "小滿"),
    ("망종", "芒種"),
    ("하지", "夏至"),
    ("소서", "小暑"),
    ("대서", "大暑"),
    ("입추", "立秋"),
    ("처서", "處暑"),
    ("백로", "白露"),
    ("추분", "秋分"),
    ("한로", "寒露"),
    ("상강", "霜降"),
    ("입동", "立冬"),
    ("소설", "小雪"),
    ("대설", "大雪"),
    ("동지", "冬至"),
    ("소한", "小寒"),
    ("대한", "大寒"),
];

impl SolarTerm {
    /// 0-based index (입춘=0 .. 대한=23).
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        ALL_SOLAR_TERMS.get(index as usize).copied()
    }

    /// Hangul name.
    pub fn name(self) -> &'static str {
        TERM_NAMES[self.index() as usize].0
    }

    /// Hanja name.
    pub fn hanja(self) -> &'static str {
        TERM_NAMES[self.index() as usize].1
    }

    /// Apparent solar longitude at which the term begins.
    pub fn longitude_deg(self) -> f64 {
        ((315 + 15 * self.index() as u32) % 360) as f64
    }

    /// Sectional term (절): opens a saju month.
    pub fn is_sectional(self) -> bool {
        self.index() % 2 == 0
    }

    /// Principal term (중기): decides leap months.
    pub fn is_principal(self) -> bool {
        !self.is_sectional()
    }

    /// Saju month (1 = 寅 month) this term falls in.
    pub fn saju_month(self) -> u8 {
        self.index() / 2 + 1
    }
}

/// A solar term occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    /// UT Julian Date of the crossing.
    pub jd_ut: f64,
}

impl SolarTermEvent {
    /// The crossing rendered at a UTC offset, rounded to the minute.
    pub fn civil(&self, offset_minutes: i32) -> CivilTime {
        let unix_minutes = ((self.jd_ut - 2_440_587.5) * 1440.0).round() as i64;
        CivilTime::from_unix_seconds(unix_minutes * 60, offset_minutes)
    }
}

fn check_year(year: i32) -> Result<(), CalendarError> {
    if (MIN_TERM_YEAR..=MAX_TERM_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::OutOfRange {
            year,
            min: MIN_TERM_YEAR,
            max: MAX_TERM_YEAR,
        })
    }
}

/// The occurrence of `term` within Gregorian year `year`.
///
/// 소한, 대한, 입춘, 우수 and 경칩 fall in January–March; the rest follow
/// the March equinox of the same year.
pub fn solar_term_instant(year: i32, term: SolarTerm) -> Result<SolarTermEvent, CalendarError> {
    check_year(year)?;
    let lon = term.longitude_deg();
    let equinox_guess = calendar_to_jd(year, 3, 20.5);
    let offset_deg = if lon >= 285.0 { lon - 360.0 } else { lon };
    let guess = ut_to_tt(equinox_guess + offset_deg * TROPICAL_YEAR_DAYS / 360.0);
    let jd_ut = find_longitude_crossing(lon, guess)?;
    Ok(SolarTermEvent { term, jd_ut })
}

/// All 24 terms falling in a Gregorian year, in time order (소한 first).
pub fn solar_terms_of_year(year: i32) -> Result<Vec<SolarTermEvent>, CalendarError> {
    let mut events = ALL_SOLAR_TERMS
        .iter()
        .map(|&t| solar_term_instant(year, t))
        .collect::<Result<Vec<_>, _>>()?;
    events.sort_by(|a, b| a.jd_ut.total_cmp(&b.jd_ut));
    Ok(events)
}

/// Most recent term at or before a UT instant.
pub fn solar_term_at(jd_ut: f64) -> SolarTerm {
    let lon = apparent_longitude_ut_deg(jd_ut);
    let steps = ((lon - 315.0).rem_euclid(360.0) / 15.0).floor() as u8;
    ALL_SOLAR_TERMS[(steps % 24) as usize]
}

/// Saju month (1 = 寅 .. 12 = 丑) by sectional terms at a UT instant.
pub fn solar_term_month_at(jd_ut: f64) -> u8 {
    solar_term_at(jd_ut).saju_month()
}

/// Index (0..12) of the principal-term sector the sun is in: floor(λ / 30).
pub fn principal_sector_at(jd_ut: f64) -> u8 {
    ((apparent_longitude_ut_deg(jd_ut) / 30.0).floor() as u8) % 12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitudes() {
        assert_eq!(SolarTerm::Ipchun.longitude_deg(), 315.0);
        assert_eq!(SolarTerm::Chunbun.longitude_deg(), 0.0);
        assert_eq!(SolarTerm::Dongji.longitude_deg(), 270.0);
        assert_eq!(SolarTerm::Daehan.longitude_deg(), 300.0);
    }

    #[test]
    fn indices_sequential() {
        for (i, t) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert_eq!(SolarTerm::from_index(i as u8), Some(*t));
        }
        assert_eq!(SolarTerm::from_index(24), None);
    }

    #[test]
    fn saju_months_of_sectional_terms() {
        assert_eq!(SolarTerm::Ipchun.saju_month(), 1);
        assert_eq!(SolarTerm::Gyeongchip.saju_month(), 2);
        assert_eq!(SolarTerm::Daeseol.saju_month(), 11);
        assert_eq!(SolarTerm::Sohan.saju_month(), 12);
        assert!(SolarTerm::Sohan.is_sectional());
        assert!(SolarTerm::Dongji.is_principal());
    }

    #[test]
    fn ipchun_2024() {
        // 2024-02-04 08:27 UT (17:27 KST)
        let ev = solar_term_instant(2024, SolarTerm::Ipchun).unwrap();
        let c = ev.civil(540);
        assert_eq!((c.year, c.month, c.day, c.hour), (2024, 2, 4, 17));
    }

    #[test]
    fn winter_solstice_1999() {
        // 1999-12-22 07:44 UT
        let ev = solar_term_instant(1999, SolarTerm::Dongji).unwrap();
        let c = ev.civil(0);
        assert_eq!((c.year, c.month, c.day, c.hour), (1999, 12, 22, 7));
    }

    #[test]
    fn terms_of_year_start_with_sohan() {
        let events = solar_terms_of_year(2023).unwrap();
        assert_eq!(events.len(), 24);
        assert_eq!(events[0].term, SolarTerm::Sohan);
        assert_eq!(events[23].term, SolarTerm::Dongji);
        let first = events[0].civil(540);
        assert_eq!((first.year, first.month), (2023, 1));
    }

    #[test]
    fn month_at_mid_may_is_snake_month() {
        // 2024-05-15 00:00 UT: after 입하 (May 5), before 망종 (June 5)
        assert_eq!(solar_term_month_at(2_460_445.5), 4);
        assert_eq!(solar_term_at(2_460_445.5), SolarTerm::Ipha);
    }

    #[test]
    fn out_of_range_year() {
        assert!(matches!(
            solar_term_instant(1500, SolarTerm::Ipchun),
            Err(CalendarError::OutOfRange { .. })
        ));
    }
}
