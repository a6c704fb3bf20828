//! Year, month, day and hour pillars from a local civil instant.
//!
//! Epochs:
//! - Year: 1984 is 甲子.
//! - Day: 1949-10-01 (JDN 2,433,191) is 甲子.
//!
//! Tables:
//! - 월두법 (five tigers): month-1 stem by year stem, 甲/己 → 丙寅,
//!   乙/庚 → 戊寅, 丙/辛 → 庚寅, 丁/壬 → 壬寅, 戊/癸 → 甲寅.
//! - 시두법 (five rats): 子-hour stem by day stem, 甲/己 → 甲子,
//!   乙/庚 → 丙子, 丙/辛 → 戊子, 丁/壬 → 庚子, 戊/癸 → 壬子.

use serde::Serialize;

use saju_base::{CycleError, Pillar, Stem, combine};
use saju_calendar::{
    LunarCalendar, LunarDate, SolarDate, SolarTerm, equation_of_time_minutes, solar_term_instant,
    solar_term_month_at,
};
use saju_time::{CivilTime, apply_mean_solar_time};

use crate::error::EngineError;
use crate::preset::{LeapMonth, MonthBoundary, Preset, SolarTime, YearBoundary, ZiHour};

/// Gregorian year of a 甲子 year.
pub const YEAR_EPOCH: i32 = 1984;
/// JDN of a 甲子 day (1949-10-01).
pub const DAY_EPOCH_JDN: i64 = 2_433_191;

/// Month-1 (寅) stem ordinal by `year_stem % 5`.
const FIVE_TIGERS: [u8; 5] = [2, 4, 6, 8, 0];
/// 子-hour stem ordinal by `day_stem % 5`.
const FIVE_RATS: [u8; 5] = [0, 2, 4, 6, 8];

/// Year pillar of a sexagenary year number.
pub fn year_pillar(year: i32) -> Pillar {
    Pillar::from_cycle_index((year - YEAR_EPOCH) as i64)
}

/// Month pillar of month `month` (1 = 寅 .. 12 = 丑) in a year with stem `year_stem`.
pub fn month_pillar(year_stem: Stem, month: u8) -> Result<Pillar, CycleError> {
    let first = FIVE_TIGERS[(year_stem.index() % 5) as usize];
    let offset = (month as u32 + 11) % 12;
    combine(
        ((first as u32 + offset) % 10) as u8,
        ((month as u32 + 1) % 12) as u8,
    )
}

/// Day pillar of a calendar date.
pub fn day_pillar_from_date(date: SolarDate) -> Pillar {
    Pillar::from_cycle_index(date.jdn() - DAY_EPOCH_JDN)
}

/// Branch block of a clock hour: 23–00 → 子 (0) .. 21–22 → 亥 (11).
pub fn hour_branch_index(hour: u32) -> u8 {
    (((hour + 1) / 2) % 12) as u8
}

/// Hour pillar for a clock hour on a calendar day with stem `day_stem`.
///
/// 23:00–24:00 is read as the 子 hour of the next day, so the stem keeps
/// advancing past 亥: the result is the same whether or not the day
/// pillar itself has turned over at 23:00.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Result<Pillar, CycleError> {
    let anchor = FIVE_RATS[(day_stem.index() % 5) as usize] as u32;
    let block = (hour + 1) / 2;
    combine(((anchor + block) % 10) as u8, hour_branch_index(hour))
}

/// The civil instant re-read on the preset's solar clock.
pub fn corrected_instant(civil: &CivilTime, preset: &Preset) -> Result<CivilTime, EngineError> {
    civil.validate()?;
    match preset.solar_time {
        SolarTime::Civil => Ok(*civil),
        SolarTime::Mean { longitude } => Ok(apply_mean_solar_time(civil, longitude)?),
        SolarTime::Apparent { longitude } => {
            let mean = apply_mean_solar_time(civil, longitude)?;
            let eot_seconds = (equation_of_time_minutes(civil.jd_ut()) * 60.0).round() as i64;
            Ok(mean.shift_seconds(eot_seconds))
        }
    }
}

/// The calendar date whose day pillar applies to an instant.
///
/// Applies the solar-time correction first, then the 子-hour rule, so a
/// correction that crosses midnight moves the day.
pub fn effective_day_date(civil: &CivilTime, preset: &Preset) -> Result<SolarDate, EngineError> {
    let corrected = corrected_instant(civil, preset)?;
    Ok(day_date_of(&corrected, preset.zi_hour))
}

fn day_date_of(corrected: &CivilTime, zi_hour: ZiHour) -> SolarDate {
    let date = SolarDate::new(corrected.year, corrected.month, corrected.day);
    match zi_hour {
        ZiHour::DayStartsAt23 if corrected.hour >= 23 => SolarDate::from_jdn(date.jdn() + 1),
        _ => date,
    }
}

/// Everything derived on the way to the four pillars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarDerivation {
    /// Input instant.
    pub civil: CivilTime,
    /// Instant on the preset's solar clock.
    pub corrected: CivilTime,
    /// Date the day pillar is taken from.
    pub day_date: SolarDate,
    /// Lunar date of `day_date`, when the preset consulted the calendar.
    pub lunar: Option<LunarDate>,
    /// Sexagenary year after applying the year boundary.
    pub saju_year: i32,
    /// Month number (1 = 寅) after applying the month boundary.
    pub saju_month: u8,
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

/// Saju year by the 입춘 instant.
fn solar_term_year(civil: &CivilTime) -> Result<i32, EngineError> {
    let ipchun = solar_term_instant(civil.year, SolarTerm::Ipchun)?;
    Ok(if civil.jd_ut() < ipchun.jd_ut {
        civil.year - 1
    } else {
        civil.year
    })
}

/// Lunar month number with the leap-month rule applied.
fn lunar_month(lunar: &LunarDate, rule: LeapMonth) -> u8 {
    match rule {
        LeapMonth::SplitAtFifteenth if lunar.is_leap_month && lunar.day > 15 => {
            lunar.month % 12 + 1
        }
        _ => lunar.month,
    }
}

/// Derive all four pillars of a local civil instant.
pub fn derive_pillars<C: LunarCalendar>(
    civil: &CivilTime,
    preset: &Preset,
    calendar: &C,
) -> Result<PillarDerivation, EngineError> {
    preset.validate()?;
    let corrected = corrected_instant(civil, preset)?;
    let day_date = day_date_of(&corrected, preset.zi_hour);

    let lunar = if preset.needs_lunar_calendar() {
        Some(calendar.to_lunar(day_date)?)
    } else {
        None
    };

    let saju_year = match (preset.year_boundary, &lunar) {
        (YearBoundary::LunarNewYear, Some(l)) => l.year,
        (YearBoundary::SolarDate { month, day }, _) => {
            if (day_date.month, day_date.day) < (month, day) {
                day_date.year - 1
            } else {
                day_date.year
            }
        }
        _ => solar_term_year(civil)?,
    };

    let saju_month = match (preset.month_boundary, &lunar) {
        (MonthBoundary::LunarMonth, Some(l)) => lunar_month(l, preset.leap_month),
        _ => solar_term_month_at(civil.jd_ut()),
    };

    let year = year_pillar(saju_year);
    let month = month_pillar(year.stem(), saju_month)?;
    let day = day_pillar_from_date(day_date);
    let calendar_day = SolarDate::new(corrected.year, corrected.month, corrected.day);
    let hour = hour_pillar(day_pillar_from_date(calendar_day).stem(), corrected.hour)?;

    Ok(PillarDerivation {
        civil: *civil,
        corrected,
        day_date,
        lunar,
        saju_year,
        saju_month,
        year,
        month,
        day,
        hour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::STANDARD;

    fn label(p: Pillar) -> &'static str {
        p.label()
    }

    #[test]
    fn year_epoch() {
        assert_eq!(label(year_pillar(1984)), "甲子");
        assert_eq!(label(year_pillar(2023)), "癸卯");
        assert_eq!(label(year_pillar(2024)), "甲辰");
        assert_eq!(label(year_pillar(1923)), "癸亥");
    }

    #[test]
    fn five_tigers() {
        assert_eq!(label(month_pillar(Stem::Gap, 1).unwrap()), "丙寅");
        assert_eq!(label(month_pillar(Stem::Gi, 1).unwrap()), "丙寅");
        assert_eq!(label(month_pillar(Stem::Eul, 1).unwrap()), "戊寅");
        assert_eq!(label(month_pillar(Stem::Byeong, 1).unwrap()), "庚寅");
        assert_eq!(label(month_pillar(Stem::Jeong, 1).unwrap()), "壬寅");
        assert_eq!(label(month_pillar(Stem::Gye, 1).unwrap()), "甲寅");
        assert_eq!(label(month_pillar(Stem::Gap, 11).unwrap()), "丙子");
        assert_eq!(label(month_pillar(Stem::Gap, 12).unwrap()), "丁丑");
    }

    #[test]
    fn all_months_combine() {
        for s in saju_base::ALL_STEMS {
            for m in 1..=12 {
                month_pillar(s, m).unwrap();
            }
        }
    }

    #[test]
    fn day_epoch_and_known_days() {
        assert_eq!(label(day_pillar_from_date(SolarDate::new(1949, 10, 1))), "甲子");
        assert_eq!(label(day_pillar_from_date(SolarDate::new(2000, 1, 1))), "戊午");
        assert_eq!(label(day_pillar_from_date(SolarDate::new(2024, 2, 10))), "甲辰");
    }

    #[test]
    fn five_rats() {
        assert_eq!(label(hour_pillar(Stem::Gap, 0).unwrap()), "甲子");
        assert_eq!(label(hour_pillar(Stem::Gap, 12).unwrap()), "庚午");
        assert_eq!(label(hour_pillar(Stem::Eul, 0).unwrap()), "丙子");
        assert_eq!(label(hour_pillar(Stem::Mu, 12).unwrap()), "戊午");
        assert_eq!(label(hour_pillar(Stem::Gye, 22).unwrap()), "癸亥");
    }

    #[test]
    fn late_rat_hour_matches_next_day_rat_hour() {
        for s in saju_base::ALL_STEMS {
            let next = Stem::wrapping(s.index() as i64 + 1);
            assert_eq!(hour_pillar(s, 23).unwrap(), hour_pillar(next, 0).unwrap());
        }
    }

    #[test]
    fn hour_blocks() {
        assert_eq!(hour_branch_index(23), 0);
        assert_eq!(hour_branch_index(0), 0);
        assert_eq!(hour_branch_index(1), 1);
        assert_eq!(hour_branch_index(11), 6);
        assert_eq!(hour_branch_index(22), 11);
    }

    #[test]
    fn leap_month_split() {
        let early = LunarDate::new(2023, 2, 15, true);
        let late = LunarDate::new(2023, 2, 16, true);
        assert_eq!(lunar_month(&early, LeapMonth::SplitAtFifteenth), 2);
        assert_eq!(lunar_month(&late, LeapMonth::SplitAtFifteenth), 3);
        assert_eq!(lunar_month(&late, LeapMonth::AsRegular), 2);
        // A regular month is never split.
        assert_eq!(lunar_month(&LunarDate::new(2023, 5, 20, false), LeapMonth::SplitAtFifteenth), 5);
    }

    #[test]
    fn leap_twelfth_month_rolls_into_first() {
        let late = LunarDate::new(2033, 12, 16, true);
        assert_eq!(lunar_month(&late, LeapMonth::SplitAtFifteenth), 1);
        assert_eq!(lunar_month(&late, LeapMonth::AsRegular), 12);
    }

    #[test]
    fn month_stem_follows_year_pillar() {
        // After Feb 4 but before 설날: the year has turned, the lunar month is still 12.
        let t = CivilTime::new(2024, 2, 5, 12, 0, 0, 540);
        let d = derive_pillars(&t, &STANDARD, &saju_calendar::LunisolarCalendar::KOREAN).unwrap();
        assert_eq!(label(d.year), "甲辰");
        assert_eq!(d.saju_month, 12);
        assert_eq!(d.month, month_pillar(d.year.stem(), d.saju_month).unwrap());
        assert_eq!(label(d.month), "丁丑");
    }

    #[test]
    fn civil_preset_keeps_clock() {
        let t = CivilTime::new(2024, 3, 1, 0, 10, 0, 540);
        assert_eq!(corrected_instant(&t, &STANDARD).unwrap(), t);
        assert_eq!(effective_day_date(&t, &STANDARD).unwrap(), SolarDate::new(2024, 3, 1));
    }

    #[test]
    fn apparent_time_adds_equation_of_time() {
        let mut preset = STANDARD.clone();
        preset.solar_time = SolarTime::Apparent { longitude: 135.0 };
        // Early November: the sun runs about 16 minutes ahead.
        let t = CivilTime::new(2000, 11, 3, 12, 0, 0, 540);
        let c = corrected_instant(&t, &preset).unwrap();
        assert_eq!((c.hour, c.minute / 5), (12, 3));
    }
}
