//! Solar terms and the lunisolar calendar for the saju engine.
//!
//! This crate provides:
//! - ΔT, apparent solar longitude, equation of time and true new moons
//! - The 24 solar terms (절기) and their instants
//! - The `LunarCalendar` conversion trait and `LunisolarCalendar`, an
//!   astronomical Korean (UTC+9) / Chinese (UTC+8) implementation
//!   covering 1901–2099
//!
//! All implementations are clean-room, from Meeus "Astronomical Algorithms"
//! and the Espenak–Meeus ΔT polynomials.

pub mod delta_t;
pub mod error;
pub mod lunar_date;
pub mod lunisolar;
pub mod new_moon;
pub mod solar_term;
pub mod sun;

pub use delta_t::{delta_t_seconds, tt_to_ut, ut_to_tt};
pub use error::CalendarError;
pub use lunar_date::{LunarCalendar, LunarDate, LunarMonthSpan, SolarDate};
pub use lunisolar::{LunisolarCalendar, MAX_YEAR, MIN_YEAR};
pub use new_moon::{SYNODIC_MONTH, new_moon_jde, new_moon_ut};
pub use solar_term::{
    ALL_SOLAR_TERMS, SolarTerm, SolarTermEvent, principal_sector_at, solar_term_at,
    solar_term_instant, solar_term_month_at, solar_terms_of_year,
};
pub use sun::{apparent_longitude_deg, apparent_longitude_ut_deg, equation_of_time_minutes};
