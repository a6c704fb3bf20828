//! Four-pillars (사주) derivation for a birth instant.
//!
//! This crate provides:
//! - Boundary-convention presets (`STANDARD`, `TRADITIONAL`, `ASTRONOMICAL`)
//! - Year, month, day and hour pillar rules (five tigers, five rats)
//! - `get_four_pillars` over any `DateAdapter` and `LunarCalendar`
//! - `analyze_birth`, chaining the chart into yongshen and recommendations
//!
//! Every entry point is a pure function of its inputs.

pub mod analysis;
pub mod error;
pub mod four_pillars;
pub mod pillar;
pub mod preset;

pub use analysis::{BirthAnalysis, ChartAnalysis, analyze_birth, analyze_chart};
pub use error::EngineError;
pub use four_pillars::{derive_four_pillars, get_four_pillars};
pub use pillar::{
    DAY_EPOCH_JDN, PillarDerivation, YEAR_EPOCH, corrected_instant, day_pillar_from_date,
    derive_pillars, effective_day_date, hour_branch_index, hour_pillar, month_pillar,
    year_pillar,
};
pub use preset::{
    ASTRONOMICAL, BUILTIN_PRESETS, LeapMonth, MonthBoundary, Preset, SEOUL_LONGITUDE, STANDARD,
    SolarTime, TRADITIONAL, YearBoundary, ZiHour,
};
