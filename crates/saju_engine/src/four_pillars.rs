//! Assembling a chart from a caller's date type.

use saju_base::FourPillars;
use saju_calendar::LunarCalendar;
use saju_time::DateAdapter;

use crate::error::EngineError;
use crate::pillar::{PillarDerivation, derive_pillars};
use crate::preset::Preset;

/// Resolve an instant through its adapter and derive every pillar.
pub fn derive_four_pillars<A, C>(
    adapter: &A,
    instant: &A::Instant,
    preset: &Preset,
    calendar: &C,
) -> Result<PillarDerivation, EngineError>
where
    A: DateAdapter,
    C: LunarCalendar,
{
    let civil = adapter.to_civil(instant)?;
    derive_pillars(&civil, preset, calendar)
}

/// The four pillars of a birth instant under a preset.
///
/// Fails on the first error from the adapter, the calendar or the cycle
/// tables; no partial chart is returned.
pub fn get_four_pillars<A, C>(
    adapter: &A,
    instant: &A::Instant,
    preset: &Preset,
    calendar: &C,
) -> Result<FourPillars, EngineError>
where
    A: DateAdapter,
    C: LunarCalendar,
{
    let d = derive_four_pillars(adapter, instant, preset, calendar)?;
    Ok(FourPillars::new(d.year, d.month, d.day, d.hour))
}
