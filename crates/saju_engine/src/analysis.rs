//! One-shot analysis: pillars, useful element and recommendations.

use serde::Serialize;

use saju_base::{
    ElementRecommendations, FourPillars, TenGod, YongShenResult, analyze_yongshen,
    get_element_recommendations,
};
use saju_calendar::LunarCalendar;
use saju_time::DateAdapter;

use crate::error::EngineError;
use crate::four_pillars::derive_four_pillars;
use crate::pillar::PillarDerivation;
use crate::preset::Preset;

/// Full result for one birth instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthAnalysis {
    pub preset: String,
    pub derivation: PillarDerivation,
    pub pillars: FourPillars,
    /// Ten god of each heavenly stem (year, month, day, hour) to the Day Master.
    pub ten_gods: [TenGod; 4],
    pub yongshen: YongShenResult,
    pub recommendations: ElementRecommendations,
}

/// Analysis of an already assembled chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAnalysis {
    pub pillars: FourPillars,
    pub ten_gods: [TenGod; 4],
    pub yongshen: YongShenResult,
    pub recommendations: ElementRecommendations,
}

/// Resolve the useful element and recommendations for a chart.
pub fn analyze_chart(pillars: FourPillars) -> ChartAnalysis {
    let yongshen = analyze_yongshen(&pillars);
    let recommendations = get_element_recommendations(&yongshen);
    let dm = pillars.day_master();
    ChartAnalysis {
        pillars,
        ten_gods: pillars.stems().map(|s| TenGod::of(dm, s)),
        yongshen,
        recommendations,
    }
}

/// Pillars → yongshen → recommendations for a birth instant.
pub fn analyze_birth<A, C>(
    adapter: &A,
    instant: &A::Instant,
    calendar: &C,
    preset: &Preset,
) -> Result<BirthAnalysis, EngineError>
where
    A: DateAdapter,
    C: LunarCalendar,
{
    let derivation = derive_four_pillars(adapter, instant, preset, calendar)?;
    let pillars = FourPillars::new(
        derivation.year,
        derivation.month,
        derivation.day,
        derivation.hour,
    );
    let chart = analyze_chart(pillars);
    Ok(BirthAnalysis {
        preset: preset.key.to_string(),
        derivation,
        pillars: chart.pillars,
        ten_gods: chart.ten_gods,
        yongshen: chart.yongshen,
        recommendations: chart.recommendations,
    })
}
