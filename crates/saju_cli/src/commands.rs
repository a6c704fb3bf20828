//! Subcommand bodies. Each returns the text to print.

use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use saju_base::{ALL_ELEMENTS, FourPillars};
use saju_calendar::{LunarCalendar, LunarDate, SolarDate, solar_terms_of_year};
use saju_engine::{
    ChartAnalysis, PillarDerivation, Preset, analyze_birth, analyze_chart, day_pillar_from_date,
    derive_four_pillars,
};
use saju_time::ChronoAdapter;

use crate::cli::{AnalyzeArgs, InstantArgs};
use crate::config::SajuConfig;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a local date-time; `offset` applies when the text carries none.
pub fn parse_instant(text: &str, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M%:z") {
        return Ok(dt);
    }
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
        .with_context(|| format!("invalid date `{text}` (expected YYYY-MM-DDThh:mm[:ss])"))?;
    naive
        .and_local_timezone(offset)
        .single()
        .with_context(|| format!("`{text}` does not exist at {offset}"))
}

/// Parse four pillar labels separated by spaces or commas.
pub fn parse_pillars(text: &str) -> Result<FourPillars> {
    let parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    let Ok(labels) = <[&str; 4]>::try_from(parts.as_slice()) else {
        bail!("expected four pillars (year month day hour), got {}", parts.len());
    };
    Ok(FourPillars::from_labels(labels)?)
}

fn parse_solar_date(text: &str) -> Result<SolarDate> {
    let d = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date `{text}` (expected YYYY-MM-DD)"))?;
    Ok(SolarDate::new(d.year(), d.month(), d.day()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

// ---------------------------------------------------------------------------
// pillars / analyze
// ---------------------------------------------------------------------------

fn derive(config: &SajuConfig, args: &InstantArgs) -> Result<(Preset, PillarDerivation)> {
    let preset = config.resolve_preset(args.preset.as_deref())?;
    let instant = parse_instant(&args.date, args.offset)?;
    debug!(preset = %preset.key, %instant, "deriving pillars");
    let started = Instant::now();
    let derivation = derive_four_pillars(
        &ChronoAdapter::<FixedOffset>::new(),
        &instant,
        &preset,
        &config.calendar.calendar(),
    )
    .with_context(|| format!("cannot chart {instant} under preset `{}`", preset.key))?;
    debug!(elapsed_us = started.elapsed().as_micros() as u64, "pillars derived");
    Ok((preset, derivation))
}

pub fn pillars(config: &SajuConfig, args: &InstantArgs, json: bool) -> Result<String> {
    let (preset, d) = derive(config, args)?;
    if json {
        return to_json(&d);
    }
    Ok(render_derivation(&preset, &d))
}

pub fn analyze(config: &SajuConfig, args: &AnalyzeArgs, json: bool) -> Result<String> {
    if let Some(labels) = &args.pillars {
        let chart = analyze_chart(parse_pillars(labels)?);
        return if json {
            to_json(&chart)
        } else {
            Ok(render_chart(&chart))
        };
    }
    let Some(date) = &args.date else {
        bail!("either --date or --pillars is required");
    };
    let preset = config.resolve_preset(args.preset.as_deref())?;
    let instant = parse_instant(date, args.offset)?;
    debug!(preset = %preset.key, %instant, "analyzing birth");
    let analysis = analyze_birth(
        &ChronoAdapter::<FixedOffset>::new(),
        &instant,
        &config.calendar.calendar(),
        &preset,
    )
    .with_context(|| format!("cannot chart {instant} under preset `{}`", preset.key))?;
    if json {
        return to_json(&analysis);
    }
    let chart = ChartAnalysis {
        pillars: analysis.pillars,
        ten_gods: analysis.ten_gods,
        yongshen: analysis.yongshen,
        recommendations: analysis.recommendations,
    };
    Ok(format!(
        "{}\n{}",
        render_derivation(&preset, &analysis.derivation),
        render_chart(&chart)
    ))
}

fn render_derivation(preset: &Preset, d: &PillarDerivation) -> String {
    let mut lines = vec![
        format!("Preset:     {} ({})", preset.key, preset.name),
        format!("Input:      {}", d.civil),
    ];
    if d.corrected != d.civil {
        lines.push(format!("Solar time: {}", d.corrected));
    }
    lines.push(format!("Day date:   {}", d.day_date));
    if let Some(lunar) = &d.lunar {
        lines.push(format!("Lunar:      {lunar}"));
    }
    lines.push(format!(
        "Saju year:  {}  month {}",
        d.saju_year, d.saju_month
    ));
    for (name, p) in [("Year", d.year), ("Month", d.month), ("Day", d.day), ("Hour", d.hour)] {
        lines.push(format!("{name:<6}      {} ({})", p.label(), p.hangul()));
    }
    lines.join("\n")
}

fn render_chart(chart: &ChartAnalysis) -> String {
    let y = &chart.yongshen;
    let profile = &y.all_elements;
    let mut lines = vec![
        format!("Pillars:    {}", chart.pillars),
        format!(
            "Ten gods:   {}",
            chart.ten_gods.map(|g| g.hangul()).join(" ")
        ),
        format!("Method:     {}", y.method.label),
        format!("Yong-shen:  {}", y.primary.label),
    ];
    if let Some(s) = &y.secondary {
        lines.push(format!("Secondary:  {}", s.label));
    }
    if let Some(k) = y.ki_shen() {
        lines.push(format!("Ki-shen:    {}", k.label()));
    }
    if let Some(j) = &y.johu_adjustment {
        lines.push(format!("{}:  {}", j.label, j.note));
    }
    lines.push("Elements:".to_string());
    for e in ALL_ELEMENTS {
        let s = profile.get(e);
        lines.push(format!(
            "  {}  raw {:>3} × {:>3}% = {:>5}  {:>5.1}%",
            e.label(),
            s.raw,
            s.seasonal_percent,
            s.score,
            profile.share(e) * 100.0
        ));
    }
    lines.push("Reasoning:".to_string());
    lines.extend(y.reasoning.iter().map(|r| format!("  - {r}")));
    let rec = &chart.recommendations;
    lines.push(format!("Colors:     {}", rec.colors.join(", ")));
    lines.push(format!("Directions: {}", rec.directions.join(", ")));
    lines.push(format!(
        "Numbers:    {}",
        rec.numbers
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    ));
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// lunar / solar / terms / presets
// ---------------------------------------------------------------------------

pub fn lunar(config: &SajuConfig, date: &str, json: bool) -> Result<String> {
    let solar = parse_solar_date(date)?;
    solar.validate()?;
    let lunar = config.calendar.calendar().to_lunar(solar)?;
    let day = day_pillar_from_date(solar);
    if json {
        return to_json(&json!({ "solar": solar, "lunar": lunar, "dayPillar": day }));
    }
    Ok(format!("{solar} → 음력 {lunar}  ({} 일)", day.label()))
}

pub fn solar(
    config: &SajuConfig,
    year: i32,
    month: u8,
    day: u8,
    leap: bool,
    json: bool,
) -> Result<String> {
    let lunar = LunarDate::new(year, month, day, leap);
    let solar = config.calendar.calendar().to_solar(lunar)?;
    if json {
        return to_json(&json!({ "lunar": lunar, "solar": solar }));
    }
    Ok(format!("음력 {lunar} → {solar}"))
}

pub fn terms(year: i32, offset: FixedOffset, json: bool) -> Result<String> {
    let offset_minutes = offset.local_minus_utc() / 60;
    let events = solar_terms_of_year(year)?;
    if json {
        let rows: Vec<_> = events
            .iter()
            .map(|e| {
                json!({
                    "term": e.term,
                    "name": e.term.name(),
                    "hanja": e.term.hanja(),
                    "longitude": e.term.longitude_deg(),
                    "jdUt": e.jd_ut,
                    "local": e.civil(offset_minutes).to_string(),
                })
            })
            .collect();
        return to_json(&rows);
    }
    Ok(events
        .iter()
        .map(|e| {
            format!(
                "{} {}  {:>5.1}°  {}",
                e.term.name(),
                e.term.hanja(),
                e.term.longitude_deg(),
                e.civil(offset_minutes)
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn presets(config: &SajuConfig, json: bool) -> Result<String> {
    let all = config.all_presets();
    if json {
        return to_json(&all);
    }
    let default_key = config.resolve_preset(None)?.key;
    Ok(all
        .iter()
        .map(|p| {
            let marker = if p.key == default_key { "*" } else { " " };
            format!(
                "{marker} {:<14} {}\n    year {:?}, month {:?}, clock {:?}, {:?}, leap {:?}",
                p.key, p.name, p.year_boundary, p.month_boundary, p.solar_time, p.zi_hour, p.leap_month
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kst() -> FixedOffset {
        FixedOffset::east_opt(9 * 3600).unwrap()
    }

    fn instant_args(date: &str, preset: Option<&str>) -> InstantArgs {
        InstantArgs {
            date: date.to_string(),
            offset: kst(),
            preset: preset.map(str::to_string),
        }
    }

    #[test]
    fn instant_formats() {
        let a = parse_instant("2024-02-10T12:00", kst()).unwrap();
        let b = parse_instant("2024-02-10 12:00:00", kst()).unwrap();
        let c = parse_instant("2024-02-10T03:00:00Z", kst()).unwrap();
        let d = parse_instant("2024-02-10T12:00+09:00", kst()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a, d);
        assert_eq!(*a.offset(), kst());
        assert!(parse_instant("2024-02-30T12:00", kst()).is_err());
        assert!(parse_instant("yesterday", kst()).is_err());
    }

    #[test]
    fn pillar_labels() {
        let p = parse_pillars("甲子, 丙寅 甲辰  을해").unwrap();
        assert_eq!(p.labels(), ["甲子", "丙寅", "甲辰", "乙亥"]);
        assert!(parse_pillars("甲子 丙寅 甲辰").is_err());
        assert!(parse_pillars("甲丑 丙寅 甲辰 乙亥").is_err());
    }

    #[test]
    fn pillars_text_and_json() {
        let config = SajuConfig::default();
        let args = instant_args("2024-02-10T12:00", None);
        let text = pillars(&config, &args, false).unwrap();
        assert!(text.contains("Year        甲辰 (갑진)"), "{text}");
        assert!(text.contains("Hour        庚午 (경오)"), "{text}");
        assert!(!text.contains("Solar time"));

        let value: serde_json::Value =
            serde_json::from_str(&pillars(&config, &args, true).unwrap()).unwrap();
        assert_eq!(value["day"], "甲辰");
        assert_eq!(value["saju_month"], 1);
    }

    #[test]
    fn traditional_shows_solar_time() {
        let config = SajuConfig::default();
        let args = instant_args("2024-02-09T23:30", Some("traditional"));
        let text = pillars(&config, &args, false).unwrap();
        assert!(text.contains("Solar time: 2024-02-09T22:58"), "{text}");
        assert!(text.contains("Hour        癸亥"), "{text}");
    }

    #[test]
    fn unknown_preset() {
        let config = SajuConfig::default();
        let err = pillars(&config, &instant_args("2024-02-10T12:00", Some("x")), false).unwrap_err();
        assert!(err.to_string().contains("unknown preset"));
    }

    #[test]
    fn analyze_by_labels() {
        let config = SajuConfig::default();
        let args = AnalyzeArgs {
            date: None,
            pillars: Some("甲子 丙寅 甲辰 乙亥".to_string()),
            offset: kst(),
            preset: None,
        };
        let text = analyze(&config, &args, false).unwrap();
        assert!(text.contains("Yong-shen:  금(金)"), "{text}");
        assert!(text.contains("Ki-shen:    화(火)"), "{text}");
        assert!(text.contains("Ten gods:   비견 식신 비견 겁재"), "{text}");

        let value: serde_json::Value =
            serde_json::from_str(&analyze(&config, &args, true).unwrap()).unwrap();
        assert_eq!(value["yongshen"]["primary"]["key"], "metal");
    }

    #[test]
    fn analyze_by_date_includes_derivation() {
        let config = SajuConfig::default();
        let args = AnalyzeArgs {
            date: Some("2000-01-01T12:00".to_string()),
            pillars: None,
            offset: kst(),
            preset: Some("standard".to_string()),
        };
        let text = analyze(&config, &args, false).unwrap();
        assert!(text.contains("Pillars:    己卯 丙子 戊午 戊午"), "{text}");
        assert!(text.contains("Lunar:      1999-11-25"), "{text}");
    }

    #[test]
    fn lunar_and_solar_conversions() {
        let config = SajuConfig::default();
        assert_eq!(
            lunar(&config, "2024-02-10", false).unwrap(),
            "2024-02-10 → 음력 2024-01-01  (甲辰 일)"
        );
        assert_eq!(
            solar(&config, 2023, 2, 1, true, false).unwrap(),
            "음력 2023-윤02-01 → 2023-03-22"
        );
        assert!(lunar(&config, "2023-02-29", false).is_err());
        assert!(solar(&config, 2024, 5, 1, true, false).is_err());
    }

    #[test]
    fn terms_listing() {
        let text = terms(2024, kst(), false).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 24);
        assert!(lines[0].starts_with("소한 小寒"));
        assert!(lines[2].starts_with("입춘 立春"));
        assert!(lines[2].contains("2024-02-04T17:2"), "{}", lines[2]);
        assert!(terms(1700, kst(), false).is_err());
    }

    #[test]
    fn presets_listing_marks_default() {
        let config = SajuConfig::default();
        let text = presets(&config, false).unwrap();
        assert!(text.starts_with("* standard"));
        let value: serde_json::Value =
            serde_json::from_str(&presets(&config, true).unwrap()).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
    }
}
