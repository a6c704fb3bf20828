//! Optional `saju.toml` configuration.
//!
//! ```toml
//! default_preset = "traditional"
//! calendar = "korean"
//!
//! [[presets]]
//! key = "busan"
//! name = "Busan mean time"
//! year_boundary = { kind = "lunar_new_year" }
//! month_boundary = { kind = "lunar_month" }
//! solar_time = { kind = "mean", longitude = 129.0 }
//! zi_hour = "day_starts_at_23"
//! leap_month = "split_at_fifteenth"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use saju_calendar::LunisolarCalendar;
use saju_engine::{BUILTIN_PRESETS, Preset};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "saju.toml";

/// Which meridian the lunar calendar is reckoned at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    #[default]
    Korean,
    Chinese,
}

impl CalendarKind {
    pub fn calendar(self) -> LunisolarCalendar {
        match self {
            Self::Korean => LunisolarCalendar::KOREAN,
            Self::Chinese => LunisolarCalendar::CHINESE,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SajuConfig {
    /// Preset used when a command gets no `--preset`.
    #[serde(default)]
    pub default_preset: Option<String>,

    #[serde(default)]
    pub calendar: CalendarKind,

    /// Custom presets, looked up before the built-ins.
    #[serde(default)]
    pub presets: Vec<Preset>,
}

impl SajuConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("failed to parse TOML config")?;
        for preset in &config.presets {
            preset.validate()?;
            if BUILTIN_PRESETS.iter().any(|b| b.key == preset.key) {
                bail!("preset `{}` shadows a built-in preset", preset.key);
            }
        }
        if let Some(key) = &config.default_preset {
            config.preset(key)?;
        }
        Ok(config)
    }

    /// Load `path`, or `saju.toml` in the working directory if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        tracing::info!(path = %path.display(), presets = config.presets.len(), "loaded config");
        Ok(config)
    }

    /// Custom or built-in preset by key (case-insensitive).
    pub fn preset(&self, key: &str) -> Result<Preset> {
        self.presets
            .iter()
            .find(|p| p.key.eq_ignore_ascii_case(key))
            .or_else(|| Preset::by_key(key))
            .cloned()
            .with_context(|| format!("unknown preset `{key}` (see `saju presets`)"))
    }

    /// The preset named on the command line, else the configured default.
    pub fn resolve_preset(&self, key: Option<&str>) -> Result<Preset> {
        match key.or(self.default_preset.as_deref()) {
            Some(k) => self.preset(k),
            None => Ok(Preset::default()),
        }
    }

    /// Built-in presets followed by custom ones.
    pub fn all_presets(&self) -> Vec<Preset> {
        BUILTIN_PRESETS
            .into_iter()
            .cloned()
            .chain(self.presets.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use saju_engine::{STANDARD, SolarTime, TRADITIONAL, ZiHour};

    use super::*;

    const BUSAN: &str = r#"
default_preset = "busan"
calendar = "chinese"

[[presets]]
key = "busan"
name = "Busan mean time"
year_boundary = { kind = "solar_date", month = 2, day = 4 }
month_boundary = { kind = "lunar_month" }
solar_time = { kind = "mean", longitude = 129.0 }
zi_hour = "day_starts_at_23"
leap_month = "as_regular"
"#;

    #[test]
    fn empty_config_uses_standard() {
        let config = SajuConfig::from_toml("").unwrap();
        assert_eq!(config.calendar, CalendarKind::Korean);
        assert_eq!(config.resolve_preset(None).unwrap(), STANDARD);
        assert_eq!(config.all_presets().len(), 3);
    }

    #[test]
    fn custom_preset_and_default() {
        let config = SajuConfig::from_toml(BUSAN).unwrap();
        assert_eq!(config.calendar.calendar(), LunisolarCalendar::CHINESE);
        let p = config.resolve_preset(None).unwrap();
        assert_eq!(p.key, "busan");
        assert_eq!(p.solar_time, SolarTime::Mean { longitude: 129.0 });
        assert_eq!(p.zi_hour, ZiHour::DayStartsAt23);
        // The command line wins over the default.
        assert_eq!(config.resolve_preset(Some("Traditional")).unwrap(), TRADITIONAL);
        assert_eq!(config.all_presets().len(), 4);
    }

    #[test]
    fn rejects_unknown_default() {
        let err = SajuConfig::from_toml(r#"default_preset = "nope""#).unwrap_err();
        assert!(format!("{err:#}").contains("unknown preset `nope`"));
    }

    #[test]
    fn rejects_invalid_preset() {
        let bad = BUSAN.replace("129.0", "300.0");
        assert!(SajuConfig::from_toml(&bad).is_err());
        let shadow = BUSAN.replace("key = \"busan\"", "key = \"standard\"");
        assert!(SajuConfig::from_toml(&shadow).is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(SajuConfig::from_toml("timezone = \"Asia/Seoul\"").is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUSAN.as_bytes()).unwrap();
        let config = SajuConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.presets.len(), 1);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SajuConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
