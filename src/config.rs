use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use namedays_calendar::MAX_WINDOW_RADIUS;

/// Top-level lv-namedays configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Dataset settings.
    #[serde(default)]
    pub data: DataToml,

    /// Week rendering settings.
    #[serde(default)]
    pub week: WeekToml,

    /// iCalendar export settings.
    #[serde(default)]
    pub ics: IcsToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeekToml {
    #[serde(default = "default_radius")]
    pub radius: u32,
}

impl Default for WeekToml {
    fn default() -> Self {
        Self {
            radius: default_radius(),
        }
    }
}

fn default_radius() -> u32 {
    3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IcsToml {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default = "default_ics_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub url: Option<String>,
}

impl Default for IcsToml {
    fn default() -> Self {
        Self {
            year: None,
            output: default_ics_output(),
            url: None,
        }
    }
}

fn default_ics_output() -> PathBuf {
    PathBuf::from("latvian_namedays.ics")
}

impl AppConfig {
    /// Loads the configuration file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::parse(&toml_str)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn parse(toml_str: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_str).context("failed to parse TOML config")?;
        if config.week.radius > MAX_WINDOW_RADIUS {
            bail!(
                "week radius {} is too large (max {MAX_WINDOW_RADIUS})",
                config.week.radius
            );
        }
        Ok(config)
    }
}
