use crate::error::AppError;
use crate::pool::WorkerPool;
use chrono::Datelike;
use serde::Deserialize;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Accepted range for `reference_year`.
pub const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

/// Execution strategies the driver knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Serial,
    Parallel,
    Rayon,
}

impl Mode {
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Serial => "Serial execution",
            Mode::Parallel => "Parallel execution",
            Mode::Rayon => "Rayon execution",
        }
    }
}

/// Settings as they appear in a TOML file; every key is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    delay_ms: Option<u64>,
    workers: Option<usize>,
    reference_year: Option<i32>,
    quiet: Option<bool>,
    modes: Option<Vec<Mode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub delay: Duration,
    pub workers: usize,
    pub reference_year: i32,
    pub quiet: bool,
    pub modes: Vec<Mode>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            workers: WorkerPool::default().size(),
            reference_year: current_year(),
            quiet: false,
            modes: vec![Mode::Serial, Mode::Parallel],
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, AppError> {
        let raw: RawConfig = toml::from_str(text)?;
        let defaults = Config::default();

        let workers = raw.workers.unwrap_or(defaults.workers);
        if workers == 0 {
            return Err(AppError::InvalidConfig(
                "workers must be at least 1".to_string(),
            ));
        }

        let reference_year = raw.reference_year.unwrap_or(defaults.reference_year);
        if !YEAR_RANGE.contains(&reference_year) {
            return Err(AppError::InvalidConfig(format!(
                "reference_year {} is outside {}..={}",
                reference_year,
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            )));
        }

        Ok(Config {
            delay: raw
                .delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.delay),
            workers,
            reference_year,
            quiet: raw.quiet.unwrap_or(defaults.quiet),
            modes: raw.modes.unwrap_or(defaults.modes),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}

/// Year on the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
