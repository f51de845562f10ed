use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::PathBuf, str::FromStr};
use thiserror::Error;

pub const API_KEY_VAR: &str = "FORECAST_API_KEY";
pub const BASE_URL_VAR: &str = "FORECAST_BASE_URL";
pub const UNITS_VAR: &str = "FORECAST_UNITS";
pub const LOG_FILE_VAR: &str = "FORECAST_LOG_FILE";

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_LOG_FILE: &str = "app.log";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "No API key configured.\n\
         Hint: export FORECAST_API_KEY=<your OpenWeather API key> and run again."
    )]
    MissingCredential,

    #[error("Unknown units '{0}'. Supported units: imperial, metric, standard.")]
    UnknownUnits(String),
}

/// Measurement system requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Imperial,
    Metric,
    Standard,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Imperial => "imperial",
            Units::Metric => "metric",
            Units::Standard => "standard",
        }
    }

    /// Suffix shown next to the temperature column header.
    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            Units::Imperial => "F",
            Units::Metric => "C",
            Units::Standard => "K",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "imperial" => Ok(Units::Imperial),
            "metric" => Ok(Units::Metric),
            "standard" => Ok(Units::Standard),
            _ => Err(ConfigError::UnknownUnits(value.to_string())),
        }
    }
}

/// API key for the forecast provider.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Runtime configuration: optional TOML file, then environment overrides.
///
/// Example TOML:
/// api_key = "..."
/// units = "metric"
/// log_file = "/tmp/forecast.log"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub units: Units,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            units: Units::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Load config from disk (if present) and apply process environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_file()?;
        cfg.apply_env_with(|name| std::env::var(name).ok())?;
        Ok(cfg)
    }

    fn load_file() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Overlay values from an environment-like lookup. Empty values are ignored.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(API_KEY_VAR) {
            self.api_key = Some(key);
        }
        if let Some(url) = get(BASE_URL_VAR) {
            self.base_url = url;
        }
        if let Some(units) = get(UNITS_VAR) {
            self.units = units.parse()?;
        }
        if let Some(path) = get(LOG_FILE_VAR) {
            self.log_file = PathBuf::from(path);
        }

        Ok(())
    }

    /// Pre-flight check: the API key must be present and non-blank.
    pub fn credential(&self) -> Result<Credential, ConfigError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| Credential(key.to_string()))
            .ok_or(ConfigError::MissingCredential)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
