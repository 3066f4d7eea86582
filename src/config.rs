use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::location::{presets, Location, LocationError, NamedLocation};
use crate::weather::{NoWeatherSource, SnapshotFile, WeatherSource};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid watch interval '{0}': {1}")]
    InvalidInterval(String, String),
    #[error("Invalid location: {0}")]
    Location(#[from] LocationError),
    #[error("Unknown location '{0}'")]
    UnknownLocation(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Default location by name, looked up in `locations` then the presets.
    pub location: Option<String>,
    /// Default location as `"lat,lon"`. Takes precedence over `location`.
    pub coordinates: Option<String>,
    #[serde(default)]
    pub elevation_m: f64,
    #[serde(default = "default_area_km")]
    pub area_km: f64,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub locations: Vec<NamedLocation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherConfig {
    /// Snapshot written by an external weather collaborator.
    pub snapshot_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_interval")]
    pub interval: String,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
        }
    }
}

fn default_area_km() -> f64 {
    100.0
}

fn default_interval() -> String {
    "60s".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: None,
            coordinates: None,
            elevation_m: 0.0,
            area_km: default_area_km(),
            weather: WeatherConfig::default(),
            watch: WatchConfig::default(),
            locations: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.watch_interval()?;
        Ok(config)
    }

    pub fn watch_interval(&self) -> Result<Duration, ConfigError> {
        let raw = self.watch.interval.trim();
        match humantime::parse_duration(raw) {
            Ok(d) if d.is_zero() => Err(ConfigError::InvalidInterval(
                raw.to_string(),
                "must be greater than zero".to_string(),
            )),
            Ok(d) => Ok(d),
            Err(e) => Err(ConfigError::InvalidInterval(raw.to_string(), e.to_string())),
        }
    }

    pub fn find_location(&self, name: &str) -> Option<&NamedLocation> {
        let name = name.trim();
        self.locations
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(name))
    }

    /// User-defined locations shadow presets of the same name.
    pub fn resolve_location(&self, name: &str) -> Result<Option<Location>, LocationError> {
        match self.find_location(name) {
            Some(named) => named.to_location().map(Some),
            None => Ok(presets::resolve(name)),
        }
    }

    /// The configured default, if any: `coordinates` first, then `location`.
    pub fn default_location(&self) -> Result<Option<Location>, ConfigError> {
        if let Some(coords) = &self.coordinates {
            let name = self.location.as_deref().unwrap_or(coords);
            return Ok(Some(Location::parse(name, coords, Some(self.elevation_m))?));
        }
        match &self.location {
            Some(name) => self
                .resolve_location(name)?
                .map(Some)
                .ok_or_else(|| ConfigError::UnknownLocation(name.clone())),
            None => Ok(None),
        }
    }

    pub fn weather_source(&self) -> Box<dyn WeatherSource> {
        match &self.weather.snapshot_file {
            Some(path) => Box::new(SnapshotFile::new(path.clone())),
            None => Box::new(NoWeatherSource),
        }
    }
}
