use std::fs;
use std::path::PathBuf;

use super::error::WeatherError;
use super::types::{WeatherSnapshot, WeatherState};
use crate::location::Location;

/// Supplies weather for a location. `Ok(Unconfigured)` means there is no
/// source to ask; `Err` means the source exists but could not deliver.
pub trait WeatherSource {
    fn fetch(&self, location: &Location) -> Result<WeatherState, WeatherError>;
}

/// Used when no weather provider is configured.
pub struct NoWeatherSource;

impl WeatherSource for NoWeatherSource {
    fn fetch(&self, _location: &Location) -> Result<WeatherState, WeatherError> {
        Ok(WeatherState::Unconfigured)
    }
}

/// Reads a snapshot (YAML or JSON) kept up to date by an external weather fetcher.
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl WeatherSource for SnapshotFile {
    fn fetch(&self, location: &Location) -> Result<WeatherState, WeatherError> {
        log::debug!(
            "Reading weather for {} from {}",
            location.name(),
            self.path.display()
        );
        let content = fs::read_to_string(&self.path)?;
        let snapshot: WeatherSnapshot = serde_yaml::from_str(&content)?;
        snapshot.validate()?;
        Ok(WeatherState::Present(snapshot))
    }
}

/// Single fetch for a one-shot run. A failed fetch degrades to `Unconfigured`.
pub fn fetch_once(source: &dyn WeatherSource, location: &Location) -> WeatherState {
    match source.fetch(location) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("Weather unavailable for {}: {}", location.name(), e);
            WeatherState::Unconfigured
        }
    }
}
