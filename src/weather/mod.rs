mod cache;
mod error;
mod source;
mod types;

pub use cache::WeatherCache;
pub use source::{NoWeatherSource, SnapshotFile, WeatherSource};
pub use types::{ForecastTrend, WeatherSnapshot, WeatherState};

#[cfg(test)]
pub(crate) use types::fixtures;
