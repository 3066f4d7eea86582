use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::error::WeatherError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: DateTime<Utc>,
    pub cloud_pct: f64,
    pub conditions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub avg_cloud_pct: f64,
    pub conditions: String,
}

/// Current conditions and forecast as delivered by a weather provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Percent, 0 to 100.
    pub current_cloud_cover: f64,
    pub current_visibility_km: f64,
    pub current_conditions: String,
    #[serde(default)]
    pub forecast_24h: Vec<HourlyForecast>,
    #[serde(default)]
    pub forecast_daily: Vec<DailyForecast>,
    pub last_updated: DateTime<Utc>,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub is_daylight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum CloudCategory {
    Clear,
    #[strum(to_string = "Partly cloudy")]
    PartlyCloudy,
    #[strum(to_string = "Mostly cloudy")]
    MostlyCloudy,
    Cloudy,
    Overcast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum ForecastTrend {
    Improving,
    Worsening,
    Stable,
}

/// Hourly entries averaged when judging the short-term trend.
const TREND_WINDOW: usize = 3;
const TREND_THRESHOLD_PCT: f64 = 20.0;

impl WeatherSnapshot {
    pub fn validate(&self) -> Result<(), WeatherError> {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.current_cloud_cover) {
            return Err(WeatherError::InvalidSnapshot(format!(
                "cloud cover {} outside 0-100",
                self.current_cloud_cover
            )));
        }
        if let Some(f) = self.forecast_24h.iter().find(|f| !in_range(f.cloud_pct)) {
            return Err(WeatherError::InvalidSnapshot(format!(
                "forecast cloud cover {} at {} outside 0-100",
                f.cloud_pct, f.time
            )));
        }
        Ok(())
    }

    pub fn cloud_category(&self) -> CloudCategory {
        match self.current_cloud_cover {
            c if c < 20.0 => CloudCategory::Clear,
            c if c < 40.0 => CloudCategory::PartlyCloudy,
            c if c < 60.0 => CloudCategory::MostlyCloudy,
            c if c < 80.0 => CloudCategory::Cloudy,
            _ => CloudCategory::Overcast,
        }
    }

    pub fn is_good_for_optical(&self) -> bool {
        self.current_cloud_cover < 30.0 && self.is_daylight
    }

    pub fn is_marginal_for_optical(&self) -> bool {
        (30.0..70.0).contains(&self.current_cloud_cover) && self.is_daylight
    }

    #[allow(dead_code)]
    pub fn is_poor_for_optical(&self) -> bool {
        self.current_cloud_cover >= 70.0 || !self.is_daylight
    }

    /// Looser bound used by the availability overview: an optical capture
    /// is still worth attempting below 60% cloud in daylight.
    pub fn is_usable_for_optical(&self) -> bool {
        self.current_cloud_cover < 60.0 && self.is_daylight
    }

    /// Compares the next few forecast hours against current cloud cover.
    /// `None` without forecast data.
    pub fn forecast_trend(&self) -> Option<ForecastTrend> {
        let window: Vec<f64> = self
            .forecast_24h
            .iter()
            .take(TREND_WINDOW)
            .map(|f| f.cloud_pct)
            .collect();
        if window.is_empty() {
            return None;
        }
        let avg = window.iter().sum::<f64>() / window.len() as f64;

        Some(if avg < self.current_cloud_cover - TREND_THRESHOLD_PCT {
            ForecastTrend::Improving
        } else if avg > self.current_cloud_cover + TREND_THRESHOLD_PCT {
            ForecastTrend::Worsening
        } else {
            ForecastTrend::Stable
        })
    }
}

/// Weather as seen by the rest of the system. `Unconfigured` is a normal
/// state (no source, or the source failed) and never stands in for clear sky.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherState {
    Present(WeatherSnapshot),
    Unconfigured,
}

impl WeatherState {
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            WeatherState::Present(snapshot) => Some(snapshot),
            WeatherState::Unconfigured => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{snapshot, with_forecast};
    use super::*;

    #[test]
    fn cloud_categories() {
        assert_eq!(snapshot(0.0, true).cloud_category(), CloudCategory::Clear);
        assert_eq!(snapshot(39.9, true).cloud_category(), CloudCategory::PartlyCloudy);
        assert_eq!(snapshot(40.0, true).cloud_category(), CloudCategory::MostlyCloudy);
        assert_eq!(snapshot(79.0, true).cloud_category(), CloudCategory::Cloudy);
        assert_eq!(snapshot(80.0, true).cloud_category(), CloudCategory::Overcast);
        assert_eq!(CloudCategory::PartlyCloudy.to_string(), "Partly cloudy");
    }

    #[test]
    fn optical_conditions() {
        assert!(snapshot(10.0, true).is_good_for_optical());
        assert!(!snapshot(10.0, false).is_good_for_optical());
        assert!(snapshot(10.0, false).is_poor_for_optical());
        assert!(snapshot(50.0, true).is_marginal_for_optical());
        assert!(snapshot(70.0, true).is_poor_for_optical());
        assert!(!snapshot(70.0, true).is_marginal_for_optical());
        assert!(snapshot(59.0, true).is_usable_for_optical());
        assert!(!snapshot(60.0, true).is_usable_for_optical());
        assert!(!snapshot(10.0, false).is_usable_for_optical());
    }

    #[test]
    fn trend_needs_forecast() {
        assert_eq!(snapshot(50.0, true).forecast_trend(), None);
    }

    #[test]
    fn trend_uses_first_three_hours() {
        let improving = with_forecast(snapshot(80.0, true), &[40.0, 50.0, 30.0, 100.0]);
        assert_eq!(improving.forecast_trend(), Some(ForecastTrend::Improving));

        let worsening = with_forecast(snapshot(10.0, true), &[60.0, 40.0]);
        assert_eq!(worsening.forecast_trend(), Some(ForecastTrend::Worsening));

        let stable = with_forecast(snapshot(50.0, true), &[30.0, 70.0, 50.0]);
        assert_eq!(stable.forecast_trend(), Some(ForecastTrend::Stable));
    }

    #[test]
    fn validation_rejects_out_of_range_cloud() {
        assert!(snapshot(100.0, true).validate().is_ok());
        assert!(snapshot(100.5, true).validate().is_err());
        assert!(with_forecast(snapshot(10.0, true), &[-1.0]).validate().is_err());
    }

    #[test]
    fn state_exposes_snapshot_only_when_present() {
        assert!(WeatherState::Unconfigured.snapshot().is_none());
        let present = WeatherState::Present(snapshot(5.0, true));
        assert_eq!(present.snapshot().unwrap().current_cloud_cover, 5.0);
    }
}
