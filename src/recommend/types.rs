use serde::Serialize;
use strum_macros::Display;

use super::factor::ScoreFactor;
use crate::catalog::Provider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Quality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Quality {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Quality::Excellent
        } else if score >= 60.0 {
            Quality::Good
        } else if score >= 40.0 {
            Quality::Fair
        } else {
            Quality::Poor
        }
    }
}

/// Optional user requirements. `None` disables the corresponding check.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Constraints {
    /// USD per image.
    pub max_budget: Option<f64>,
    /// Coarsest acceptable resolution in meters.
    pub min_resolution: Option<f64>,
    /// Hours until imagery must be in hand.
    pub urgency_hours: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub satellite_name: String,
    pub provider: Provider,
    /// Clamped to 0..=100.
    pub score: f64,
    pub reasons: Vec<ScoreFactor>,
    pub estimated_quality: Quality,
    /// `"FREE"` or `"$N"`.
    pub cost: String,
    pub cost_usd: f64,
    pub eta_hours: f64,
    pub weather_suitable: bool,
}

impl Recommendation {
    pub fn is_free(&self) -> bool {
        self.cost_usd == 0.0
    }

    pub fn is_all_weather(&self) -> bool {
        self.reasons.contains(&ScoreFactor::AllWeather)
    }
}

/// A weather-independent option offered when no weather data exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackOption {
    pub satellite_name: String,
    pub provider: Provider,
    pub resolution_m: f64,
    pub cost: String,
    pub cost_usd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "options", rename_all = "snake_case")]
pub enum RecommendationOutcome {
    /// Scored against current weather, best first.
    Ranked(Vec<Recommendation>),
    /// No weather: only options that do not depend on it.
    WeatherIndependentOnly(Vec<FallbackOption>),
}
