use serde::Serialize;
use strum_macros::Display;

use super::types::Recommendation;
use crate::weather::{ForecastTrend, WeatherSnapshot};

/// Upper bound (exclusive, USD) for the budget pick.
pub const BUDGET_LIMIT_USD: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum OpticalOutlook {
    Excellent,
    Moderate,
    Poor,
}

impl OpticalOutlook {
    pub fn from_cloud_cover(cloud_pct: f64) -> Self {
        if cloud_pct < 30.0 {
            OpticalOutlook::Excellent
        } else if cloud_pct < 70.0 {
            OpticalOutlook::Moderate
        } else {
            OpticalOutlook::Poor
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            OpticalOutlook::Excellent => "Use cheap optical satellites today",
            OpticalOutlook::Moderate => "High-res optical or SAR for guaranteed results",
            OpticalOutlook::Poor => "Use SAR satellites only",
        }
    }
}

/// Picks for common scenarios, drawn from a ranked recommendation list.
///
/// All picks except `best_all_weather` only consider weather-suitable
/// entries. Each pick borrows from the ranked list.
#[derive(Debug, Clone, Serialize)]
pub struct Advice<'a> {
    pub outlook: OpticalOutlook,
    pub best_free: Option<&'a Recommendation>,
    pub best_budget: Option<&'a Recommendation>,
    pub best_quality: Option<&'a Recommendation>,
    pub fastest: Option<&'a Recommendation>,
    pub best_all_weather: Option<&'a Recommendation>,
    pub trend: Option<ForecastTrend>,
}

impl<'a> Advice<'a> {
    /// `ranked` must already be sorted best first.
    pub fn from_ranked(weather: &WeatherSnapshot, ranked: &'a [Recommendation]) -> Self {
        let suitable = move || ranked.iter().filter(|r| r.weather_suitable);

        Advice {
            outlook: OpticalOutlook::from_cloud_cover(weather.current_cloud_cover),
            best_free: suitable().find(|r| r.is_free()),
            best_budget: suitable().find(|r| !r.is_free() && r.cost_usd < BUDGET_LIMIT_USD),
            best_quality: suitable().next(),
            // Ties resolve to the higher-ranked entry
            fastest: suitable().min_by(|a, b| a.eta_hours.total_cmp(&b.eta_hours)),
            best_all_weather: ranked.iter().find(|r| r.is_all_weather()),
            trend: weather.forecast_trend(),
        }
    }
}

impl ForecastTrend {
    pub fn guidance(&self) -> &'static str {
        match self {
            ForecastTrend::Improving => "Weather improving: consider waiting for optical satellites",
            ForecastTrend::Worsening => "Weather worsening: book SAR satellites now",
            ForecastTrend::Stable => "Weather stable: current recommendations remain valid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::recommend::scorer::rank;
    use crate::recommend::Constraints;
    use crate::weather::fixtures::{snapshot, with_forecast};

    #[test]
    fn outlook_thresholds() {
        assert_eq!(OpticalOutlook::from_cloud_cover(29.9), OpticalOutlook::Excellent);
        assert_eq!(OpticalOutlook::from_cloud_cover(30.0), OpticalOutlook::Moderate);
        assert_eq!(OpticalOutlook::from_cloud_cover(69.9), OpticalOutlook::Moderate);
        assert_eq!(OpticalOutlook::from_cloud_cover(70.0), OpticalOutlook::Poor);
    }

    #[test]
    fn clear_day_picks() {
        let weather = snapshot(5.0, true);
        let ranked = rank(Catalog::builtin(), &weather, 100.0, &Constraints::default());
        let advice = Advice::from_ranked(&weather, &ranked);

        assert_eq!(advice.outlook, OpticalOutlook::Excellent);
        assert_eq!(advice.best_free.unwrap().satellite_name, "Sentinel-1");
        // PlanetScope $180 is the first suitable paid entry under $500
        assert_eq!(advice.best_budget.unwrap().satellite_name, "PlanetScope");
        assert_eq!(advice.best_quality.unwrap().satellite_name, ranked[0].satellite_name);
        // BlackSky and Capella tie on 26h; BlackSky ranks first
        let fastest = advice.fastest.unwrap();
        assert_eq!(fastest.eta_hours, 26.0);
        assert_eq!(fastest.satellite_name, "BlackSky");
        assert_eq!(advice.best_all_weather.unwrap().satellite_name, "Sentinel-1");
        assert_eq!(advice.trend, None);
    }

    #[test]
    fn overcast_night_leaves_only_sar() {
        let weather = with_forecast(snapshot(95.0, false), &[90.0, 95.0, 100.0]);
        let ranked = rank(Catalog::builtin(), &weather, 100.0, &Constraints::default());
        let advice = Advice::from_ranked(&weather, &ranked);

        assert_eq!(advice.outlook, OpticalOutlook::Poor);
        assert!(advice.best_budget.is_none());
        assert!(advice.best_quality.unwrap().is_all_weather());
        assert!(advice.fastest.unwrap().is_all_weather());
        assert_eq!(advice.trend, Some(ForecastTrend::Stable));
    }

    #[test]
    fn empty_ranking_has_no_picks() {
        let weather = with_forecast(snapshot(80.0, true), &[10.0]);
        let advice = Advice::from_ranked(&weather, &[]);
        assert!(advice.best_free.is_none());
        assert!(advice.best_quality.is_none());
        assert!(advice.fastest.is_none());
        assert!(advice.best_all_weather.is_none());
        assert_eq!(advice.trend, Some(ForecastTrend::Improving));
    }
}
