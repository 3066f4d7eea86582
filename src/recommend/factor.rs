use std::fmt;

use serde::Serialize;

pub const BASE_SCORE: f64 = 100.0;
pub const ALL_WEATHER_BONUS: f64 = 30.0;
pub const CLEAR_SKY_BONUS: f64 = 20.0;
pub const CLOUD_PENALTY_PER_PCT: f64 = 2.0;
pub const NIGHT_PENALTY: f64 = 50.0;
pub const OVER_BUDGET_PENALTY: f64 = 20.0;
pub const FREE_DATA_BONUS: f64 = 15.0;
pub const RESOLUTION_PENALTY: f64 = 15.0;
pub const TOO_SLOW_PENALTY: f64 = 25.0;
pub const FAST_DELIVERY_BONUS: f64 = 10.0;
/// ETA at or under which delivery counts as fast.
pub const FAST_DELIVERY_HOURS: f64 = 24.0;

/// One scoring adjustment, recorded in evaluation order so a score can be
/// explained after the fact.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "factor", rename_all = "snake_case")]
pub enum ScoreFactor {
    AllWeather,
    GoodCloudConditions { cloud_cover_pct: f64 },
    TooCloudy { cloud_cover_pct: f64, threshold_pct: f64 },
    RequiresDaylight,
    OverBudget { cost_usd: f64, budget_usd: f64 },
    FreeData,
    ResolutionBelowRequirement { actual_m: f64, required_m: f64 },
    TooSlow { eta_hours: f64, required_hours: f64 },
    FastDelivery { eta_hours: f64 },
}

impl ScoreFactor {
    /// Points added to (or removed from) the base score.
    pub fn points(&self) -> f64 {
        match self {
            ScoreFactor::AllWeather => ALL_WEATHER_BONUS,
            ScoreFactor::GoodCloudConditions { .. } => CLEAR_SKY_BONUS,
            ScoreFactor::TooCloudy {
                cloud_cover_pct,
                threshold_pct,
            } => -(cloud_cover_pct - threshold_pct) * CLOUD_PENALTY_PER_PCT,
            ScoreFactor::RequiresDaylight => -NIGHT_PENALTY,
            ScoreFactor::OverBudget { .. } => -OVER_BUDGET_PENALTY,
            ScoreFactor::FreeData => FREE_DATA_BONUS,
            ScoreFactor::ResolutionBelowRequirement { .. } => -RESOLUTION_PENALTY,
            ScoreFactor::TooSlow { .. } => -TOO_SLOW_PENALTY,
            ScoreFactor::FastDelivery { .. } => FAST_DELIVERY_BONUS,
        }
    }

    /// Whether this factor makes current conditions unusable.
    pub fn is_weather_blocker(&self) -> bool {
        matches!(
            self,
            ScoreFactor::TooCloudy { .. } | ScoreFactor::RequiresDaylight
        )
    }
}

impl fmt::Display for ScoreFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreFactor::AllWeather => write!(f, "All-weather capability (SAR)"),
            ScoreFactor::GoodCloudConditions { cloud_cover_pct } => {
                write!(f, "Good cloud conditions ({:.0}%)", cloud_cover_pct)
            }
            ScoreFactor::TooCloudy {
                cloud_cover_pct,
                threshold_pct,
            } => write!(
                f,
                "Too cloudy ({:.0}% > {}% threshold)",
                cloud_cover_pct, threshold_pct
            ),
            ScoreFactor::RequiresDaylight => write!(f, "Requires daylight (currently night)"),
            ScoreFactor::OverBudget {
                cost_usd,
                budget_usd,
            } => write!(f, "Over budget (${:.0} > ${:.0})", cost_usd, budget_usd),
            ScoreFactor::FreeData => write!(f, "Free data"),
            ScoreFactor::ResolutionBelowRequirement {
                actual_m,
                required_m,
            } => write!(
                f,
                "Lower resolution than required ({}m > {}m)",
                actual_m, required_m
            ),
            ScoreFactor::TooSlow {
                eta_hours,
                required_hours,
            } => write!(
                f,
                "Too slow (ETA {}h > {}h required)",
                eta_hours, required_hours
            ),
            ScoreFactor::FastDelivery { eta_hours } => write!(f, "Fast delivery ({}h)", eta_hours),
        }
    }
}
