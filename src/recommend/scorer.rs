use log::debug;

use super::factor::{ScoreFactor, BASE_SCORE, FAST_DELIVERY_HOURS};
use super::types::{Constraints, FallbackOption, Quality, Recommendation, RecommendationOutcome};
use crate::catalog::{Catalog, ConstellationSpec};
use crate::passes::format_usd;
use crate::weather::{WeatherSnapshot, WeatherState};

/// Hours from now until fresh imagery could be delivered.
pub fn eta_hours(spec: &ConstellationSpec) -> f64 {
    spec.revisit_hours() + spec.data_latency_hours.max
}

pub fn format_cost(cost_usd: f64) -> String {
    if cost_usd == 0.0 {
        "FREE".to_string()
    } else {
        format_usd(cost_usd)
    }
}

/// Score a single constellation against current weather and the user's
/// constraints.
///
/// Adjustments are summed onto the base score and the total is clamped to
/// 0..=100. Penalties are unbounded before the clamp, so several clearly bad
/// options can all end up at 0.
pub fn score(
    spec: &ConstellationSpec,
    weather: &WeatherSnapshot,
    area_sqkm: f64,
    constraints: &Constraints,
) -> Recommendation {
    let mut reasons = Vec::new();

    // Low end of the range is the canonical cost
    let cost_usd = spec.estimate_cost(area_sqkm).min;

    if spec.is_weather_independent() {
        reasons.push(ScoreFactor::AllWeather);
    } else {
        let cloud = weather.current_cloud_cover;
        if cloud > spec.min_cloud_ok_pct {
            reasons.push(ScoreFactor::TooCloudy {
                cloud_cover_pct: cloud,
                threshold_pct: spec.min_cloud_ok_pct,
            });
        } else {
            reasons.push(ScoreFactor::GoodCloudConditions {
                cloud_cover_pct: cloud,
            });
        }

        if spec.requires_daylight && !weather.is_daylight {
            reasons.push(ScoreFactor::RequiresDaylight);
        }
    }

    match constraints.max_budget {
        Some(budget) if cost_usd > budget => reasons.push(ScoreFactor::OverBudget {
            cost_usd,
            budget_usd: budget,
        }),
        _ if cost_usd == 0.0 => reasons.push(ScoreFactor::FreeData),
        _ => {}
    }

    if let Some(required) = constraints.min_resolution {
        if spec.resolution_m > required {
            reasons.push(ScoreFactor::ResolutionBelowRequirement {
                actual_m: spec.resolution_m,
                required_m: required,
            });
        }
    }

    let eta = eta_hours(spec);
    match constraints.urgency_hours {
        Some(required) if eta > required => reasons.push(ScoreFactor::TooSlow {
            eta_hours: eta,
            required_hours: required,
        }),
        _ if eta <= FAST_DELIVERY_HOURS => reasons.push(ScoreFactor::FastDelivery { eta_hours: eta }),
        _ => {}
    }

    let weather_suitable = !reasons.iter().any(ScoreFactor::is_weather_blocker);
    let raw = BASE_SCORE + reasons.iter().map(ScoreFactor::points).sum::<f64>();
    let score = raw.clamp(0.0, 100.0);

    debug!(
        "Scored {}: {:.1} (raw {:.1}, cost=${:.0}, eta={}h, suitable={})",
        spec.name, score, raw, cost_usd, eta, weather_suitable
    );

    Recommendation {
        satellite_name: spec.name.clone(),
        provider: spec.provider,
        score,
        reasons,
        estimated_quality: Quality::from_score(score),
        cost: format_cost(cost_usd),
        cost_usd,
        eta_hours: eta,
        weather_suitable,
    }
}

/// Scores every catalog entry, best first. Equal scores keep catalog order.
pub fn rank(
    catalog: &Catalog,
    weather: &WeatherSnapshot,
    area_sqkm: f64,
    constraints: &Constraints,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<_> = catalog
        .iter()
        .map(|spec| score(spec, weather, area_sqkm, constraints))
        .collect();
    // `sort_by` is stable
    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations
}

/// SAR options with their cost for the area, in catalog order.
pub fn weather_independent_options(catalog: &Catalog, area_sqkm: f64) -> Vec<FallbackOption> {
    catalog
        .sar()
        .map(|spec| {
            let cost_usd = spec.estimate_cost(area_sqkm).min;
            FallbackOption {
                satellite_name: spec.name.clone(),
                provider: spec.provider,
                resolution_m: spec.resolution_m,
                cost: format_cost(cost_usd),
                cost_usd,
            }
        })
        .collect()
}

/// Ranks the catalog when weather is known; otherwise offers only
/// weather-independent options without scoring.
pub fn recommend(
    catalog: &Catalog,
    weather: &WeatherState,
    area_sqkm: f64,
    constraints: &Constraints,
) -> RecommendationOutcome {
    match weather {
        WeatherState::Present(snapshot) => {
            RecommendationOutcome::Ranked(rank(catalog, snapshot, area_sqkm, constraints))
        }
        WeatherState::Unconfigured => {
            log::info!("No weather data, limiting recommendations to all-weather options");
            RecommendationOutcome::WeatherIndependentOnly(weather_independent_options(
                catalog, area_sqkm,
            ))
        }
    }
}
