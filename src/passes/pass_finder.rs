use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::catalog::{Bounds, Catalog, ConstellationSpec, Provider};
use crate::passes::error::PassError;
use crate::passes::timing::{hours, pass_timing, shift};
use crate::passes::types::SatellitePass;

// Nominal overflight geometry; no orbit is propagated.
const PASS_DURATION_SECONDS: f64 = 300.0;
const MAX_ELEVATION_DEG: f64 = 75.0;
const AZIMUTH_DEG: f64 = 180.0;
/// Cloud cover assumed for optical passes until a forecast says otherwise.
const NOMINAL_CLOUD_COVERAGE_PCT: f64 = 15.0;

/// Evenly spaced passes for one constellation in `[start, start + hours_ahead)`,
/// one per revisit interval starting at `start`.
pub fn predict_passes(
    spec: &ConstellationSpec,
    area_sqkm: f64,
    start: DateTime<Utc>,
    hours_ahead: f64,
) -> Result<Vec<SatellitePass>, PassError> {
    let revisit_hours = spec.revisit_hours();
    let step = hours(revisit_hours)
        .filter(|step| *step > Duration::zero())
        .ok_or_else(|| PassError::InvalidConstellation {
            name: spec.name.clone(),
            revisit_hours,
        })?;

    let end = shift(start, hours_ahead).ok_or_else(|| PassError::TimeOverflow(spec.name.clone()))?;
    let cost = spec.estimate_cost(area_sqkm);

    let mut passes = Vec::new();
    let mut cursor = start;

    while cursor < end {
        passes.push(build_pass(spec, cursor, cost));
        cursor = match cursor.checked_add_signed(step) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(passes)
}

/// Passes for every catalog entry, sorted by pass time. Entries that cannot
/// be projected are logged and skipped.
pub fn predict_all(
    catalog: &Catalog,
    area_sqkm: f64,
    start: DateTime<Utc>,
    hours_ahead: f64,
) -> Vec<SatellitePass> {
    let mut all_passes = Vec::new();
    for spec in catalog.iter() {
        log::debug!("Calculating passes for {}", spec.name);
        match predict_passes(spec, area_sqkm, start, hours_ahead) {
            Ok(passes) => all_passes.extend(passes),
            Err(e) => {
                log::warn!("Failed to predict passes for {}: {}", spec.name, e);
            }
        }
    }

    // Stable: simultaneous passes keep catalog order
    all_passes.sort_by_key(|p| p.pass_time);
    all_passes
}

fn build_pass(spec: &ConstellationSpec, pass_time: DateTime<Utc>, cost: Bounds) -> SatellitePass {
    SatellitePass {
        satellite_name: spec.primary_satellite().to_string(),
        constellation: spec.name.clone(),
        provider: spec.provider,
        pass_time,
        duration_seconds: PASS_DURATION_SECONDS,
        max_elevation_deg: MAX_ELEVATION_DEG,
        azimuth_deg: AZIMUTH_DEG,
        image_available: true,
        expected_cloud_coverage: if spec.is_weather_independent() {
            None
        } else {
            Some(NOMINAL_CLOUD_COVERAGE_PCT)
        },
        resolution_m: spec.resolution_m,
        cost_estimate_usd: cost,
        data_latency_hours: spec.data_latency_hours,
        ordering_url: spec.provider.ordering_url().map(String::from),
    }
}

/// Most recent archived acquisition for a constellation.
#[derive(Debug, Clone, Serialize)]
pub struct LastImage {
    pub constellation: String,
    pub provider: Provider,
    pub last_acquisition: DateTime<Utc>,
    pub data_available_since: DateTime<Utc>,
    pub resolution_m: f64,
    pub cost_estimate_usd: Bounds,
    pub free: bool,
    pub has_sar: bool,
    pub ordering_url: Option<&'static str>,
}

/// Assumes the last acquisition happened one full revisit interval ago.
pub fn last_available_images(
    catalog: &Catalog,
    area_sqkm: f64,
    now: DateTime<Utc>,
) -> Result<Vec<LastImage>, PassError> {
    catalog
        .iter()
        .map(|spec| {
            let timing = pass_timing(spec, spec.revisit_hours(), now)?;
            Ok(LastImage {
                constellation: spec.name.clone(),
                provider: spec.provider,
                last_acquisition: timing.last_pass,
                data_available_since: timing.last_image_available,
                resolution_m: spec.resolution_m,
                cost_estimate_usd: spec.estimate_cost(area_sqkm),
                free: spec.free_tier,
                has_sar: spec.has_sar,
                ordering_url: spec.provider.ordering_url(),
            })
        })
        .collect()
}
