//! Availability overview: when each constellation last delivered and will
//! next deliver imagery, whether current weather suits it, and what it costs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum_macros::Display;

use crate::catalog::{Catalog, ConstellationSpec, Provider, SensorKind};
use crate::passes::{reference_timing, PassError};
use crate::recommend::format_cost;
use crate::weather::WeatherState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum WeatherFit {
    #[strum(to_string = "yes")]
    Yes,
    #[strum(to_string = "marginal")]
    Marginal,
    #[strum(to_string = "no")]
    No,
    /// Optical sensor and no weather data.
    #[strum(to_string = "unknown")]
    Unknown,
}

impl WeatherFit {
    pub fn assess(spec: &ConstellationSpec, weather: &WeatherState) -> Self {
        if spec.is_weather_independent() {
            return WeatherFit::Yes;
        }
        match weather {
            WeatherState::Unconfigured => WeatherFit::Unknown,
            WeatherState::Present(w) if w.is_good_for_optical() => WeatherFit::Yes,
            WeatherState::Present(w) if w.is_usable_for_optical() => WeatherFit::Marginal,
            WeatherState::Present(_) => WeatherFit::No,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityRow {
    pub constellation: String,
    pub provider: Provider,
    pub kind: SensorKind,
    pub resolution_m: f64,
    pub weather_fit: WeatherFit,
    pub last_image_available: DateTime<Utc>,
    pub next_pass: DateTime<Utc>,
    pub next_image_available: DateTime<Utc>,
    pub cost: String,
    pub cost_usd: f64,
    #[serde(skip)]
    cost_per_sqkm: f64,
}

impl AvailabilityRow {
    pub fn is_free(&self) -> bool {
        self.cost_per_sqkm == 0.0
    }
}

/// One row per catalog entry. Free constellations come first in catalog
/// order, followed by commercial ones from cheapest per km².
pub fn availability(
    catalog: &Catalog,
    weather: &WeatherState,
    area_sqkm: f64,
    now: DateTime<Utc>,
) -> Result<Vec<AvailabilityRow>, PassError> {
    let mut rows = catalog
        .iter()
        .map(|spec| {
            let timing = reference_timing(spec, now)?;
            let cost_usd = spec.estimate_cost(area_sqkm).min;
            Ok(AvailabilityRow {
                constellation: spec.name.clone(),
                provider: spec.provider,
                kind: spec.kind(),
                resolution_m: spec.resolution_m,
                weather_fit: WeatherFit::assess(spec, weather),
                last_image_available: timing.last_image_available,
                next_pass: timing.next_pass,
                next_image_available: timing.next_image_available,
                cost: format_cost(cost_usd),
                cost_usd,
                cost_per_sqkm: spec.cost_per_sqkm.min,
            })
        })
        .collect::<Result<Vec<_>, PassError>>()?;

    // Stable, so free rows (all 0.0) keep catalog order
    rows.sort_by(|a, b| a.cost_per_sqkm.total_cmp(&b.cost_per_sqkm));
    Ok(rows)
}

/// The `n` rows whose next image arrives soonest.
pub fn next_available(rows: &[AvailabilityRow], n: usize) -> Vec<&AvailabilityRow> {
    let mut soonest: Vec<_> = rows.iter().collect();
    soonest.sort_by_key(|r| r.next_image_available);
    soonest.truncate(n);
    soonest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::fixtures::snapshot;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn spec(name: &str) -> &'static ConstellationSpec {
        Catalog::builtin().get(name).unwrap()
    }

    fn present(cloud: f64, day: bool) -> WeatherState {
        WeatherState::Present(snapshot(cloud, day))
    }

    #[test]
    fn weather_fit_rules() {
        let optical = spec("Sentinel-2");
        assert_eq!(WeatherFit::assess(optical, &WeatherState::Unconfigured), WeatherFit::Unknown);
        assert_eq!(WeatherFit::assess(optical, &present(29.0, true)), WeatherFit::Yes);
        assert_eq!(WeatherFit::assess(optical, &present(30.0, true)), WeatherFit::Marginal);
        assert_eq!(WeatherFit::assess(optical, &present(59.0, true)), WeatherFit::Marginal);
        assert_eq!(WeatherFit::assess(optical, &present(60.0, true)), WeatherFit::No);
        assert_eq!(WeatherFit::assess(optical, &present(0.0, false)), WeatherFit::No);

        let sar = spec("ICEYE");
        assert_eq!(WeatherFit::assess(sar, &WeatherState::Unconfigured), WeatherFit::Yes);
        assert_eq!(WeatherFit::assess(sar, &present(100.0, false)), WeatherFit::Yes);
    }

    #[test]
    fn free_first_then_cheapest() {
        let rows = availability(Catalog::builtin(), &WeatherState::Unconfigured, 100.0, now()).unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.constellation.as_str()).collect();
        assert_eq!(
            names,
            [
                "Sentinel-1",
                "Sentinel-2",
                "Landsat-9",
                "PlanetScope",
                "BlackSky",
                "SPOT",
                "SkySat",
                "WorldView-2",
                "WorldView-3",
                "Pleiades",
                "Capella",
                "ICEYE",
            ]
        );
        assert!(rows[..3].iter().all(AvailabilityRow::is_free));
        assert_eq!(rows[0].cost, "FREE");
        assert_eq!(rows[3].cost, "$180");
    }

    #[test]
    fn timing_uses_reference_offset() {
        let rows = availability(Catalog::builtin(), &present(10.0, true), 100.0, now()).unwrap();
        let wv3 = rows.iter().find(|r| r.constellation == "WorldView-3").unwrap();
        // 8h ago, 24h revisit, 24h latency
        assert_eq!(wv3.last_image_available, now() + Duration::hours(16));
        assert_eq!(wv3.next_pass, now() + Duration::hours(16));
        assert_eq!(wv3.next_image_available, now() + Duration::hours(40));
        assert_eq!(wv3.weather_fit, WeatherFit::Yes);

        let landsat = rows.iter().find(|r| r.constellation == "Landsat-9").unwrap();
        assert_eq!(landsat.next_pass, now() + Duration::hours(384 - 120));
    }

    #[test]
    fn next_available_is_soonest_first() {
        let rows = availability(Catalog::builtin(), &WeatherState::Unconfigured, 100.0, now()).unwrap();
        let soonest = next_available(&rows, 5);
        assert_eq!(soonest.len(), 5);
        assert!(soonest
            .windows(2)
            .all(|w| w[0].next_image_available <= w[1].next_image_available));
        // Capella: 6h to next pass + 2h latency
        assert_eq!(soonest[0].constellation, "Capella");
        assert_eq!(soonest[0].next_image_available, now() + Duration::hours(8));
        assert_eq!(soonest[1].constellation, "ICEYE");

        assert!(next_available(&rows, 0).is_empty());
        assert_eq!(next_available(&rows, 50).len(), rows.len());
    }

    #[test]
    fn invalid_timing_is_reported() {
        let mut broken = spec("SPOT").clone();
        broken.last_pass_offset_hours = f64::MAX;
        let catalog = Catalog::builtin().with_override(broken);
        assert!(availability(&catalog, &WeatherState::Unconfigured, 1.0, now()).is_err());
    }
}
