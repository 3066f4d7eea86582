use std::sync::OnceLock;

use super::{Bounds, ConstellationSpec, Provider};

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Conjunction of listing criteria; the default matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CatalogFilter {
    pub free_only: bool,
    pub sar_only: bool,
    pub optical_only: bool,
    pub max_resolution_m: Option<f64>,
}

impl CatalogFilter {
    pub fn matches(&self, spec: &ConstellationSpec) -> bool {
        (!self.free_only || spec.free_tier)
            && (!self.sar_only || spec.has_sar)
            && (!self.optical_only || spec.has_optical)
            && self.max_resolution_m.map_or(true, |max| spec.resolution_m <= max)
    }
}

/// Ordered set of constellations. Iteration order is insertion order and is
/// the tie-break for every ranking built on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<ConstellationSpec>,
}

impl Catalog {
    pub fn new(entries: Vec<ConstellationSpec>) -> Self {
        Self { entries }
    }

    /// Process-wide read-only table, built on first use.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| Catalog::new(builtin_entries()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConstellationSpec> {
        self.entries.iter()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[allow(dead_code)]
    pub fn get(&self, name: &str) -> Option<&ConstellationSpec> {
        self.entries.iter().find(|s| s.name == name)
    }

    /// Returns a copy with `spec` replacing the entry of the same name, or
    /// appended when no such entry exists.
    #[allow(dead_code)]
    pub fn with_override(&self, spec: ConstellationSpec) -> Catalog {
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|s| s.name == spec.name) {
            Some(slot) => *slot = spec,
            None => entries.push(spec),
        }
        Catalog { entries }
    }

    /// Entries matching `filter`, in catalog order.
    pub fn select(&self, filter: CatalogFilter) -> impl Iterator<Item = &ConstellationSpec> {
        self.iter().filter(move |s| filter.matches(s))
    }

    pub fn sar(&self) -> impl Iterator<Item = &ConstellationSpec> {
        self.select(CatalogFilter {
            sar_only: true,
            ..Default::default()
        })
    }

    /// Constellations whose resolution is at least as fine as `max_resolution_m`.
    pub fn by_resolution(&self, max_resolution_m: f64) -> impl Iterator<Item = &ConstellationSpec> {
        self.select(CatalogFilter {
            max_resolution_m: Some(max_resolution_m),
            ..Default::default()
        })
    }
}

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn numbered(prefix: &str, count: u32) -> Vec<String> {
    (1..=count).map(|i| format!("{}{}", prefix, i)).collect()
}

fn builtin_entries() -> Vec<ConstellationSpec> {
    vec![
        ConstellationSpec {
            name: "Sentinel-1".into(),
            provider: Provider::SentinelEsa,
            satellites: names(&["Sentinel-1A", "Sentinel-1B"]),
            resolution_m: 5.0,
            revisit_time_days: 6.0,
            spectral_bands: 1,
            has_sar: true,
            has_optical: false,
            swath_width_km: 250.0,
            data_latency_hours: Bounds::new(1.0, 3.0),
            cost_per_sqkm: Bounds::ZERO,
            free_tier: true,
            api_available: true,
            streaming_available: true,
            min_cloud_ok_pct: 100.0,
            requires_daylight: false,
            last_pass_offset_hours: 36.0,
        },
        ConstellationSpec {
            name: "Sentinel-2".into(),
            provider: Provider::SentinelEsa,
            satellites: names(&["Sentinel-2A", "Sentinel-2B"]),
            resolution_m: 10.0,
            revisit_time_days: 5.0,
            spectral_bands: 13,
            has_sar: false,
            has_optical: true,
            swath_width_km: 290.0,
            data_latency_hours: Bounds::new(1.0, 3.0),
            cost_per_sqkm: Bounds::ZERO,
            free_tier: true,
            api_available: true,
            streaming_available: true,
            min_cloud_ok_pct: 30.0,
            requires_daylight: true,
            last_pass_offset_hours: 24.0,
        },
        ConstellationSpec {
            name: "WorldView-3".into(),
            provider: Provider::Maxar,
            satellites: names(&["WorldView-3"]),
            resolution_m: 0.31,
            revisit_time_days: 1.0,
            spectral_bands: 29,
            has_sar: false,
            has_optical: true,
            swath_width_km: 13.1,
            data_latency_hours: Bounds::new(1.0, 24.0),
            cost_per_sqkm: Bounds::new(17.5, 35.0),
            free_tier: false,
            api_available: true,
            streaming_available: false,
            min_cloud_ok_pct: 10.0,
            requires_daylight: true,
            last_pass_offset_hours: 8.0,
        },
        ConstellationSpec {
            name: "WorldView-2".into(),
            provider: Provider::Maxar,
            satellites: names(&["WorldView-2"]),
            resolution_m: 0.46,
            revisit_time_days: 1.1,
            spectral_bands: 9,
            has_sar: false,
            has_optical: true,
            swath_width_km: 16.4,
            data_latency_hours: Bounds::new(1.0, 24.0),
            cost_per_sqkm: Bounds::new(15.0, 30.0),
            free_tier: false,
            api_available: true,
            streaming_available: false,
            min_cloud_ok_pct: 10.0,
            requires_daylight: true,
            last_pass_offset_hours: 12.0,
        },
        ConstellationSpec {
            name: "PlanetScope".into(),
            provider: Provider::Planet,
            satellites: numbered("Dove-", 200),
            resolution_m: 3.0,
            revisit_time_days: 1.0,
            spectral_bands: 8,
            has_sar: false,
            has_optical: true,
            swath_width_km: 32.5,
            data_latency_hours: Bounds::new(1.0, 12.0),
            cost_per_sqkm: Bounds::new(1.8, 3.5),
            free_tier: false,
            api_available: true,
            streaming_available: true,
            min_cloud_ok_pct: 20.0,
            requires_daylight: true,
            last_pass_offset_hours: 4.0,
        },
        ConstellationSpec {
            name: "SkySat".into(),
            provider: Provider::Planet,
            satellites: numbered("SkySat-", 21),
            resolution_m: 0.5,
            revisit_time_days: 1.0,
            spectral_bands: 4,
            has_sar: false,
            has_optical: true,
            swath_width_km: 8.0,
            data_latency_hours: Bounds::new(1.0, 6.0),
            cost_per_sqkm: Bounds::new(8.0, 15.0),
            free_tier: false,
            api_available: true,
            streaming_available: true,
            min_cloud_ok_pct: 15.0,
            requires_daylight: true,
            last_pass_offset_hours: 6.0,
        },
        ConstellationSpec {
            name: "Pleiades".into(),
            provider: Provider::Airbus,
            satellites: names(&["Pleiades-1A", "Pleiades-1B", "Pleiades-Neo-3", "Pleiades-Neo-4"]),
            resolution_m: 0.3,
            revisit_time_days: 1.0,
            spectral_bands: 6,
            has_sar: false,
            has_optical: true,
            swath_width_km: 20.0,
            data_latency_hours: Bounds::new(1.0, 24.0),
            cost_per_sqkm: Bounds::new(20.0, 40.0),
            free_tier: false,
            api_available: true,
            streaming_available: false,
            min_cloud_ok_pct: 10.0,
            requires_daylight: true,
            last_pass_offset_hours: 14.0,
        },
        ConstellationSpec {
            name: "SPOT".into(),
            provider: Provider::Airbus,
            satellites: names(&["SPOT-6", "SPOT-7"]),
            resolution_m: 1.5,
            revisit_time_days: 1.0,
            spectral_bands: 5,
            has_sar: false,
            has_optical: true,
            swath_width_km: 60.0,
            data_latency_hours: Bounds::new(2.0, 24.0),
            cost_per_sqkm: Bounds::new(5.0, 10.0),
            free_tier: false,
            api_available: true,
            streaming_available: false,
            min_cloud_ok_pct: 20.0,
            requires_daylight: true,
            last_pass_offset_hours: 20.0,
        },
        ConstellationSpec {
            name: "BlackSky".into(),
            provider: Provider::BlackSky,
            satellites: numbered("Global-", 16),
            resolution_m: 1.0,
            revisit_time_days: 1.0,
            spectral_bands: 3,
            has_sar: false,
            has_optical: true,
            swath_width_km: 5.0,
            data_latency_hours: Bounds::new(0.5, 2.0),
            cost_per_sqkm: Bounds::new(3.0, 6.0),
            free_tier: false,
            api_available: true,
            streaming_available: true,
            min_cloud_ok_pct: 25.0,
            requires_daylight: true,
            last_pass_offset_hours: 2.0,
        },
        ConstellationSpec {
            name: "ICEYE".into(),
            provider: Provider::Iceye,
            satellites: numbered("ICEYE-X", 31),
            resolution_m: 0.25,
            revisit_time_days: 1.0,
            spectral_bands: 1,
            has_sar: true,
            has_optical: false,
            swath_width_km: 5.0,
            data_latency_hours: Bounds::new(0.5, 3.0),
            cost_per_sqkm: Bounds::new(50.0, 150.0),
            free_tier: false,
            api_available: true,
            streaming_available: true,
            min_cloud_ok_pct: 100.0,
            requires_daylight: false,
            last_pass_offset_hours: 10.0,
        },
        ConstellationSpec {
            name: "Capella".into(),
            provider: Provider::Capella,
            satellites: numbered("Capella-", 10),
            resolution_m: 0.5,
            revisit_time_days: 1.0,
            spectral_bands: 1,
            has_sar: true,
            has_optical: false,
            swath_width_km: 5.0,
            data_latency_hours: Bounds::new(0.5, 2.0),
            cost_per_sqkm: Bounds::new(40.0, 120.0),
            free_tier: false,
            api_available: true,
            streaming_available: true,
            min_cloud_ok_pct: 100.0,
            requires_daylight: false,
            last_pass_offset_hours: 18.0,
        },
        ConstellationSpec {
            name: "Landsat-9".into(),
            provider: Provider::LandsatUsgs,
            satellites: names(&["Landsat-9"]),
            resolution_m: 15.0,
            revisit_time_days: 16.0,
            spectral_bands: 11,
            has_sar: false,
            has_optical: true,
            swath_width_km: 185.0,
            data_latency_hours: Bounds::new(12.0, 48.0),
            cost_per_sqkm: Bounds::ZERO,
            free_tier: true,
            api_available: true,
            streaming_available: false,
            min_cloud_ok_pct: 30.0,
            requires_daylight: true,
            last_pass_offset_hours: 120.0,
        },
    ]
}
