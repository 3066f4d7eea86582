use serde::Serialize;

use super::Provider;

/// Inclusive `(min, max)` pair used for cost and latency ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const ZERO: Bounds = Bounds { min: 0.0, max: 0.0 };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn scale(&self, factor: f64) -> Bounds {
        Bounds {
            min: self.min * factor,
            max: self.max * factor,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Sar,
    Optical,
}

impl SensorKind {
    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::Sar => "SAR",
            SensorKind::Optical => "Optical",
        }
    }
}

/// Static description of an imaging constellation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstellationSpec {
    pub name: String,
    pub provider: Provider,
    pub satellites: Vec<String>,
    pub resolution_m: f64,
    pub revisit_time_days: f64,
    pub spectral_bands: u32,
    pub has_sar: bool,
    pub has_optical: bool,
    pub swath_width_km: f64,
    pub data_latency_hours: Bounds,
    pub cost_per_sqkm: Bounds,
    pub free_tier: bool,
    pub api_available: bool,
    pub streaming_available: bool,
    /// Highest cloud cover (percent) at which optical imagery is still usable.
    pub min_cloud_ok_pct: f64,
    pub requires_daylight: bool,
    /// Hours since the last overflight at the reference location.
    pub last_pass_offset_hours: f64,
}

impl ConstellationSpec {
    pub fn is_weather_independent(&self) -> bool {
        self.has_sar
    }

    pub fn is_free(&self) -> bool {
        self.cost_per_sqkm.is_zero()
    }

    pub fn kind(&self) -> SensorKind {
        if self.has_sar {
            SensorKind::Sar
        } else {
            SensorKind::Optical
        }
    }

    pub fn revisit_hours(&self) -> f64 {
        self.revisit_time_days * 24.0
    }

    /// Cost range in USD for imaging `area_sqkm` once.
    pub fn estimate_cost(&self, area_sqkm: f64) -> Bounds {
        self.cost_per_sqkm.scale(area_sqkm)
    }

    /// Name of the satellite reported on pass records.
    pub fn primary_satellite(&self) -> &str {
        self.satellites.first().map(String::as_str).unwrap_or(&self.name)
    }
}
