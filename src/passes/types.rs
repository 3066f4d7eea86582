use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{Bounds, Provider};

/// An estimated overflight of the area of interest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SatellitePass {
    pub satellite_name: String,
    pub constellation: String,
    pub provider: Provider,
    pub pass_time: DateTime<Utc>,
    pub duration_seconds: f64,
    pub max_elevation_deg: f64,
    pub azimuth_deg: f64,
    pub image_available: bool,
    /// `None` for SAR, which images through cloud.
    pub expected_cloud_coverage: Option<f64>,
    pub resolution_m: f64,
    pub cost_estimate_usd: Bounds,
    pub data_latency_hours: Bounds,
    pub ordering_url: Option<String>,
}

impl SatellitePass {
    pub fn is_free(&self) -> bool {
        self.cost_estimate_usd.is_zero()
    }

    pub fn is_weather_independent(&self) -> bool {
        self.expected_cloud_coverage.is_none()
    }

    pub fn format_cost(&self) -> String {
        if self.is_free() {
            return "FREE".to_string();
        }
        let Bounds { min, max } = self.cost_estimate_usd;
        if min == max {
            format_usd(min)
        } else {
            format!("{} - {}", format_usd(min), format_usd(max))
        }
    }

    pub fn format_latency(&self) -> String {
        let Bounds { min, max } = self.data_latency_hours;
        if min == max {
            format!("{}h", min)
        } else {
            format!("{}-{}h", min, max)
        }
    }
}

/// Whole-dollar amount with thousands separators, e.g. `$12,500`.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pass(cost: Bounds, latency: Bounds, cloud: Option<f64>) -> SatellitePass {
        SatellitePass {
            satellite_name: "WorldView-3".into(),
            constellation: "WorldView-3".into(),
            provider: Provider::Maxar,
            pass_time: Utc.with_ymd_and_hms(2026, 1, 12, 10, 0, 0).unwrap(),
            duration_seconds: 300.0,
            max_elevation_deg: 75.0,
            azimuth_deg: 180.0,
            image_available: true,
            expected_cloud_coverage: cloud,
            resolution_m: 0.31,
            cost_estimate_usd: cost,
            data_latency_hours: latency,
            ordering_url: None,
        }
    }

    #[test]
    fn usd_grouping() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(999.4), "$999");
        assert_eq!(format_usd(1750.0), "$1,750");
        assert_eq!(format_usd(1_234_567.0), "$1,234,567");
        assert_eq!(format_usd(-2500.0), "-$2,500");
    }

    #[test]
    fn cost_formatting() {
        let latency = Bounds::new(1.0, 24.0);
        assert_eq!(pass(Bounds::ZERO, latency, None).format_cost(), "FREE");
        assert_eq!(pass(Bounds::new(500.0, 500.0), latency, None).format_cost(), "$500");
        assert_eq!(
            pass(Bounds::new(1750.0, 3500.0), latency, None).format_cost(),
            "$1,750 - $3,500"
        );
    }

    #[test]
    fn latency_formatting() {
        assert_eq!(pass(Bounds::ZERO, Bounds::new(1.0, 3.0), None).format_latency(), "1-3h");
        assert_eq!(pass(Bounds::ZERO, Bounds::new(0.5, 2.0), None).format_latency(), "0.5-2h");
        assert_eq!(pass(Bounds::ZERO, Bounds::new(6.0, 6.0), None).format_latency(), "6h");
    }

    #[test]
    fn weather_independence_follows_cloud_field() {
        assert!(pass(Bounds::ZERO, Bounds::ZERO, None).is_weather_independent());
        assert!(!pass(Bounds::ZERO, Bounds::ZERO, Some(15.0)).is_weather_independent());
    }

    #[test]
    fn serializes_flat_record() {
        let json = serde_json::to_value(pass(Bounds::new(1.0, 2.0), Bounds::new(1.0, 3.0), None)).unwrap();
        assert_eq!(json["pass_time"], "2026-01-12T10:00:00Z");
        assert_eq!(json["expected_cloud_coverage"], serde_json::Value::Null);
        assert_eq!(json["cost_estimate_usd"]["max"], 2.0);
        assert_eq!(json["provider"], "maxar");
    }
}
