use serde::Serialize;
use thiserror::Error;

use crate::catalog::Catalog;

/// Days per month used for cadence arithmetic.
const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Error, Debug, PartialEq)]
pub enum CoverageError {
    #[error("Imaging frequency must be positive, got {0} days")]
    InvalidFrequency(f64),
    #[error("Coverage duration must be positive, got {0} months")]
    InvalidDuration(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageEstimate {
    pub constellation: String,
    pub min_monthly_usd: f64,
    pub max_monthly_usd: f64,
    pub resolution_m: f64,
    pub actual_frequency_days: f64,
}

/// Cost of imaging `area_sqkm` every `frequency_days` for `duration_months`
/// with every constellation that is both fine enough and revisits often
/// enough. Image counts are fractional, representing an average cadence.
/// Results keep catalog order.
pub fn estimate_monthly_cost(
    catalog: &Catalog,
    area_sqkm: f64,
    max_resolution_m: f64,
    frequency_days: f64,
    duration_months: f64,
) -> Result<Vec<CoverageEstimate>, CoverageError> {
    if !(frequency_days > 0.0) {
        return Err(CoverageError::InvalidFrequency(frequency_days));
    }
    if !(duration_months > 0.0) {
        return Err(CoverageError::InvalidDuration(duration_months));
    }

    let images_needed = DAYS_PER_MONTH * duration_months / frequency_days;
    log::debug!(
        "Coverage: {:.1} images over {} months for {:.1} km²",
        images_needed,
        duration_months,
        area_sqkm
    );

    Ok(catalog
        .by_resolution(max_resolution_m)
        .filter(|spec| spec.revisit_time_days <= frequency_days)
        .map(|spec| {
            let per_image = spec.estimate_cost(area_sqkm);
            CoverageEstimate {
                constellation: spec.name.clone(),
                min_monthly_usd: per_image.min * images_needed,
                max_monthly_usd: per_image.max * images_needed,
                resolution_m: spec.resolution_m,
                actual_frequency_days: spec.revisit_time_days,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Bounds;

    fn two_entry_catalog() -> Catalog {
        let builtin = Catalog::builtin();
        let free = builtin.get("Sentinel-1").unwrap().clone();
        let mut paid = builtin.get("PlanetScope").unwrap().clone();
        paid.cost_per_sqkm = Bounds::new(2.0, 4.0);
        Catalog::new(vec![free, paid])
    }

    #[test]
    fn slow_revisit_is_filtered_out() {
        let estimates = estimate_monthly_cost(&two_entry_catalog(), 100.0, 5.0, 1.0, 1.0).unwrap();
        assert_eq!(
            estimates,
            [CoverageEstimate {
                constellation: "PlanetScope".into(),
                min_monthly_usd: 6000.0,
                max_monthly_usd: 12000.0,
                resolution_m: 3.0,
                actual_frequency_days: 1.0,
            }]
        );
    }

    #[test]
    fn coarse_resolution_is_filtered_out() {
        let estimates = estimate_monthly_cost(&two_entry_catalog(), 100.0, 2.0, 7.0, 1.0).unwrap();
        assert!(estimates.is_empty());
    }

    #[test]
    fn fractional_image_counts() {
        // 30 / 7 images a month
        let estimates = estimate_monthly_cost(&two_entry_catalog(), 70.0, 10.0, 7.0, 1.0).unwrap();
        assert_eq!(estimates.len(), 2);
        assert_eq!(estimates[0].min_monthly_usd, 0.0);
        assert!((estimates[1].min_monthly_usd - 600.0).abs() < 1e-9);
        assert!((estimates[1].max_monthly_usd - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn free_tier_stays_free_over_time() {
        let estimates = estimate_monthly_cost(Catalog::builtin(), 1000.0, 20.0, 30.0, 12.0).unwrap();
        for e in estimates.iter().filter(|e| e.constellation.starts_with("Sentinel")) {
            assert_eq!((e.min_monthly_usd, e.max_monthly_usd), (0.0, 0.0));
        }
        assert_eq!(estimates.len(), Catalog::builtin().len());
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let catalog = Catalog::builtin();
        assert_eq!(
            estimate_monthly_cost(catalog, 1.0, 1.0, 0.0, 1.0),
            Err(CoverageError::InvalidFrequency(0.0))
        );
        assert_eq!(
            estimate_monthly_cost(catalog, 1.0, 1.0, 1.0, -2.0),
            Err(CoverageError::InvalidDuration(-2.0))
        );
        assert!(estimate_monthly_cost(catalog, 1.0, 1.0, f64::NAN, 1.0).is_err());
    }
}
