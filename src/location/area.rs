use serde::Serialize;

use super::error::LocationError;
use super::Location;

pub const KM_PER_DEG_LAT: f64 = 111.32;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

/// Rectangular area of interest. The surface estimate is computed once at
/// construction since the bounds never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Area {
    name: String,
    bbox: BoundingBox,
    area_sqkm: f64,
}

impl Area {
    pub fn new(
        name: impl Into<String>,
        min_lon: f64,
        max_lon: f64,
        min_lat: f64,
        max_lat: f64,
    ) -> Result<Self, LocationError> {
        if !(min_lon.is_finite() && max_lon.is_finite() && min_lon < max_lon) {
            return Err(LocationError::InvalidBounds {
                axis: "lon",
                min: min_lon,
                max: max_lon,
            });
        }
        if !(min_lat.is_finite() && max_lat.is_finite() && min_lat < max_lat) {
            return Err(LocationError::InvalidBounds {
                axis: "lat",
                min: min_lat,
                max: max_lat,
            });
        }
        let bbox = BoundingBox {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        };
        Ok(Self {
            name: name.into(),
            area_sqkm: flat_earth_area(&bbox),
            bbox,
        })
    }

    /// Fixed box over the Brussels region.
    #[allow(dead_code)]
    pub fn brussels() -> Self {
        let bbox = BoundingBox {
            min_lon: 4.2,
            max_lon: 4.5,
            min_lat: 50.75,
            max_lat: 50.95,
        };
        Self {
            name: "Brussels".into(),
            area_sqkm: flat_earth_area(&bbox),
            bbox,
        }
    }

    /// Square area extending `radius_km` from the center along both axes.
    ///
    /// Bounds are clamped to ±90° latitude and ±180° longitude. Near a pole
    /// or the antimeridian the box is therefore cut short and no longer
    /// centered on the requested point; it never wraps around.
    pub fn from_center(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Self, LocationError> {
        if !(radius_km.is_finite() && radius_km > 0.0) {
            return Err(LocationError::InvalidBounds {
                axis: "radius",
                min: 0.0,
                max: radius_km,
            });
        }
        let delta_lat = radius_km / KM_PER_DEG_LAT;
        let delta_lon = radius_km / (KM_PER_DEG_LAT * latitude.to_radians().cos());
        Self::new(
            name,
            (longitude - delta_lon).max(-180.0),
            (longitude + delta_lon).min(180.0),
            (latitude - delta_lat).max(-90.0),
            (latitude + delta_lat).min(90.0),
        )
    }

    pub fn from_location(location: &Location, radius_km: f64) -> Result<Self, LocationError> {
        Self::from_center(
            location.name(),
            location.latitude(),
            location.longitude(),
            radius_km,
        )
    }

    #[allow(dead_code)]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn area_sqkm(&self) -> f64 {
        self.area_sqkm
    }

    /// `(latitude, longitude)` of the box center.
    #[allow(dead_code)]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.bbox.min_lat + self.bbox.max_lat) / 2.0,
            (self.bbox.min_lon + self.bbox.max_lon) / 2.0,
        )
    }

    pub fn to_bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Closed WKT polygon, counter-clockwise from the south-west corner.
    pub fn to_wkt(&self) -> String {
        let b = &self.bbox;
        format!(
            "POLYGON(({} {}, {} {}, {} {}, {} {}, {} {}))",
            b.min_lon, b.min_lat,
            b.max_lon, b.min_lat,
            b.max_lon, b.max_lat,
            b.min_lon, b.max_lat,
            b.min_lon, b.min_lat,
        )
    }

    #[allow(dead_code)]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        let b = &self.bbox;
        (b.min_lat..=b.max_lat).contains(&latitude) && (b.min_lon..=b.max_lon).contains(&longitude)
    }
}

fn flat_earth_area(b: &BoundingBox) -> f64 {
    let center_lat = (b.min_lat + b.max_lat) / 2.0;
    let lon_km = KM_PER_DEG_LAT * center_lat.to_radians().cos();
    let width_km = (b.max_lon - b.min_lon) * lon_km;
    let height_km = (b.max_lat - b.min_lat) * KM_PER_DEG_LAT;
    width_km * height_km
}
